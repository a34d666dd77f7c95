use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{CompletionClient, FileLoader};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    extract_handler, flashcards_handler, health_handler, quiz_handler, summarize_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<F, C>(state: AppState<F, C>) -> Router
where
    F: FileLoader + 'static,
    C: CompletionClient + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // Multipart framing overhead on top of the configured document limit.
    let body_limit = state.settings.extraction.max_file_size_mb * 1024 * 1024 + 64 * 1024;

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/v1/extract", post(extract_handler::<F, C>))
        .route("/api/v1/summarize", post(summarize_handler::<F, C>))
        .route("/api/v1/flashcards", post(flashcards_handler::<F, C>))
        .route("/api/v1/quiz", post(quiz_handler::<F, C>))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
