use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::ports::{CompletionClient, FileLoader};
use crate::application::services::ArtifactSource;
use crate::infrastructure::observability::sanitize_for_log;
use crate::presentation::state::AppState;

use super::summarize::study_error_response;
use super::HEURISTIC_NOTE;

const DEFAULT_COUNT: usize = 10;

#[derive(Deserialize)]
pub struct FlashcardsRequest {
    pub text: String,
    #[serde(default = "default_count")]
    pub count: usize,
}

fn default_count() -> usize {
    DEFAULT_COUNT
}

#[derive(Serialize)]
pub struct FlashcardsResponse {
    pub cards: Vec<FlashcardDto>,
    pub generator: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
}

#[derive(Serialize)]
pub struct FlashcardDto {
    pub question: String,
    pub answer: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn flashcards_handler<F, C>(
    State(state): State<AppState<F, C>>,
    Json(request): Json<FlashcardsRequest>,
) -> impl IntoResponse
where
    F: FileLoader + 'static,
    C: CompletionClient + 'static,
{
    tracing::debug!(text = %sanitize_for_log(&request.text), "Processing flashcards request");

    match state
        .study_service
        .flashcards(&request.text, request.count)
        .await
    {
        Ok(outcome) => {
            tracing::info!(
                generator = outcome.source.as_str(),
                card_count = outcome.cards.len(),
                "Flashcards generated"
            );
            let cards = outcome
                .cards
                .into_iter()
                .map(|card| FlashcardDto {
                    question: card.question,
                    answer: card.answer,
                })
                .collect();
            (
                StatusCode::OK,
                Json(FlashcardsResponse {
                    cards,
                    generator: outcome.source.as_str(),
                    note: (outcome.source == ArtifactSource::Heuristic).then_some(HEURISTIC_NOTE),
                }),
            )
                .into_response()
        }
        Err(e) => study_error_response(e),
    }
}
