use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::ports::{CompletionClient, FileLoader};
use crate::application::services::{ArtifactSource, StudyServiceError};
use crate::infrastructure::observability::sanitize_for_log;
use crate::presentation::state::AppState;

use super::HEURISTIC_NOTE;

const DEFAULT_SENTENCES: usize = 3;

#[derive(Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
    #[serde(default = "default_sentences")]
    pub sentences: usize,
}

fn default_sentences() -> usize {
    DEFAULT_SENTENCES
}

#[derive(Serialize)]
pub struct SummarizeResponse {
    pub summary: String,
    pub generator: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn summarize_handler<F, C>(
    State(state): State<AppState<F, C>>,
    Json(request): Json<SummarizeRequest>,
) -> impl IntoResponse
where
    F: FileLoader + 'static,
    C: CompletionClient + 'static,
{
    tracing::debug!(text = %sanitize_for_log(&request.text), "Processing summarize request");

    match state
        .study_service
        .summarize(&request.text, request.sentences)
        .await
    {
        Ok(outcome) => {
            tracing::info!(generator = outcome.source.as_str(), "Summary generated");
            (
                StatusCode::OK,
                Json(SummarizeResponse {
                    summary: outcome.summary,
                    generator: outcome.source.as_str(),
                    note: (outcome.source == ArtifactSource::Heuristic).then_some(HEURISTIC_NOTE),
                }),
            )
                .into_response()
        }
        Err(e) => study_error_response(e),
    }
}

pub(super) fn study_error_response(error: StudyServiceError) -> axum::response::Response {
    let status = match &error {
        StudyServiceError::EmptyText => StatusCode::BAD_REQUEST,
        StudyServiceError::Completion(_) => StatusCode::BAD_GATEWAY,
    };
    tracing::warn!(error = %error, "Generation request failed");
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
        .into_response()
}
