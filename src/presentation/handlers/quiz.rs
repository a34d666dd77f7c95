use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::ports::{CompletionClient, FileLoader};
use crate::application::services::ArtifactSource;
use crate::domain::Difficulty;
use crate::infrastructure::observability::sanitize_for_log;
use crate::presentation::state::AppState;

use super::summarize::study_error_response;
use super::HEURISTIC_NOTE;

const DEFAULT_COUNT: usize = 5;

#[derive(Deserialize)]
pub struct QuizRequest {
    pub text: String,
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default)]
    pub difficulty: Difficulty,
}

fn default_count() -> usize {
    DEFAULT_COUNT
}

#[derive(Serialize)]
pub struct QuizResponse {
    pub quiz: Vec<QuizItemDto>,
    pub generator: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
}

#[derive(Serialize)]
pub struct QuizItemDto {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

#[tracing::instrument(skip(state, request), fields(difficulty = %request.difficulty))]
pub async fn quiz_handler<F, C>(
    State(state): State<AppState<F, C>>,
    Json(request): Json<QuizRequest>,
) -> impl IntoResponse
where
    F: FileLoader + 'static,
    C: CompletionClient + 'static,
{
    tracing::debug!(text = %sanitize_for_log(&request.text), "Processing quiz request");

    match state
        .study_service
        .quiz(&request.text, request.count, request.difficulty)
        .await
    {
        Ok(outcome) => {
            tracing::info!(
                generator = outcome.source.as_str(),
                question_count = outcome.items.len(),
                "Quiz generated"
            );
            let quiz = outcome
                .items
                .into_iter()
                .map(|item| QuizItemDto {
                    question: item.question,
                    options: item.options,
                    answer: item.answer,
                })
                .collect();
            (
                StatusCode::OK,
                Json(QuizResponse {
                    quiz,
                    generator: outcome.source.as_str(),
                    note: (outcome.source == ArtifactSource::Heuristic).then_some(HEURISTIC_NOTE),
                }),
            )
                .into_response()
        }
        Err(e) => study_error_response(e),
    }
}
