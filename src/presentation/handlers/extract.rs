use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::application::ports::{CompletionClient, FileLoader, FileLoaderError};
use crate::application::services::ExtractionError;
use crate::domain::ContentType;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ExtractResponse {
    pub document_id: String,
    pub filename: String,
    pub characters: usize,
    pub text: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn extract_handler<F, C>(
    State(state): State<AppState<F, C>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    F: FileLoader + 'static,
    C: CompletionClient + 'static,
{
    let field = match multipart.next_field().await {
        Ok(Some(field)) => field,
        Ok(None) => {
            tracing::warn!("Extract request with no file");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "No file uploaded".to_string(),
                }),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to read multipart: {}", e),
                }),
            )
                .into_response();
        }
    };

    let filename = field.file_name().unwrap_or("unknown").to_string();
    let mime = field.content_type().unwrap_or("application/octet-stream");

    tracing::debug!(filename = %filename, content_type = %mime, "Processing file upload");

    // The MIME type decides; the filename extension is the fallback for
    // clients that upload everything as octet-stream.
    let content_type = match ContentType::from_mime(mime)
        .or_else(|| ContentType::from_filename(&filename))
    {
        Some(ct) => ct,
        None => {
            tracing::warn!(content_type = %mime, "Unsupported content type");
            return (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                Json(ErrorResponse {
                    error: format!("Unsupported content type: {}", mime),
                }),
            )
                .into_response();
        }
    };

    let data = match field.bytes().await {
        Ok(data) => data,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read file bytes");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to read file: {}", e),
                }),
            )
                .into_response();
        }
    };

    match state
        .extraction_service
        .extract(&data, filename, content_type)
        .await
    {
        Ok(extracted) => {
            tracing::info!(
                document_id = %extracted.document.id.as_uuid(),
                characters = extracted.text.chars().count(),
                "Document extraction complete"
            );
            (
                StatusCode::OK,
                Json(ExtractResponse {
                    document_id: extracted.document.id.as_uuid().to_string(),
                    filename: extracted.document.filename,
                    characters: extracted.text.chars().count(),
                    text: extracted.text,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Document extraction failed");
            let status = match &e {
                ExtractionError::FileTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
                ExtractionError::FileLoading(FileLoaderError::UnsupportedContentType(_)) => {
                    StatusCode::UNSUPPORTED_MEDIA_TYPE
                }
                ExtractionError::FileLoading(_) | ExtractionError::EmptyDocument(_) => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
            };
            (
                status,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
