use std::io::Write;
use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

use super::text_sanitizer::sanitize_extracted_text;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// PDF extraction via pdf_oxide. Parsing is CPU-bound and the library only
/// reads from paths, so the upload is spooled to a temp file and handed to a
/// blocking task under a timeout.
#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    fn sanitized_pages(path: &std::path::Path) -> Result<Vec<String>, FileLoaderError> {
        let mut doc = PdfDocument::open(path)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        let page_count = doc.page_count().map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to read page count: {e}"))
        })?;

        // Pages that extract to nothing (scanned images, decorative pages)
        // are dropped here rather than surfacing as blank paragraphs.
        Ok((0..page_count)
            .filter_map(|page_index| {
                let text = doc.extract_text(page_index).unwrap_or_default();
                let sanitized = sanitize_extracted_text(&text);
                (!sanitized.is_empty()).then_some(sanitized)
            })
            .collect())
    }
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(
        skip(self, data),
        fields(document_id = %document.id.as_uuid(), filename = %document.filename)
    )]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.content_type != ContentType::Pdf {
            return Err(FileLoaderError::UnsupportedContentType(
                document.content_type.as_mime().to_string(),
            ));
        }

        let mut temp_file = tempfile::NamedTempFile::new().map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to create temp file: {e}"))
        })?;
        temp_file.write_all(data).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to write temp file: {e}"))
        })?;

        let temp_path = temp_file.path().to_path_buf();
        let extraction = tokio::task::spawn_blocking(move || Self::sanitized_pages(&temp_path));

        let pages = match tokio::time::timeout(EXTRACTION_TIMEOUT, extraction).await {
            Err(_) => {
                return Err(FileLoaderError::ExtractionFailed(
                    "PDF extraction timed out".to_string(),
                ))
            }
            Ok(joined) => joined
                .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??,
        };

        tracing::info!(page_count = pages.len(), "PDF text extraction complete");

        if pages.is_empty() {
            return Err(FileLoaderError::NoTextFound(document.filename.clone()));
        }

        Ok(pages.join("\n\n"))
    }
}
