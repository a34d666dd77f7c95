use std::sync::Arc;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

pub struct ExtractionService<F>
where
    F: FileLoader,
{
    file_loader: Arc<F>,
    max_file_size_mb: usize,
}

#[derive(Debug, Clone)]
pub struct ExtractedDocument {
    pub document: Document,
    pub text: String,
}

impl<F> ExtractionService<F>
where
    F: FileLoader,
{
    pub fn new(file_loader: Arc<F>, max_file_size_mb: usize) -> Self {
        Self {
            file_loader,
            max_file_size_mb,
        }
    }

    pub async fn extract(
        &self,
        data: &[u8],
        filename: String,
        content_type: ContentType,
    ) -> Result<ExtractedDocument, ExtractionError> {
        if data.len() > self.max_file_size_mb * 1024 * 1024 {
            return Err(ExtractionError::FileTooLarge {
                limit_mb: self.max_file_size_mb,
            });
        }

        let document = Document::new(filename, content_type, data.len() as u64);

        let text = self
            .file_loader
            .extract_text(data, &document)
            .await
            .map_err(ExtractionError::FileLoading)?;

        if text.trim().is_empty() {
            return Err(ExtractionError::EmptyDocument(document.filename));
        }

        Ok(ExtractedDocument { document, text })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("file exceeds the {limit_mb} MB upload limit")]
    FileTooLarge { limit_mb: usize },
    #[error("file loading: {0}")]
    FileLoading(#[from] FileLoaderError),
    #[error("no usable text extracted from {0}")]
    EmptyDocument(String),
}
