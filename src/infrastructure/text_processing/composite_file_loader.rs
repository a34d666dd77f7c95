use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

use super::docx_adapter::DocxAdapter;
use super::pdf_adapter::PdfAdapter;
use super::plain_text_adapter::PlainTextAdapter;

/// Routes extraction to the adapter registered for the document's content
/// type; unrecognized types surface as unsupported.
#[derive(Default)]
pub struct CompositeFileLoader {
    adapters: HashMap<ContentType, Arc<dyn FileLoader>>,
}

impl CompositeFileLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, content_type: ContentType, adapter: Arc<dyn FileLoader>) -> Self {
        self.adapters.insert(content_type, adapter);
        self
    }

    /// The full production adapter set: PDF, DOCX, and plain text.
    pub fn with_standard_adapters() -> Self {
        Self::new()
            .register(ContentType::Pdf, Arc::new(PdfAdapter::new()))
            .register(ContentType::Docx, Arc::new(DocxAdapter::new()))
            .register(ContentType::Text, Arc::new(PlainTextAdapter))
    }
}

#[async_trait]
impl FileLoader for CompositeFileLoader {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        let adapter = self.adapters.get(&document.content_type).ok_or_else(|| {
            FileLoaderError::UnsupportedContentType(document.content_type.as_mime().to_string())
        })?;

        adapter.extract_text(data, document).await
    }
}
