mod cloze_quiz_builder;
mod composite_file_loader;
mod docx_adapter;
mod extractive_summarizer;
mod flashcard_extractor;
mod pdf_adapter;
mod plain_text_adapter;
pub mod segmentation;
mod text_sanitizer;

pub use cloze_quiz_builder::{ClozeQuizBuilder, BLANK};
pub use composite_file_loader::CompositeFileLoader;
pub use docx_adapter::DocxAdapter;
pub use extractive_summarizer::ExtractiveSummarizer;
pub use flashcard_extractor::FlashcardExtractor;
pub use pdf_adapter::PdfAdapter;
pub use plain_text_adapter::PlainTextAdapter;
pub use text_sanitizer::sanitize_extracted_text;
