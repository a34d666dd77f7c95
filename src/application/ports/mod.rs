mod completion_client;
mod file_loader;
mod flashcard_generator;
mod quiz_generator;
mod summarizer;

pub use completion_client::{CompletionClient, CompletionClientError};
pub use file_loader::{FileLoader, FileLoaderError};
pub use flashcard_generator::FlashcardGenerator;
pub use quiz_generator::QuizGenerator;
pub use summarizer::Summarizer;
