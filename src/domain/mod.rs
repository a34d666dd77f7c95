mod document;
mod flashcard;
mod quiz;

pub use document::{ContentType, Document, DocumentId};
pub use flashcard::Flashcard;
pub use quiz::{Difficulty, QuizItem};
