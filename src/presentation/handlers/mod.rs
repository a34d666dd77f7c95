mod extract;
mod flashcards;
mod health;
mod quiz;
mod summarize;

/// Attached to responses produced without a completion credential.
pub const HEURISTIC_NOTE: &str =
    "Generated with built-in heuristics; configure OPENAI_API_KEY for AI-generated output.";

pub use extract::extract_handler;
pub use flashcards::flashcards_handler;
pub use health::health_handler;
pub use quiz::quiz_handler;
pub use summarize::summarize_handler;
