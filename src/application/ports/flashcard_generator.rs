use crate::domain::Flashcard;

/// Rule-based flashcard extraction. Returns at most `count` cards; may
/// return fewer when the text is too short to yield any segment.
pub trait FlashcardGenerator: Send + Sync {
    fn generate(&self, text: &str, count: usize) -> Vec<Flashcard>;
}
