use crate::application::ports::FlashcardGenerator;
use crate::domain::Flashcard;

use super::segmentation::collapse_whitespace;

const MIN_SEGMENT_CHARS: usize = 20;
const MAX_ANSWER_CHARS: usize = 200;
const BACKFILL_WINDOW_CHARS: usize = 180;

/// Converts line-delimited statements into question/answer pairs. Segments
/// with explicit structure (a colon, or an " is " copula) become definition
/// cards; everything else falls back to a generic prompt over the segment.
pub struct FlashcardExtractor {
    max_answer_chars: usize,
}

impl FlashcardExtractor {
    pub fn new() -> Self {
        Self {
            max_answer_chars: MAX_ANSWER_CHARS,
        }
    }

    fn card_from_segment(&self, segment: &str) -> Flashcard {
        if let Some((subject, rest)) = segment.split_once(':') {
            let subject = subject.trim();
            let rest = rest.trim();
            if !subject.is_empty() && !rest.is_empty() {
                return Flashcard::new(
                    format!("What is {}?", subject),
                    truncate_chars(rest, self.max_answer_chars),
                );
            }
        }

        if let Some((subject, definition)) = segment.split_once(" is ") {
            let subject = subject.trim();
            let definition = definition.trim();
            if !subject.is_empty() && !definition.is_empty() {
                return Flashcard::new(
                    format!("What is {}?", subject),
                    truncate_chars(definition, self.max_answer_chars),
                );
            }
        }

        Flashcard::new(
            "Explain this concept in your own words.".to_string(),
            truncate_chars(segment, self.max_answer_chars),
        )
    }

    /// Pads the deck with windows sampled at a fixed stride across the
    /// collapsed text, so short structured sections still yield a full deck
    /// and repeated requests return the same cards.
    fn backfill(&self, text: &str, count: usize, cards: &mut Vec<Flashcard>) {
        let collapsed = collapse_whitespace(text);
        let chars: Vec<char> = collapsed.chars().collect();
        if chars.len() <= MIN_SEGMENT_CHARS {
            return;
        }

        let needed = count - cards.len();
        let span = chars.len().saturating_sub(BACKFILL_WINDOW_CHARS);
        let stride = (span / needed).max(1);

        for window_index in 0..needed {
            let offset = window_index * stride;
            if offset > span {
                break;
            }
            let end = (offset + BACKFILL_WINDOW_CHARS).min(chars.len());
            let window: String = chars[offset..end].iter().collect();
            let answer = truncate_chars(window.trim(), self.max_answer_chars);
            if answer.is_empty() {
                continue;
            }
            cards.push(Flashcard::new(
                format!("What is the main idea of passage {}?", window_index + 1),
                answer,
            ));
            if cards.len() == count {
                return;
            }
        }
    }
}

impl Default for FlashcardExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FlashcardGenerator for FlashcardExtractor {
    fn generate(&self, text: &str, count: usize) -> Vec<Flashcard> {
        let mut cards = Vec::new();
        if count == 0 {
            return cards;
        }

        for segment in text.lines().map(str::trim) {
            if segment.chars().count() <= MIN_SEGMENT_CHARS {
                continue;
            }
            cards.push(self.card_from_segment(segment));
            if cards.len() == count {
                return cards;
            }
        }

        self.backfill(text, count, &mut cards);
        cards
    }
}

/// Truncates on a character boundary, marking the cut with an ellipsis.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let truncated: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{}…", truncated.trim_end())
    } else {
        truncated
    }
}
