use serde::Deserialize;

use crate::domain::{Flashcard, QuizItem};

#[derive(Deserialize)]
struct FlashcardPayload {
    question: String,
    answer: String,
}

#[derive(Deserialize)]
struct QuizItemPayload {
    question: String,
    options: Vec<String>,
    answer: String,
}

/// Parses a completion response into flashcards. Returns None when the
/// payload is not the requested JSON shape; the caller substitutes an empty
/// collection rather than surfacing a parse error.
pub fn parse_flashcards(raw: &str) -> Option<Vec<Flashcard>> {
    let payload: Vec<FlashcardPayload> = serde_json::from_str(strip_code_fences(raw)).ok()?;

    Some(
        payload
            .into_iter()
            .filter(|card| !card.question.trim().is_empty() && !card.answer.trim().is_empty())
            .map(|card| {
                Flashcard::new(
                    card.question.trim().to_string(),
                    card.answer.trim().to_string(),
                )
            })
            .collect(),
    )
}

/// Parses a completion response into quiz items, coercing each into shape:
/// options deduplicated, the answer guaranteed present exactly once, items
/// with an empty question or answer dropped.
pub fn parse_quiz_items(raw: &str) -> Option<Vec<QuizItem>> {
    let payload: Vec<QuizItemPayload> = serde_json::from_str(strip_code_fences(raw)).ok()?;
    Some(payload.into_iter().filter_map(coerce_quiz_item).collect())
}

fn coerce_quiz_item(item: QuizItemPayload) -> Option<QuizItem> {
    let question = item.question.trim().to_string();
    let mut answer = item.answer.trim().to_string();
    if question.is_empty() || answer.is_empty() {
        return None;
    }

    let mut options: Vec<String> = Vec::new();
    for option in item.options {
        let option = option.trim().to_string();
        if option.is_empty() || options.iter().any(|o| o.eq_ignore_ascii_case(&option)) {
            continue;
        }
        options.push(option);
    }

    match options.iter().find(|o| o.eq_ignore_ascii_case(&answer)) {
        Some(existing) => answer = existing.clone(),
        None => options.push(answer.clone()),
    }

    Some(QuizItem::new(question, options, answer))
}

// Completion models wrap JSON in markdown fences often enough that the
// parser strips them before deserializing.
fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
