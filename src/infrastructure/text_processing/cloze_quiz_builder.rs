use rand::seq::SliceRandom;

use crate::application::ports::QuizGenerator;
use crate::domain::QuizItem;

use super::segmentation::split_sentences;

pub const BLANK: &str = "_____";

const MIN_SENTENCE_WORDS: usize = 6;
const OPTION_COUNT: usize = 4;

// Generic distractor pool. A known quality limitation of the heuristic path:
// distractors are not drawn from the source text.
const DISTRACTORS: &[&str] = &[
    "energy",
    "process",
    "structure",
    "system",
    "function",
    "reaction",
    "theory",
    "element",
];

/// Builds fill-in-the-blank items by masking one token per eligible
/// sentence. Option order is shuffled; everything else is deterministic.
pub struct ClozeQuizBuilder {
    min_sentence_words: usize,
    option_count: usize,
}

impl ClozeQuizBuilder {
    pub fn new() -> Self {
        Self {
            min_sentence_words: MIN_SENTENCE_WORDS,
            option_count: OPTION_COUNT,
        }
    }

    fn item_from_sentence(&self, sentence: &str) -> Option<QuizItem> {
        let words: Vec<&str> = sentence.split_whitespace().collect();
        if words.len() < self.min_sentence_words {
            return None;
        }

        let (mask_index, answer) = pick_mask_target(&words)?;

        let question = words
            .iter()
            .enumerate()
            .map(|(index, word)| if index == mask_index { BLANK } else { *word })
            .collect::<Vec<_>>()
            .join(" ");

        let mut options = vec![answer.clone()];
        for distractor in DISTRACTORS {
            if options.len() == self.option_count {
                break;
            }
            if !options.iter().any(|o| o.eq_ignore_ascii_case(distractor)) {
                options.push((*distractor).to_string());
            }
        }
        options.shuffle(&mut rand::thread_rng());

        Some(QuizItem::new(question, options, answer))
    }
}

impl Default for ClozeQuizBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizGenerator for ClozeQuizBuilder {
    fn generate(&self, text: &str, count: usize) -> Vec<QuizItem> {
        let mut items = Vec::new();
        if count == 0 {
            return items;
        }

        for sentence in split_sentences(text) {
            if let Some(item) = self.item_from_sentence(&sentence) {
                items.push(item);
                if items.len() == count {
                    break;
                }
            }
        }

        items
    }
}

/// Picks the token to mask from the middle third of the sentence: the
/// longest one that survives stripping, since longer tokens are likelier to
/// be content words. Returns None when no candidate survives.
fn pick_mask_target(words: &[&str]) -> Option<(usize, String)> {
    let start = words.len() / 3;
    let end = (words.len() * 2 / 3).max(start + 1);

    let mut best: Option<(usize, String)> = None;
    for (index, word) in words.iter().enumerate().take(end).skip(start) {
        let candidate = strip_token(word);
        if candidate.is_empty() {
            continue;
        }
        let longer = best
            .as_ref()
            .map(|(_, current)| candidate.chars().count() > current.chars().count())
            .unwrap_or(true);
        if longer {
            best = Some((index, candidate));
        }
    }
    best
}

// Keeps alphanumerics and hyphens; drops surrounding punctuation and
// anything else.
fn strip_token(token: &str) -> String {
    token
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '-')
        .collect()
}
