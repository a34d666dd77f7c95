use std::cmp::Ordering;

use crate::application::ports::Summarizer;

use super::segmentation::split_sentences;

// Terms whose presence marks a sentence as carrying key content. Matched
// case-insensitively as substrings.
const KEYWORDS: &[&str] = &[
    "important",
    "significant",
    "key",
    "main",
    "essential",
    "critical",
    "primary",
    "fundamental",
    "major",
    "because",
    "therefore",
    "thus",
    "conclusion",
    "result",
    "means",
    "defined",
    "principle",
];

const KEYWORD_BONUS: f64 = 0.5;
const LENGTH_NORMALIZER: f64 = 100.0;
const MIN_SENTENCE_CHARS: usize = 20;

/// Scores and ranks sentences to produce an extractive summary. Scoring is a
/// pure function of sentence text and position, so the same input always
/// yields the same summary.
pub struct ExtractiveSummarizer {
    min_sentence_chars: usize,
}

impl ExtractiveSummarizer {
    pub fn new() -> Self {
        Self {
            min_sentence_chars: MIN_SENTENCE_CHARS,
        }
    }

    fn score(sentence: &str, index: usize, total: usize) -> f64 {
        let length = (sentence.chars().count() as f64 / LENGTH_NORMALIZER).min(1.0);

        let lowered = sentence.to_lowercase();
        let keyword_hits: usize = KEYWORDS
            .iter()
            .map(|keyword| lowered.matches(keyword).count())
            .sum();

        // Earlier sentences carry more weight, decaying linearly to the end.
        let position = 1.0 - index as f64 / total as f64;

        length + KEYWORD_BONUS * keyword_hits as f64 + position
    }
}

impl Default for ExtractiveSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Summarizer for ExtractiveSummarizer {
    fn summarize(&self, text: &str, max_sentences: usize) -> String {
        if max_sentences == 0 {
            return String::new();
        }

        let eligible: Vec<String> = split_sentences(text)
            .into_iter()
            .filter(|s| s.chars().count() > self.min_sentence_chars)
            .collect();

        // Nothing to rank when the whole eligible set already fits.
        if eligible.len() <= max_sentences {
            return eligible.join(" ");
        }

        let total = eligible.len();
        let mut scored: Vec<(f64, String)> = eligible
            .into_iter()
            .enumerate()
            .map(|(index, sentence)| (Self::score(&sentence, index, total), sentence))
            .collect();

        // Stable sort: exact ties keep their source order.
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

        scored
            .into_iter()
            .take(max_sentences)
            .map(|(_, sentence)| sentence)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
