use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use super::segmentation::collapse_whitespace;

// Rejoins words hyphenated across a line break, a common artifact of PDF
// extraction: "photo-\nsynthesis" -> "photosynthesis".
static LINE_BREAK_HYPHEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<head>\w)-[ \t]*\r?\n[ \t]*(?P<tail>\w)").unwrap());

/// Normalizes text coming out of a document extractor: NFKC normalization,
/// de-hyphenation across line breaks, whitespace collapsed within lines, and
/// runs of blank lines reduced to a single paragraph break.
pub fn sanitize_extracted_text(raw: &str) -> String {
    let normalized: String = raw.nfkc().collect();
    let rejoined = LINE_BREAK_HYPHEN.replace_all(&normalized, "$head$tail");

    let mut out = String::with_capacity(rejoined.len());
    let mut pending_break: Option<&str> = None;

    for line in rejoined.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !out.is_empty() {
                pending_break = Some("\n\n");
            }
            continue;
        }
        if let Some(separator) = pending_break.take() {
            out.push_str(separator);
        }
        out.push_str(&collapse_whitespace(line));
        pending_break = Some("\n");
    }

    out
}
