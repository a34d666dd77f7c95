/// Collapses every whitespace run, including newlines, into a single space.
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Splits text into sentences bounded by terminal punctuation. Whitespace is
/// collapsed first so sentences never span hard line breaks. A trailing
/// fragment without terminal punctuation counts as a sentence.
pub fn split_sentences(text: &str) -> Vec<String> {
    let collapsed = collapse_whitespace(text);

    let mut sentences = Vec::new();
    let mut current = String::new();
    for ch in collapsed.chars() {
        current.push(ch);
        if matches!(ch, '.' | '!' | '?') {
            flush_sentence(&mut current, &mut sentences);
        }
    }
    flush_sentence(&mut current, &mut sentences);

    sentences
}

fn flush_sentence(current: &mut String, sentences: &mut Vec<String>) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
    current.clear();
}
