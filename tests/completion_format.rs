use kuching::application::services::completion_format::{parse_flashcards, parse_quiz_items};

#[test]
fn given_fenced_payload_when_parsing_flashcards_then_fences_are_stripped() {
    let raw = "```json\n[{\"question\": \"Q1?\", \"answer\": \"A1\"}]\n```";

    let cards = parse_flashcards(raw).unwrap();

    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].question, "Q1?");
    assert_eq!(cards[0].answer, "A1");
}

#[test]
fn given_prose_response_when_parsing_flashcards_then_returns_none() {
    assert!(parse_flashcards("Here are your flashcards!").is_none());
}

#[test]
fn given_blank_fields_when_parsing_flashcards_then_cards_are_dropped() {
    let raw = r#"[{"question": " ", "answer": "A"}, {"question": "Q?", "answer": "A"}]"#;

    let cards = parse_flashcards(raw).unwrap();

    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].question, "Q?");
}

#[test]
fn given_answer_missing_from_options_when_parsing_quiz_then_answer_is_inserted() {
    let raw =
        r#"[{"question": "The sky is _____.", "options": ["red", "green"], "answer": "blue"}]"#;

    let items = parse_quiz_items(raw).unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].options.iter().filter(|o| *o == "blue").count(), 1);
}

#[test]
fn given_duplicate_options_when_parsing_quiz_then_options_are_deduplicated() {
    let raw = r#"[{"question": "Water is _____.", "options": ["wet", "Wet", "dry", "wet"], "answer": "wet"}]"#;

    let items = parse_quiz_items(raw).unwrap();

    assert_eq!(items[0].options.len(), 2);
    assert_eq!(
        items[0]
            .options
            .iter()
            .filter(|o| o.eq_ignore_ascii_case("wet"))
            .count(),
        1
    );
}

#[test]
fn given_item_with_empty_answer_when_parsing_quiz_then_item_is_dropped() {
    let raw = r#"[{"question": "Q?", "options": ["a", "b"], "answer": "  "}]"#;

    let items = parse_quiz_items(raw).unwrap();

    assert!(items.is_empty());
}

#[test]
fn given_truncated_json_when_parsing_quiz_then_returns_none() {
    let raw = r#"[{"question": "Q?", "options": ["a", "b"#;

    assert!(parse_quiz_items(raw).is_none());
}
