use crate::domain::Difficulty;

pub const SYSTEM_PROMPT: &str =
    "You are a study assistant. Work only from the provided source text; do not invent facts.";

pub fn summary_prompt(text: &str, sentences: usize) -> String {
    format!(
        "Summarize the following text in at most {sentences} sentences. \
         Return only the summary, no preamble.\n\n{text}"
    )
}

pub fn flashcards_prompt(text: &str, count: usize) -> String {
    format!(
        "Create {count} study flashcards from the following text. \
         Respond with only a JSON array of objects, each with \"question\" \
         and \"answer\" string fields.\n\n{text}"
    )
}

pub fn quiz_prompt(text: &str, count: usize, difficulty: Difficulty) -> String {
    format!(
        "Create a {difficulty}-difficulty multiple-choice quiz with {count} \
         questions from the following text. Respond with only a JSON array of \
         objects, each with \"question\", \"options\" (exactly 4 strings), and \
         \"answer\" fields. The answer must be one of the options.\n\n{text}"
    )
}
