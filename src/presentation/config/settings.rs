use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub completion: CompletionSettings,
    pub generation: GenerationSettings,
    pub extraction: ExtractionSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompletionSettings {
    /// Absent or blank means no remote provider: every request takes the
    /// heuristic path.
    pub api_key: Option<String>,
    pub model: String,
    pub max_tokens: usize,
    pub temperature: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationSettings {
    pub max_summary_sentences: usize,
    pub max_flashcards: usize,
    pub max_quiz_questions: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionSettings {
    pub max_file_size_mb: usize,
}

impl Settings {
    /// Reads configuration from environment variables, falling back to
    /// defaults for everything except the completion credential.
    pub fn from_env() -> Self {
        Self {
            server: ServerSettings {
                host: env_or("SERVER_HOST", "0.0.0.0".to_string()),
                port: env_or("SERVER_PORT", 3000),
            },
            completion: CompletionSettings {
                api_key: std::env::var("OPENAI_API_KEY")
                    .ok()
                    .filter(|key| !key.trim().is_empty()),
                model: env_or("COMPLETION_MODEL", "gpt-4o-mini".to_string()),
                max_tokens: env_or("COMPLETION_MAX_TOKENS", 1024),
                temperature: env_or("COMPLETION_TEMPERATURE", 0.2),
            },
            generation: GenerationSettings {
                max_summary_sentences: env_or("MAX_SUMMARY_SENTENCES", 10),
                max_flashcards: env_or("MAX_FLASHCARDS", 20),
                max_quiz_questions: env_or("MAX_QUIZ_QUESTIONS", 10),
            },
            extraction: ExtractionSettings {
                max_file_size_mb: env_or("MAX_FILE_SIZE_MB", 20),
            },
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
