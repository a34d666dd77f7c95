use std::sync::Arc;

use crate::application::ports::{
    CompletionClient, CompletionClientError, FlashcardGenerator, QuizGenerator, Summarizer,
};
use crate::domain::{Difficulty, Flashcard, QuizItem};

use super::completion_format;
use super::prompts;

/// Which generation strategy produced an artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactSource {
    Completion,
    Heuristic,
}

impl ArtifactSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactSource::Completion => "completion",
            ArtifactSource::Heuristic => "heuristic",
        }
    }
}

/// Upper bounds applied to requested artifact counts before any generation
/// runs. Requests are clamped, never rejected, for counts out of range.
#[derive(Debug, Clone, Copy)]
pub struct GenerationLimits {
    pub max_summary_sentences: usize,
    pub max_flashcards: usize,
    pub max_quiz_questions: usize,
}

#[derive(Debug, Clone)]
pub struct SummaryOutcome {
    pub summary: String,
    pub source: ArtifactSource,
}

#[derive(Debug, Clone)]
pub struct FlashcardsOutcome {
    pub cards: Vec<Flashcard>,
    pub source: ArtifactSource,
}

#[derive(Debug, Clone)]
pub struct QuizOutcome {
    pub items: Vec<QuizItem>,
    pub source: ArtifactSource,
}

/// Routes each generation request to the completion endpoint when a
/// credential was configured at construction, and to the heuristic
/// generators otherwise. The decision is per request but the configuration
/// is fixed at startup; no ambient global is consulted.
pub struct StudyService<C>
where
    C: CompletionClient,
{
    completion_client: Option<Arc<C>>,
    summarizer: Arc<dyn Summarizer>,
    flashcard_generator: Arc<dyn FlashcardGenerator>,
    quiz_generator: Arc<dyn QuizGenerator>,
    limits: GenerationLimits,
}

impl<C> StudyService<C>
where
    C: CompletionClient,
{
    pub fn new(
        completion_client: Option<Arc<C>>,
        summarizer: Arc<dyn Summarizer>,
        flashcard_generator: Arc<dyn FlashcardGenerator>,
        quiz_generator: Arc<dyn QuizGenerator>,
        limits: GenerationLimits,
    ) -> Self {
        Self {
            completion_client,
            summarizer,
            flashcard_generator,
            quiz_generator,
            limits,
        }
    }

    pub async fn summarize(
        &self,
        text: &str,
        sentences: usize,
    ) -> Result<SummaryOutcome, StudyServiceError> {
        let text = require_text(text)?;
        let sentences = clamp_count(sentences, self.limits.max_summary_sentences);

        if let Some(client) = &self.completion_client {
            let summary = client
                .complete(prompts::SYSTEM_PROMPT, &prompts::summary_prompt(text, sentences))
                .await?;
            return Ok(SummaryOutcome {
                summary: summary.trim().to_string(),
                source: ArtifactSource::Completion,
            });
        }

        Ok(SummaryOutcome {
            summary: self.summarizer.summarize(text, sentences),
            source: ArtifactSource::Heuristic,
        })
    }

    pub async fn flashcards(
        &self,
        text: &str,
        count: usize,
    ) -> Result<FlashcardsOutcome, StudyServiceError> {
        let text = require_text(text)?;
        let count = clamp_count(count, self.limits.max_flashcards);

        if let Some(client) = &self.completion_client {
            let raw = client
                .complete(prompts::SYSTEM_PROMPT, &prompts::flashcards_prompt(text, count))
                .await?;
            let cards = match completion_format::parse_flashcards(&raw) {
                Some(cards) => cards.into_iter().take(count).collect(),
                None => {
                    tracing::warn!("Completion returned malformed flashcard payload");
                    Vec::new()
                }
            };
            return Ok(FlashcardsOutcome {
                cards,
                source: ArtifactSource::Completion,
            });
        }

        Ok(FlashcardsOutcome {
            cards: self.flashcard_generator.generate(text, count),
            source: ArtifactSource::Heuristic,
        })
    }

    pub async fn quiz(
        &self,
        text: &str,
        count: usize,
        difficulty: Difficulty,
    ) -> Result<QuizOutcome, StudyServiceError> {
        let text = require_text(text)?;
        let count = clamp_count(count, self.limits.max_quiz_questions);

        if let Some(client) = &self.completion_client {
            let raw = client
                .complete(
                    prompts::SYSTEM_PROMPT,
                    &prompts::quiz_prompt(text, count, difficulty),
                )
                .await?;
            let items = match completion_format::parse_quiz_items(&raw) {
                Some(items) => items.into_iter().take(count).collect(),
                None => {
                    tracing::warn!("Completion returned malformed quiz payload");
                    Vec::new()
                }
            };
            return Ok(QuizOutcome {
                items,
                source: ArtifactSource::Completion,
            });
        }

        Ok(QuizOutcome {
            items: self.quiz_generator.generate(text, count),
            source: ArtifactSource::Heuristic,
        })
    }
}

fn require_text(text: &str) -> Result<&str, StudyServiceError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(StudyServiceError::EmptyText);
    }
    Ok(trimmed)
}

fn clamp_count(requested: usize, max: usize) -> usize {
    requested.clamp(1, max)
}

#[derive(Debug, thiserror::Error)]
pub enum StudyServiceError {
    #[error("text must not be empty")]
    EmptyText,
    #[error("completion: {0}")]
    Completion(#[from] CompletionClientError),
}
