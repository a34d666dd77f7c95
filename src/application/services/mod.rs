pub mod completion_format;
mod extraction_service;
mod prompts;
mod study_service;

pub use extraction_service::{ExtractedDocument, ExtractionError, ExtractionService};
pub use study_service::{
    ArtifactSource, FlashcardsOutcome, GenerationLimits, QuizOutcome, StudyService,
    StudyServiceError, SummaryOutcome,
};
