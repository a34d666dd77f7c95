use std::sync::Arc;

use crate::application::ports::{CompletionClient, FileLoader};
use crate::application::services::{ExtractionService, StudyService};
use crate::presentation::config::Settings;

pub struct AppState<F, C>
where
    F: FileLoader,
    C: CompletionClient,
{
    pub extraction_service: Arc<ExtractionService<F>>,
    pub study_service: Arc<StudyService<C>>,
    pub settings: Settings,
}

impl<F, C> Clone for AppState<F, C>
where
    F: FileLoader,
    C: CompletionClient,
{
    fn clone(&self) -> Self {
        Self {
            extraction_service: Arc::clone(&self.extraction_service),
            study_service: Arc::clone(&self.study_service),
            settings: self.settings.clone(),
        }
    }
}
