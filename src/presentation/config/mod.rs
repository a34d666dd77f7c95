mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    CompletionSettings, ExtractionSettings, GenerationSettings, ServerSettings, Settings,
};
