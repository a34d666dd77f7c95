use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use kuching::application::services::{ExtractionService, GenerationLimits, StudyService};
use kuching::infrastructure::llm::OpenAiClient;
use kuching::infrastructure::observability::{init_tracing, TracingConfig};
use kuching::infrastructure::text_processing::{
    ClozeQuizBuilder, CompositeFileLoader, ExtractiveSummarizer, FlashcardExtractor,
};
use kuching::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(TracingConfig::default(), settings.server.port);

    let file_loader = Arc::new(CompositeFileLoader::with_standard_adapters());

    let completion_client = settings.completion.api_key.clone().map(|api_key| {
        Arc::new(OpenAiClient::new(
            api_key,
            settings.completion.model.clone(),
            settings.completion.max_tokens,
            settings.completion.temperature,
        ))
    });
    match &completion_client {
        Some(_) => tracing::info!(
            model = %settings.completion.model,
            "Completion credential configured, remote generation enabled"
        ),
        None => tracing::info!("No completion credential, using heuristic generation"),
    }

    let extraction_service = Arc::new(ExtractionService::new(
        Arc::clone(&file_loader),
        settings.extraction.max_file_size_mb,
    ));

    let study_service = Arc::new(StudyService::new(
        completion_client,
        Arc::new(ExtractiveSummarizer::new()),
        Arc::new(FlashcardExtractor::new()),
        Arc::new(ClozeQuizBuilder::new()),
        GenerationLimits {
            max_summary_sentences: settings.generation.max_summary_sentences,
            max_flashcards: settings.generation.max_flashcards,
            max_quiz_questions: settings.generation.max_quiz_questions,
        },
    ));

    let state = AppState {
        extraction_service,
        study_service,
        settings: settings.clone(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
