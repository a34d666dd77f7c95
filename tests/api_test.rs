use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use kuching::application::ports::{
    CompletionClient, CompletionClientError, FileLoader, FileLoaderError,
};
use kuching::application::services::{ExtractionService, GenerationLimits, StudyService};
use kuching::domain::Document;
use kuching::infrastructure::text_processing::{
    ClozeQuizBuilder, ExtractiveSummarizer, FlashcardExtractor,
};
use kuching::presentation::config::{
    CompletionSettings, ExtractionSettings, GenerationSettings, ServerSettings, Settings,
};
use kuching::presentation::{create_router, AppState};

const TEST_MAX_SUMMARY_SENTENCES: usize = 10;
const TEST_MAX_FLASHCARDS: usize = 20;
const TEST_MAX_QUIZ_QUESTIONS: usize = 10;
const TEST_MAX_FILE_SIZE_MB: usize = 2;

const STUDY_TEXT: &str = "\
    Photosynthesis is the process by which plants convert light into energy. \
    Chlorophyll absorbs sunlight inside the leaf cells of green plants. \
    The most important products of the reaction are glucose and oxygen.";

struct MockFileLoader;

#[async_trait::async_trait]
impl FileLoader for MockFileLoader {
    async fn extract_text(&self, data: &[u8], _doc: &Document) -> Result<String, FileLoaderError> {
        String::from_utf8(data.to_vec())
            .map_err(|e| FileLoaderError::ExtractionFailed(e.to_string()))
    }
}

struct MockCompletionClient {
    response: String,
}

#[async_trait::async_trait]
impl CompletionClient for MockCompletionClient {
    async fn complete(&self, _system: &str, _prompt: &str) -> Result<String, CompletionClientError> {
        Ok(self.response.clone())
    }
}

struct FailingCompletionClient;

#[async_trait::async_trait]
impl CompletionClient for FailingCompletionClient {
    async fn complete(&self, _system: &str, _prompt: &str) -> Result<String, CompletionClientError> {
        Err(CompletionClientError::ApiRequestFailed(
            "connection refused".to_string(),
        ))
    }
}

fn test_settings() -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        completion: CompletionSettings {
            api_key: None,
            model: "test-model".to_string(),
            max_tokens: 256,
            temperature: 0.0,
        },
        generation: GenerationSettings {
            max_summary_sentences: TEST_MAX_SUMMARY_SENTENCES,
            max_flashcards: TEST_MAX_FLASHCARDS,
            max_quiz_questions: TEST_MAX_QUIZ_QUESTIONS,
        },
        extraction: ExtractionSettings {
            max_file_size_mb: TEST_MAX_FILE_SIZE_MB,
        },
    }
}

fn create_app<C>(completion_client: Option<Arc<C>>) -> axum::Router
where
    C: CompletionClient + 'static,
{
    let extraction_service = Arc::new(ExtractionService::new(
        Arc::new(MockFileLoader),
        TEST_MAX_FILE_SIZE_MB,
    ));

    let study_service = Arc::new(StudyService::new(
        completion_client,
        Arc::new(ExtractiveSummarizer::new()),
        Arc::new(FlashcardExtractor::new()),
        Arc::new(ClozeQuizBuilder::new()),
        GenerationLimits {
            max_summary_sentences: TEST_MAX_SUMMARY_SENTENCES,
            max_flashcards: TEST_MAX_FLASHCARDS,
            max_quiz_questions: TEST_MAX_QUIZ_QUESTIONS,
        },
    ));

    let state = AppState {
        extraction_service,
        study_service,
        settings: test_settings(),
    };

    create_router(state)
}

fn heuristic_app() -> axum::Router {
    create_app(Option::<Arc<FailingCompletionClient>>::None)
}

fn completion_app(response: &str) -> axum::Router {
    create_app(Some(Arc::new(MockCompletionClient {
        response: response.to_string(),
    })))
}

fn json_request(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

fn multipart_request(filename: &str, content_type: &str, content: &str) -> Request<Body> {
    let boundary = "test-boundary";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n\
         Content-Type: {content_type}\r\n\r\n\
         {content}\r\n\
         --{boundary}--\r\n"
    );
    Request::builder()
        .method("POST")
        .uri("/api/v1/extract")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn given_running_server_when_health_check_then_returns_ok() {
    let app = heuristic_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn given_request_without_id_when_any_endpoint_then_response_contains_request_id() {
    let app = heuristic_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn given_request_with_id_when_any_endpoint_then_response_echoes_request_id() {
    let app = heuristic_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "test-request-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        "test-request-123"
    );
}

#[tokio::test]
async fn given_no_credential_when_summarizing_then_heuristic_generator_answers_with_note() {
    let app = heuristic_app();

    let response = app
        .oneshot(json_request(
            "/api/v1/summarize",
            format!(r#"{{"text": "{STUDY_TEXT}", "sentences": 2}}"#),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["generator"], "heuristic");
    assert!(json["note"].as_str().is_some());
    assert!(!json["summary"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn given_empty_text_when_summarizing_then_returns_bad_request() {
    let app = heuristic_app();

    let response = app
        .oneshot(json_request(
            "/api/v1/summarize",
            r#"{"text": "   "}"#.to_string(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn given_missing_text_field_when_summarizing_then_returns_unprocessable_entity() {
    let app = heuristic_app();

    let response = app
        .oneshot(json_request(
            "/api/v1/summarize",
            r#"{"sentences": 2}"#.to_string(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn given_no_credential_when_requesting_flashcards_then_cards_are_bounded() {
    let app = heuristic_app();

    let response = app
        .oneshot(json_request(
            "/api/v1/flashcards",
            format!(r#"{{"text": "{STUDY_TEXT}", "count": 2}}"#),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["generator"], "heuristic");
    let cards = json["cards"].as_array().unwrap();
    assert!(!cards.is_empty());
    assert!(cards.len() <= 2);
    for card in cards {
        assert!(!card["answer"].as_str().unwrap().is_empty());
    }
}

#[tokio::test]
async fn given_no_credential_when_requesting_quiz_then_answer_is_among_options() {
    let app = heuristic_app();

    let response = app
        .oneshot(json_request(
            "/api/v1/quiz",
            format!(r#"{{"text": "{STUDY_TEXT}", "count": 3, "difficulty": "easy"}}"#),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["generator"], "heuristic");
    let quiz = json["quiz"].as_array().unwrap();
    assert!(!quiz.is_empty());
    for item in quiz {
        let answer = item["answer"].as_str().unwrap();
        let options = item["options"].as_array().unwrap();
        assert_eq!(options.len(), 4);
        assert_eq!(
            options.iter().filter(|o| o.as_str() == Some(answer)).count(),
            1
        );
    }
}

#[tokio::test]
async fn given_credential_when_summarizing_then_completion_generator_answers_without_note() {
    let app = completion_app("A concise remote summary.");

    let response = app
        .oneshot(json_request(
            "/api/v1/summarize",
            format!(r#"{{"text": "{STUDY_TEXT}"}}"#),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["generator"], "completion");
    assert_eq!(json["summary"], "A concise remote summary.");
    assert!(json.get("note").is_none());
}

#[tokio::test]
async fn given_credential_when_requesting_flashcards_then_completion_payload_is_parsed() {
    let app = completion_app(r#"[{"question": "What is light?", "answer": "Energy."}]"#);

    let response = app
        .oneshot(json_request(
            "/api/v1/flashcards",
            format!(r#"{{"text": "{STUDY_TEXT}", "count": 5}}"#),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["generator"], "completion");
    let cards = json["cards"].as_array().unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0]["question"], "What is light?");
}

#[tokio::test]
async fn given_malformed_completion_payload_when_requesting_flashcards_then_returns_empty_cards() {
    let app = completion_app("Sorry, I cannot produce JSON today.");

    let response = app
        .oneshot(json_request(
            "/api/v1/flashcards",
            format!(r#"{{"text": "{STUDY_TEXT}", "count": 5}}"#),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["generator"], "completion");
    assert!(json["cards"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn given_failing_completion_when_summarizing_then_returns_bad_gateway() {
    let app = create_app(Some(Arc::new(FailingCompletionClient)));

    let response = app
        .oneshot(json_request(
            "/api/v1/summarize",
            format!(r#"{{"text": "{STUDY_TEXT}"}}"#),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn given_text_upload_when_extracting_then_returns_extracted_text() {
    let app = heuristic_app();

    let response = app
        .oneshot(multipart_request(
            "notes.txt",
            "text/plain",
            "Photosynthesis converts light into energy.",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["filename"], "notes.txt");
    assert!(json["text"]
        .as_str()
        .unwrap()
        .contains("Photosynthesis converts light into energy."));
    assert!(json["characters"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn given_octet_stream_upload_with_txt_extension_when_extracting_then_falls_back_to_extension()
{
    let app = heuristic_app();

    let response = app
        .oneshot(multipart_request(
            "notes.txt",
            "application/octet-stream",
            "Extension-based routing still works.",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn given_oversize_upload_when_extracting_then_returns_payload_too_large() {
    let app = heuristic_app();
    let oversized = "x".repeat(TEST_MAX_FILE_SIZE_MB * 1024 * 1024 + 1);

    let response = app
        .oneshot(multipart_request("notes.txt", "text/plain", &oversized))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn given_excessive_count_when_requesting_flashcards_then_count_is_clamped() {
    let app = heuristic_app();

    let response = app
        .oneshot(json_request(
            "/api/v1/flashcards",
            format!(r#"{{"text": "{STUDY_TEXT}", "count": 999}}"#),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert!(json["cards"].as_array().unwrap().len() <= TEST_MAX_FLASHCARDS);
}

#[tokio::test]
async fn given_unsupported_upload_when_extracting_then_returns_unsupported_media_type() {
    let app = heuristic_app();

    let response = app
        .oneshot(multipart_request("photo.png", "image/png", "not-a-document"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn given_empty_multipart_when_extracting_then_returns_bad_request() {
    let app = heuristic_app();

    let boundary = "test-boundary";
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/extract")
                .header(
                    "content-type",
                    format!("multipart/form-data; boundary={boundary}"),
                )
                .body(Body::from(format!("--{boundary}--\r\n")))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
