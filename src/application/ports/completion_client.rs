use async_trait::async_trait;

/// Boundary to the hosted chat-completion endpoint. A single call per
/// request, no retries; failures surface to the caller as-is.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, CompletionClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CompletionClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
