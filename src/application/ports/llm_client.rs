use async_trait::async_trait;

use super::GenerationConfig;

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("prompt blocked: {0}")]
    Blocked(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
