pub mod client;

pub use client::ChatCompletionClient;

/// Text-completion provider interface for admin tooling
#[async_trait::async_trait]
pub trait Assistant: Send + Sync {
    /// Send a prompt and return the provider's text response
    async fn complete(&self, prompt: &str) -> Result<String, AssistError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub model: String,
    pub requires_api_key: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum AssistError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,
}
