use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{AssistError, Assistant, ProviderMetadata};

/// Client for an OpenAI-compatible chat-completions endpoint
#[derive(Clone)]
pub struct ChatCompletionClient {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    model: String,
}

impl ChatCompletionClient {
    pub fn new(api_key: String, api_url: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            api_url,
            model,
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

#[async_trait]
impl Assistant for ChatCompletionClient {
    async fn complete(&self, prompt: &str) -> Result<String, AssistError> {
        if self.api_key.is_empty() {
            return Err(AssistError::AuthenticationError);
        }

        let body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await?;

        if response.status() == 429 {
            return Err(AssistError::RateLimitExceeded);
        }

        if response.status() == 401 || response.status() == 403 {
            return Err(AssistError::AuthenticationError);
        }

        if !response.status().is_success() {
            return Err(AssistError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let parsed: ChatResponse = response.json().await?;
        let text = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| AssistError::ApiError("empty choices in response".to_string()))?;

        Ok(text.trim().to_string())
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "chat-completions".to_string(),
            model: self.model.clone(),
            requires_api_key: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_api_key_is_an_authentication_error() {
        let client = ChatCompletionClient::new(
            String::new(),
            "https://api.openai.com/v1/chat/completions".to_string(),
            "gpt-4o-mini".to_string(),
        );

        match client.complete("hello").await {
            Err(AssistError::AuthenticationError) => {}
            other => panic!("expected AuthenticationError, got {other:?}"),
        }
    }
}
