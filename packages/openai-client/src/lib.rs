//! Minimal OpenAI chat-completions client.
//!
//! Supports exactly one capability: send a prompt, get the completion text
//! back. The credential is supplied per call and held in secure memory, so
//! a shared client never owns a key.
//!
//! # Example
//!
//! ```rust,ignore
//! use openai_client::{ApiCredential, ChatRequest, Message, OpenAIClient};
//!
//! let client = OpenAIClient::new().with_model("gpt-4o-mini");
//! let credential = ApiCredential::from_env()?;
//!
//! let response = client
//!     .chat_completion(
//!         ChatRequest::new(client.model())
//!             .message(Message::system("You are terse."))
//!             .message(Message::user("Hello!")),
//!         &credential,
//!     )
//!     .await?;
//! println!("{}", response.content);
//! ```

pub mod credential;
pub mod error;
pub mod types;

pub use credential::ApiCredential;
pub use error::{OpenAIError, Result};
pub use types::{ChatRequest, ChatResponse, Message, Usage};

use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Default chat model, matching the cheapest widely-available tier.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Chat-completions API client.
///
/// Holds connection settings only; the credential is a parameter of each
/// request so it stays scoped to the invocation that supplied it.
#[derive(Clone)]
pub struct OpenAIClient {
    http_client: Client,
    base_url: String,
    model: String,
    timeout: Duration,
}

impl Default for OpenAIClient {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenAIClient {
    /// Create a client with default settings.
    pub fn new() -> Self {
        Self {
            http_client: Client::new(),
            base_url: "https://api.openai.com/v1".to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set a custom base URL (for Azure, proxies, etc.).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the default chat model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get the default model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Chat completion.
    ///
    /// One attempt per call; retry policy is the caller's concern.
    pub async fn chat_completion(
        &self,
        request: ChatRequest,
        credential: &ApiCredential,
    ) -> Result<ChatResponse> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .timeout(self.timeout)
            .header("Authorization", format!("Bearer {}", credential.expose()))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "chat completion request failed");
                OpenAIError::from_transport(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, "chat completion API error");
            return Err(OpenAIError::from_status(status, error_text));
        }

        let chat_response: types::ChatResponseRaw = response
            .json()
            .await
            .map_err(|e| OpenAIError::Parse(e.to_string()))?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| OpenAIError::Parse("response contained no choices".into()))?;

        debug!(
            model = %request.model,
            duration_ms = start.elapsed().as_millis(),
            "chat completion"
        );

        Ok(ChatResponse {
            content,
            usage: chat_response.usage,
        })
    }

    /// Convenience completion: system + user message, default model.
    pub async fn complete(
        &self,
        system: impl Into<String>,
        user: impl Into<String>,
        credential: &ApiCredential,
    ) -> Result<String> {
        let request = ChatRequest::new(&self.model)
            .message(Message::system(system))
            .message(Message::user(user));

        self.chat_completion(request, credential)
            .await
            .map(|r| r.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builder() {
        let client = OpenAIClient::new()
            .with_base_url("https://custom.api.com")
            .with_model("gpt-4o-mini")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(client.base_url(), "https://custom.api.com");
        assert_eq!(client.model(), "gpt-4o-mini");
        assert_eq!(client.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_defaults() {
        let client = OpenAIClient::new();
        assert_eq!(client.model(), DEFAULT_MODEL);
        assert_eq!(client.base_url(), "https://api.openai.com/v1");
        assert_eq!(client.timeout, DEFAULT_TIMEOUT);
    }
}
