//! OpenAI implementation of the [`AI`] trait.

use async_trait::async_trait;

use openai_client::{ApiCredential, ChatRequest, Message, OpenAIClient, OpenAIError};

use crate::ai::AI;
use crate::error::ApiError;
use crate::prompts;

/// OpenAI-backed assistant for the extraction pass.
///
/// Owns the client settings and the credential for one invocation; the
/// credential lives in secure memory and is dropped with the assistant.
///
/// # Example
///
/// ```rust,ignore
/// use mailsift::ai::OpenAiAssistant;
///
/// let assistant = OpenAiAssistant::new("sk-...".into()).with_model("gpt-4o-mini");
/// let result = mailsift::extract(&document, Some(&assistant)).await;
/// ```
pub struct OpenAiAssistant {
    client: OpenAIClient,
    credential: ApiCredential,
}

impl OpenAiAssistant {
    /// Create an assistant for a single invocation's credential.
    pub fn new(credential: ApiCredential) -> Self {
        Self {
            client: OpenAIClient::new(),
            credential,
        }
    }

    /// Set the chat model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.client = self.client.with_model(model);
        self
    }

    /// Set a custom base URL (for Azure, proxies, etc.).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.client = self.client.with_base_url(url);
        self
    }

    /// Set the per-chunk timeout.
    pub fn with_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.client = self.client.with_timeout(timeout);
        self
    }

    /// The model the assistant will call.
    pub fn model(&self) -> &str {
        self.client.model()
    }
}

#[async_trait]
impl AI for OpenAiAssistant {
    async fn suggest_addresses(&self, chunk: &str) -> Result<Vec<String>, ApiError> {
        let request = ChatRequest::new(self.client.model())
            .message(Message::system(prompts::SYSTEM_PROMPT))
            .message(Message::user(prompts::user_prompt(chunk)))
            .temperature(0.1)
            .max_tokens(1000);

        let response = self
            .client
            .chat_completion(request, &self.credential)
            .await
            .map_err(to_api_error)?;

        Ok(prompts::parse_suggestions(&response.content))
    }
}

fn to_api_error(err: OpenAIError) -> ApiError {
    match err {
        OpenAIError::Authentication => ApiError::Authentication,
        OpenAIError::QuotaExceeded => ApiError::QuotaExceeded,
        OpenAIError::Timeout => ApiError::Timeout,
        OpenAIError::Network(message) => ApiError::Network(message),
        OpenAIError::Api { status, message } => {
            ApiError::Api(format!("status {status}: {message}"))
        }
        OpenAIError::Config(message) | OpenAIError::Parse(message) => ApiError::Api(message),
    }
}
