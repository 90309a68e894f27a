//! Error types for the OpenAI client.

use thiserror::Error;

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, OpenAIError>;

/// Errors returned by the chat-completion API or its transport.
///
/// Callers that degrade on failure (rather than abort) rely on the
/// distinction between these variants, so transport and HTTP-status
/// failures are classified here instead of being folded into one string.
#[derive(Debug, Error)]
pub enum OpenAIError {
    /// Configuration error (missing API key, invalid settings)
    #[error("configuration error: {0}")]
    Config(String),

    /// The API rejected the credential (HTTP 401/403)
    #[error("authentication failed: the API rejected the credential")]
    Authentication,

    /// Rate limit or quota exhausted (HTTP 429)
    #[error("quota exceeded: the API refused the request (rate limited)")]
    QuotaExceeded,

    /// The request did not complete within the configured timeout
    #[error("request timed out")]
    Timeout,

    /// Connection-level failure (DNS, TLS, refused connection)
    #[error("network error: {0}")]
    Network(String),

    /// Any other non-2xx response
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The response body could not be interpreted
    #[error("parse error: {0}")]
    Parse(String),
}

impl OpenAIError {
    /// Classify a transport-level reqwest failure.
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            OpenAIError::Timeout
        } else {
            OpenAIError::Network(err.to_string())
        }
    }

    /// Classify a non-2xx HTTP status.
    pub(crate) fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            401 | 403 => OpenAIError::Authentication,
            429 => OpenAIError::QuotaExceeded,
            code => OpenAIError::Api {
                status: code,
                message,
            },
        }
    }
}
