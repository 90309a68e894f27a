//! Typed errors for the extraction library.
//!
//! Uses `thiserror` for library errors (not `anyhow`). Parsing failures are
//! fatal to an invocation; model-call failures are not — they become
//! [`Warning`]s on the result and the pipeline keeps going.

use std::fmt;
use thiserror::Error;

/// Errors that abort the current invocation.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Input cannot be parsed as delimited tabular text
    #[error("malformed input: {reason}")]
    MalformedInput { reason: String },
}

/// Errors from the model-assisted extraction step.
///
/// These never abort extraction. The engine records them as warnings and
/// falls back to the pattern-matching result.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The API rejected the credential
    #[error("authentication failed: the API rejected the credential")]
    Authentication,

    /// Rate limit or quota exhausted
    #[error("quota exceeded: the API refused the request")]
    QuotaExceeded,

    /// Connection-level failure
    #[error("network error: {0}")]
    Network(String),

    /// The call did not complete within the timeout
    #[error("request timed out")]
    Timeout,

    /// Any other API-side failure
    #[error("API error: {0}")]
    Api(String),
}

/// A non-fatal failure recorded during extraction.
///
/// Carries the index of the chunk whose model call failed and a rendered
/// message safe to show to the user. Never contains the credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    /// Zero-based index of the chunk that failed
    pub chunk: usize,

    /// Display-ready description of the failure
    pub message: String,
}

impl Warning {
    /// Record a failed chunk call.
    pub fn new(chunk: usize, message: impl Into<String>) -> Self {
        Self {
            chunk,
            message: message.into(),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chunk {}: {}", self.chunk, self.message)
    }
}

/// Result type alias for fatal extraction operations.
pub type Result<T> = std::result::Result<T, ExtractError>;
