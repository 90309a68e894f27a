//! Model seam for the API-assisted extraction pass.
//!
//! The engine talks to a language model only through the [`AI`] trait, so
//! the pipeline is testable without a network and the provider is
//! swappable. The OpenAI-backed implementation lives behind the `openai`
//! feature.

use async_trait::async_trait;

use crate::error::ApiError;

#[cfg(feature = "openai")]
mod openai;

#[cfg(feature = "openai")]
pub use openai::OpenAiAssistant;

/// A language model that can suggest email-like strings in a text chunk.
///
/// Implementations wrap a specific provider and own its prompting and
/// response parsing. Returned candidates are unvalidated; the engine
/// validates each one and silently drops failures.
#[async_trait]
pub trait AI: Send + Sync {
    /// Ask the model for email addresses it recognizes in `chunk`.
    ///
    /// One attempt per call. Failures are reported, not retried.
    async fn suggest_addresses(&self, chunk: &str) -> Result<Vec<String>, ApiError>;
}
