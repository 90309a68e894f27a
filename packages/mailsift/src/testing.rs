//! Testing utilities including a mock model.
//!
//! Useful for exercising the pipeline without real API calls.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::ai::AI;
use crate::error::ApiError;

/// A mock model for testing.
///
/// Returns deterministic, configurable suggestions and can inject
/// failures, either globally or for a specific call index.
///
/// # Example
///
/// ```rust,ignore
/// use mailsift::testing::MockAI;
///
/// let ai = MockAI::new()
///     .with_suggestions("grace", vec!["grace@navy.mil".into()])
///     .with_failure_on_chunk(2, ApiError::Timeout);
/// ```
#[derive(Default)]
pub struct MockAI {
    /// Canned suggestions, matched when the chunk contains the needle
    suggestions: Arc<RwLock<Vec<(String, Vec<String>)>>>,

    /// Failure injected on every call
    failure: Arc<RwLock<Option<ApiError>>>,

    /// Failures injected for specific call indices
    failures_by_call: Arc<RwLock<HashMap<usize, ApiError>>>,

    /// Chunks received, in call order
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockAI {
    /// Create a mock that suggests nothing and never fails.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `suggestions` for any chunk containing `needle`.
    pub fn with_suggestions(self, needle: impl Into<String>, suggestions: Vec<String>) -> Self {
        self.suggestions
            .write()
            .unwrap()
            .push((needle.into(), suggestions));
        self
    }

    /// Fail every call with the given error.
    pub fn with_failure(self, error: ApiError) -> Self {
        *self.failure.write().unwrap() = Some(error);
        self
    }

    /// Fail only the call with the given index (zero-based).
    pub fn with_failure_on_chunk(self, call: usize, error: ApiError) -> Self {
        self.failures_by_call.write().unwrap().insert(call, error);
        self
    }

    /// Chunks received so far.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    /// Number of calls made.
    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

#[async_trait]
impl AI for MockAI {
    async fn suggest_addresses(&self, chunk: &str) -> Result<Vec<String>, ApiError> {
        let call_index = {
            let mut calls = self.calls.write().unwrap();
            calls.push(chunk.to_string());
            calls.len() - 1
        };

        if let Some(error) = self.failure.read().unwrap().as_ref() {
            return Err(error.clone());
        }
        if let Some(error) = self.failures_by_call.read().unwrap().get(&call_index) {
            return Err(error.clone());
        }

        Ok(self
            .suggestions
            .read()
            .unwrap()
            .iter()
            .filter(|(needle, _)| chunk.contains(needle.as_str()))
            .flat_map(|(_, suggestions)| suggestions.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_suggestions_matched_by_substring() {
        let ai = MockAI::new().with_suggestions("navy", vec!["grace@navy.mil".into()]);

        let hit = ai.suggest_addresses("grace at navy dot mil").await.unwrap();
        assert_eq!(hit, vec!["grace@navy.mil"]);

        let miss = ai.suggest_addresses("unrelated text").await.unwrap();
        assert!(miss.is_empty());
    }

    #[tokio::test]
    async fn test_failure_on_specific_call() {
        let ai = MockAI::new().with_failure_on_chunk(1, ApiError::QuotaExceeded);

        assert!(ai.suggest_addresses("first").await.is_ok());
        assert!(matches!(
            ai.suggest_addresses("second").await,
            Err(ApiError::QuotaExceeded)
        ));
        assert!(ai.suggest_addresses("third").await.is_ok());
        assert_eq!(ai.call_count(), 3);
    }
}
