//! API credential handling with secure memory.
//!
//! Uses the `secrecy` crate so the key can never leak through `Debug`,
//! `Display`, or structured logging. The credential is passed into each
//! request rather than stored on the client, keeping it scoped to the
//! invocation that supplied it.

use secrecy::{ExposeSecret, SecretBox};
use std::fmt;

use crate::error::{OpenAIError, Result};

/// An API key that won't be logged or displayed.
pub struct ApiCredential(SecretBox<str>);

impl ApiCredential {
    /// Wrap a caller-supplied key.
    pub fn new(value: impl Into<String>) -> Self {
        Self(SecretBox::new(Box::from(value.into().as_str())))
    }

    /// Read the key from the `OPENAI_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        let key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| OpenAIError::Config("OPENAI_API_KEY not set".into()))?;
        Ok(Self::new(key))
    }

    /// Expose the key for use.
    ///
    /// Only call this at the point of building the Authorization header.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl Clone for ApiCredential {
    fn clone(&self) -> Self {
        Self::new(self.expose().to_string())
    }
}

impl fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for ApiCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl From<String> for ApiCredential {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for ApiCredential {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_not_in_debug() {
        let credential = ApiCredential::new("sk-super-secret-key");
        let debug = format!("{:?}", credential);
        assert!(!debug.contains("sk-super"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_key_not_in_display() {
        let credential = ApiCredential::new("sk-super-secret-key");
        let display = format!("{}", credential);
        assert!(!display.contains("sk-super"));
        assert!(display.contains("[REDACTED]"));
    }

    #[test]
    fn test_expose_works() {
        let credential = ApiCredential::new("sk-super-secret-key");
        assert_eq!(credential.expose(), "sk-super-secret-key");
    }
}
