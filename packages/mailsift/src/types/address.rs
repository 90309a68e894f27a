//! Validated email address type.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

use crate::pattern::EMAIL_PATTERN;

/// A candidate failed email-format validation.
///
/// Pattern matching is the authoritative source, so callers feeding
/// model-suggested candidates discard this without surfacing it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("not a valid email address: {candidate}")]
pub struct AddressParseError {
    /// The rejected candidate text
    pub candidate: String,
}

/// A validated `local@domain` email address.
///
/// The domain is normalized to lowercase on construction; the local part is
/// kept as written. Uniqueness is case-insensitive over the whole address
/// via [`EmailAddress::dedup_key`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress {
    address: String,
    at: usize,
}

fn anchored_email_regex() -> &'static Regex {
    static ANCHORED: OnceLock<Regex> = OnceLock::new();
    ANCHORED.get_or_init(|| Regex::new(&format!("^(?:{})$", EMAIL_PATTERN)).unwrap())
}

impl EmailAddress {
    /// Validate a candidate string.
    ///
    /// The whole candidate must match the email grammar: non-empty local
    /// part, non-empty domain with at least one dot-separated label.
    pub fn parse(candidate: &str) -> Result<Self, AddressParseError> {
        let candidate = candidate.trim();
        if !anchored_email_regex().is_match(candidate) {
            return Err(AddressParseError {
                candidate: candidate.to_string(),
            });
        }

        // The grammar guarantees exactly one '@' before the domain.
        let at = candidate.find('@').ok_or_else(|| AddressParseError {
            candidate: candidate.to_string(),
        })?;
        let mut address = String::with_capacity(candidate.len());
        address.push_str(&candidate[..at]);
        address.push('@');
        address.push_str(&candidate[at + 1..].to_ascii_lowercase());

        Ok(Self { address, at })
    }

    /// The full address with normalized domain.
    pub fn as_str(&self) -> &str {
        &self.address
    }

    /// The part before the '@', as written in the source.
    pub fn local_part(&self) -> &str {
        &self.address[..self.at]
    }

    /// The lowercased domain.
    pub fn domain(&self) -> &str {
        &self.address[self.at + 1..]
    }

    /// Case-insensitive uniqueness key over the whole address.
    pub fn dedup_key(&self) -> String {
        self.address.to_ascii_lowercase()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let address = EmailAddress::parse("ada@example.com").unwrap();
        assert_eq!(address.as_str(), "ada@example.com");
        assert_eq!(address.local_part(), "ada");
        assert_eq!(address.domain(), "example.com");
    }

    #[test]
    fn test_domain_lowercased_local_kept() {
        let address = EmailAddress::parse("Ada.Lovelace@EXAMPLE.COM").unwrap();
        assert_eq!(address.as_str(), "Ada.Lovelace@example.com");
        assert_eq!(address.local_part(), "Ada.Lovelace");
        assert_eq!(address.domain(), "example.com");
    }

    #[test]
    fn test_dedup_key_case_insensitive() {
        let a = EmailAddress::parse("a@b.com").unwrap();
        let b = EmailAddress::parse("A@B.COM").unwrap();
        assert_eq!(a.dedup_key(), b.dedup_key());
    }

    #[test]
    fn test_rejects_missing_domain_dot() {
        assert!(EmailAddress::parse("ada@localhost").is_err());
    }

    #[test]
    fn test_rejects_surrounding_text() {
        assert!(EmailAddress::parse("contact me at ada@example.com").is_err());
        assert!(EmailAddress::parse("mailto:ada@example.com").is_err());
    }

    #[test]
    fn test_rejects_empty_and_garbage() {
        assert!(EmailAddress::parse("").is_err());
        assert!(EmailAddress::parse("@example.com").is_err());
        assert!(EmailAddress::parse("ada@").is_err());
        assert!(EmailAddress::parse("not-an-email").is_err());
    }

    #[test]
    fn test_trims_whitespace() {
        let address = EmailAddress::parse("  ada@example.com\n").unwrap();
        assert_eq!(address.as_str(), "ada@example.com");
    }

    #[test]
    fn test_plus_and_subdomain() {
        let address = EmailAddress::parse("dev+test@mail.example.co.uk").unwrap();
        assert_eq!(address.domain(), "mail.example.co.uk");
    }
}
