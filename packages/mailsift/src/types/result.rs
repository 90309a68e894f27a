//! Extraction result - an insertion-ordered, case-insensitive address set.

use indexmap::IndexMap;
use std::fmt;

use crate::error::Warning;
use crate::types::address::EmailAddress;

/// How an address was found.
///
/// Diagnostic only: provenance never affects uniqueness. When both methods
/// find the same address the pattern tag wins, since the regex match is
/// exact-syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// Matched by the email regex
    Pattern,

    /// Suggested by the language model and validated
    Api,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provenance::Pattern => f.write_str("pattern"),
            Provenance::Api => f.write_str("api"),
        }
    }
}

/// One extracted address with its provenance tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Found {
    /// The validated address
    pub address: EmailAddress,

    /// Where it came from
    pub provenance: Provenance,
}

/// The merged output of an extraction run.
///
/// Entries are unique under case-insensitive comparison of the whole
/// address and keep their insertion order, so the rendered table and the
/// exported CSV agree. Warnings from degraded model calls ride along.
#[derive(Debug, Clone, Default)]
pub struct ExtractionResult {
    entries: IndexMap<String, Found>,
    warnings: Vec<Warning>,
}

impl ExtractionResult {
    /// Create an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an address, collapsing case-insensitive duplicates.
    ///
    /// The first occurrence wins and keeps its position. A pattern-matched
    /// duplicate of a model-suggested entry upgrades the stored entry to
    /// pattern provenance. Returns true when the address was new.
    pub fn insert(&mut self, address: EmailAddress, provenance: Provenance) -> bool {
        let key = address.dedup_key();
        match self.entries.get_mut(&key) {
            None => {
                self.entries.insert(key, Found { address, provenance });
                true
            }
            Some(existing) => {
                if existing.provenance == Provenance::Api && provenance == Provenance::Pattern {
                    *existing = Found { address, provenance };
                }
                false
            }
        }
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &Found> {
        self.entries.values()
    }

    /// Addresses in insertion order.
    pub fn addresses(&self) -> impl Iterator<Item = &EmailAddress> {
        self.entries.values().map(|found| &found.address)
    }

    /// Number of unique addresses.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing was found.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether an address is already present (case-insensitive).
    pub fn contains(&self, address: &EmailAddress) -> bool {
        self.entries.contains_key(&address.dedup_key())
    }

    /// Record a non-fatal failure.
    pub fn push_warning(&mut self, warning: Warning) {
        self.warnings.push(warning);
    }

    /// Warnings recorded during extraction.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }
}
