//! Summary statistics - a derived read-only view over a result.

use indexmap::IndexMap;

use crate::types::result::ExtractionResult;

/// Counts derived from an extraction result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryStatistics {
    /// Number of unique addresses
    pub total: usize,

    /// Number of distinct domains
    pub unique_domains: usize,

    /// Addresses per domain, in first-seen order
    pub domain_counts: IndexMap<String, usize>,
}

/// Compute summary statistics.
///
/// Pure and total: an empty result yields zero counts.
pub fn summarize(result: &ExtractionResult) -> SummaryStatistics {
    let mut domain_counts: IndexMap<String, usize> = IndexMap::new();
    for address in result.addresses() {
        *domain_counts.entry(address.domain().to_string()).or_insert(0) += 1;
    }

    SummaryStatistics {
        total: result.len(),
        unique_domains: domain_counts.len(),
        domain_counts,
    }
}
