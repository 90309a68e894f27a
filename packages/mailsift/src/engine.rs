//! Extraction engine - pattern pass, model-assisted pass, merge.

use tracing::{debug, info, warn};

use crate::ai::AI;
use crate::chunk::{chunk_rows, ChunkConfig};
use crate::error::Warning;
use crate::pattern::scan_document;
use crate::types::{Document, EmailAddress, ExtractionResult, Provenance};

/// Extract email addresses from a document.
///
/// The pattern pass always runs. When a model is supplied the document is
/// chunked on row boundaries and each chunk sent for contextual
/// suggestions; validated suggestions are merged in with pattern matches
/// taking precedence over duplicates.
///
/// Model failures degrade, never abort: each failed chunk becomes a
/// [`Warning`] on the result and the remaining chunks are still attempted.
/// With `ai` absent the result is exactly the pattern-matching output.
pub async fn extract(document: &Document, ai: Option<&dyn AI>) -> ExtractionResult {
    extract_with_config(document, ai, &ChunkConfig::default()).await
}

/// [`extract`] with an explicit chunking configuration.
pub async fn extract_with_config(
    document: &Document,
    ai: Option<&dyn AI>,
    config: &ChunkConfig,
) -> ExtractionResult {
    let mut result = ExtractionResult::new();

    for address in scan_document(document) {
        result.insert(address, Provenance::Pattern);
    }
    debug!(found = result.len(), "pattern pass complete");

    let Some(ai) = ai else {
        debug!("no model supplied, returning pattern-only result");
        return result;
    };

    let chunks = chunk_rows(document, config);
    info!(chunks = chunks.len(), "starting model-assisted pass");

    for (index, chunk) in chunks.iter().enumerate() {
        match ai.suggest_addresses(chunk).await {
            Ok(candidates) => {
                for candidate in candidates {
                    match EmailAddress::parse(&candidate) {
                        Ok(address) => {
                            result.insert(address, Provenance::Api);
                        }
                        Err(rejected) => {
                            // Pattern matching is the authoritative fallback;
                            // invalid suggestions are dropped without surfacing.
                            debug!(candidate = %rejected.candidate, "discarding invalid suggestion");
                        }
                    }
                }
            }
            Err(error) => {
                warn!(chunk = index, error = %error, "model call failed, continuing");
                result.push_warning(Warning::new(index, error.to_string()));
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::testing::MockAI;
    use crate::types::Provenance;

    fn doc(rows: Vec<Vec<&str>>) -> Document {
        Document::new(
            rows.into_iter()
                .map(|row| row.into_iter().map(str::to_string).collect())
                .collect(),
        )
    }

    #[tokio::test]
    async fn test_pattern_only_without_model() {
        let document = doc(vec![vec!["Ada", "ada@example.com"]]);
        let result = extract(&document, None).await;

        assert_eq!(result.len(), 1);
        assert_eq!(result.entries().next().unwrap().provenance, Provenance::Pattern);
        assert!(result.warnings().is_empty());
    }

    #[tokio::test]
    async fn test_model_suggestions_merged_and_validated() {
        let document = doc(vec![vec!["Ada", "ada@example.com", "grace at navy dot mil"]]);
        let ai = MockAI::new().with_suggestions(
            "grace",
            vec!["grace@navy.mil".into(), "not an address".into()],
        );

        let result = extract(&document, Some(&ai)).await;

        let addresses: Vec<&str> = result.addresses().map(|a| a.as_str()).collect();
        assert_eq!(addresses, vec!["ada@example.com", "grace@navy.mil"]);

        let provenance: Vec<Provenance> =
            result.entries().map(|found| found.provenance).collect();
        assert_eq!(provenance, vec![Provenance::Pattern, Provenance::Api]);
    }

    #[tokio::test]
    async fn test_duplicate_suggestion_keeps_pattern_provenance() {
        let document = doc(vec![vec!["ada@example.com"]]);
        let ai = MockAI::new().with_suggestions("ada", vec!["ADA@EXAMPLE.COM".into()]);

        let result = extract(&document, Some(&ai)).await;

        assert_eq!(result.len(), 1);
        let only = result.entries().next().unwrap();
        assert_eq!(only.provenance, Provenance::Pattern);
        assert_eq!(only.address.as_str(), "ada@example.com");
    }

    #[tokio::test]
    async fn test_model_failure_degrades_to_pattern_result() {
        let document = doc(vec![vec!["ada@example.com"]]);
        let ai = MockAI::new().with_failure(ApiError::Timeout);

        let result = extract(&document, Some(&ai)).await;

        let addresses: Vec<&str> = result.addresses().map(|a| a.as_str()).collect();
        assert_eq!(addresses, vec!["ada@example.com"]);
        assert_eq!(result.warnings().len(), 1);
        assert!(result.warnings()[0].message.contains("timed out"));
    }

    #[tokio::test]
    async fn test_failed_chunk_does_not_stop_later_chunks() {
        let document = doc(vec![vec!["row one"], vec!["row two"]]);
        let ai = MockAI::new()
            .with_suggestions("row two", vec!["found@later.com".into()])
            .with_failure_on_chunk(0, ApiError::Network("connection reset".into()));

        let config = ChunkConfig { budget: 7 };
        let result = extract_with_config(&document, Some(&ai), &config).await;

        assert_eq!(result.len(), 1);
        assert_eq!(result.addresses().next().unwrap().as_str(), "found@later.com");
        assert_eq!(result.warnings().len(), 1);
        assert_eq!(result.warnings()[0].chunk, 0);
    }

    #[tokio::test]
    async fn test_empty_document_no_model_is_empty_and_quiet() {
        let result = extract(&Document::default(), None).await;
        assert!(result.is_empty());
        assert!(result.warnings().is_empty());
    }

    #[tokio::test]
    async fn test_chunks_delivered_on_row_boundaries() {
        let document = doc(vec![vec!["first row"], vec!["second row"]]);
        let ai = MockAI::new();
        let config = ChunkConfig { budget: 9 };

        extract_with_config(&document, Some(&ai), &config).await;

        let calls = ai.calls();
        assert_eq!(calls, vec!["first row".to_string(), "second row".to_string()]);
    }
}
