//! CSV loading - raw bytes to a [`Document`].
//!
//! Best-effort by design: the delimiter is sniffed from the first rows,
//! the encoding is decoded lossily, and ragged rows are accepted. Only
//! input that the reader itself cannot tokenize is fatal.

use tracing::debug;

use crate::error::{ExtractError, Result};
use crate::types::Document;

/// Delimiters considered during sniffing, in preference order.
const CANDIDATE_DELIMITERS: &[u8] = &[b',', b';', b'\t', b'|'];

/// How many leading non-empty lines the sniffer inspects.
const SNIFF_LINES: usize = 10;

/// Parse raw file bytes into a document.
///
/// Fails with [`ExtractError::MalformedInput`] when the bytes cannot be
/// read as delimited tabular text. No size limit is enforced here; very
/// large files are the caller's concern.
pub fn load_document(bytes: &[u8]) -> Result<Document> {
    let text = String::from_utf8_lossy(bytes);
    if text.trim().is_empty() {
        return Err(ExtractError::MalformedInput {
            reason: "input is empty".into(),
        });
    }

    let delimiter = sniff_delimiter(&text);
    debug!(delimiter = %char::from(delimiter), "sniffed CSV delimiter");

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| ExtractError::MalformedInput {
            reason: e.to_string(),
        })?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(Document::new(rows))
}

/// Pick the delimiter that splits the leading lines most consistently.
///
/// Counts occurrences per line for each candidate; a candidate present on
/// every inspected line scores by its minimum per-line count, doubled when
/// the count is identical across lines. Falls back to comma.
fn sniff_delimiter(text: &str) -> u8 {
    let lines: Vec<&str> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .take(SNIFF_LINES)
        .collect();

    let mut best = (b',', 0usize);
    for &delimiter in CANDIDATE_DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| line.bytes().filter(|&b| b == delimiter).count())
            .collect();

        let min = counts.iter().copied().min().unwrap_or(0);
        if min == 0 {
            continue;
        }

        let uniform = counts.windows(2).all(|pair| pair[0] == pair[1]);
        let score = if uniform { min * 2 } else { min };
        if score > best.1 {
            best = (delimiter, score);
        }
    }

    best.0
}
