//! Row-aligned chunking of document text for bounded-size prompts.

use crate::types::Document;

/// Character budget applied to each prompt chunk.
///
/// Keeps each request comfortably inside the token window of small chat
/// models; rows accumulate into a chunk until the next row would cross it.
pub const DEFAULT_CHUNK_BUDGET: usize = 4_000;

/// Chunking parameters.
#[derive(Debug, Clone)]
pub struct ChunkConfig {
    /// Maximum characters per chunk
    pub budget: usize,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            budget: DEFAULT_CHUNK_BUDGET,
        }
    }
}

/// Serialize the document row-wise and split it into chunks.
///
/// Boundaries always fall between rows. A single row longer than the
/// budget becomes its own oversized chunk rather than being split mid-row,
/// so every chunk the model sees contains whole rows.
pub fn chunk_rows(document: &Document, config: &ChunkConfig) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for index in 0..document.row_count() {
        let line = document.row_line(index);
        let line_len = line.chars().count();

        let would_exceed = current_len > 0 && current_len + 1 + line_len > config.budget;
        if would_exceed {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if current_len > 0 {
            current.push('\n');
            current_len += 1;
        }
        current.push_str(&line);
        current_len += line_len;
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}
