//! Document type - the loaded tabular input.

/// An uploaded CSV, loaded into memory as rows of text cells.
///
/// Immutable once constructed; the pipeline invocation that loaded it owns
/// it and discards it when the response has been rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    rows: Vec<Vec<String>>,
}

impl Document {
    /// Create a document from parsed rows.
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// All rows, in input order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// True when the document has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().flatten().map(String::as_str)
    }

    /// The first `n` rows, for display.
    pub fn preview(&self, n: usize) -> &[Vec<String>] {
        &self.rows[..self.rows.len().min(n)]
    }

    /// Render one row as a single line of text.
    ///
    /// This is the serialization sent to the model, so chunk boundaries can
    /// fall between lines and never inside a row.
    pub fn row_line(&self, index: usize) -> String {
        self.rows[index].join(", ")
    }
}
