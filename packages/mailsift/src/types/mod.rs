//! Core data types for the extraction pipeline.

pub mod address;
pub mod document;
pub mod result;
pub mod summary;

pub use address::{AddressParseError, EmailAddress};
pub use document::Document;
pub use result::{ExtractionResult, Found, Provenance};
pub use summary::{summarize, SummaryStatistics};
