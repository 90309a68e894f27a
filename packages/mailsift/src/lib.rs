//! Email extraction from tabular text.
//!
//! mailsift reads a CSV into a [`Document`], finds email addresses with a
//! regex pass plus an optional model-assisted pass, and merges the two
//! into one insertion-ordered, case-insensitively unique result. The
//! pipeline is stateless per invocation and strictly forward: load,
//! extract, summarize, export.
//!
//! The model is optional and never load-bearing: with no [`ai::AI`]
//! supplied, or when every call to it fails, the result is exactly what
//! pattern matching found, with failures recorded as warnings instead of
//! errors.
//!
//! # Usage
//!
//! ```rust,ignore
//! use mailsift::{export_csv, extract, load_document, summarize};
//! use mailsift::ai::OpenAiAssistant;
//!
//! let document = load_document(&bytes)?;
//! let assistant = OpenAiAssistant::new(credential);
//! let result = extract(&document, Some(&assistant)).await;
//!
//! let stats = summarize(&result);
//! let csv_bytes = export_csv(&result);
//! ```
//!
//! # Modules
//!
//! - [`types`] - document, address, result, and summary types
//! - [`loader`] - bytes to [`Document`]
//! - [`pattern`] - the regex pass
//! - [`chunk`] - row-aligned prompt chunking
//! - [`prompts`] - prompt templates and completion parsing
//! - [`ai`] - the model seam and the OpenAI-backed assistant
//! - [`engine`] - the merged extraction pipeline
//! - [`export`] - CSV serialization of results
//! - [`testing`] - mock model for tests

pub mod ai;
pub mod chunk;
pub mod engine;
pub mod error;
pub mod export;
pub mod loader;
pub mod pattern;
pub mod prompts;
pub mod testing;
pub mod types;

pub use chunk::{ChunkConfig, DEFAULT_CHUNK_BUDGET};
pub use engine::{extract, extract_with_config};
pub use error::{ApiError, ExtractError, Result, Warning};
pub use export::{export_csv, parse_exported};
pub use loader::load_document;
pub use types::{
    summarize, AddressParseError, Document, EmailAddress, ExtractionResult, Found, Provenance,
    SummaryStatistics,
};

pub use ai::AI;

#[cfg(feature = "openai")]
pub use ai::OpenAiAssistant;

#[cfg(feature = "openai")]
pub use openai_client::ApiCredential;
