//! errors.rs - Custom error types for the sentieval-core library.
//!
//! This module defines structured error enums for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use std::path::PathBuf;
use thiserror::Error;

/// Failures raised while reading a labelled dataset.
///
/// Every variant is fatal for a run: no record is skipped and no partial
/// metrics are produced.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DatasetError {
    #[error("Failed to open dataset '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read dataset: {0}")]
    Read(#[source] std::io::Error),

    #[error("Malformed dataset row: {0}")]
    Csv(#[from] csv::Error),

    #[error("Quoted field opened on line {line} is never closed")]
    UnterminatedQuote { line: u64 },

    #[error("Delimiter {delimiter:?} is not a single ASCII character")]
    InvalidDelimiter { delimiter: char },

    #[error("Row on line {line} has {found} column(s); a label and a text column are required")]
    MissingColumn { line: u64, found: usize },

    #[error("Row on line {line}: label '{value}' is not an integer")]
    InvalidLabel { line: u64, value: String },
}

/// This enum represents all possible error types in the `sentieval-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SentievalError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error("Failed to load lexicon '{}': {reason}", path.display())]
    Lexicon { path: PathBuf, reason: String },

    #[error("Invalid evaluation configuration: {0}")]
    InvalidConfig(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),
}
