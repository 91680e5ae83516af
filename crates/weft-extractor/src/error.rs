//! Error types for the Extractor
//!
//! Per-record failures never surface here; they become `error` / `raw_output`
//! fields on the record. These errors are for the batch as a whole.

use thiserror::Error;

/// Errors that abort a batch run
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Reading the input or writing the output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input JSON could not be parsed, or output JSON could not be written
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV input or output failed
    #[error("CSV error: {0}")]
    Csv(String),

    /// Input parsed, but is not a sequence of records
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ExtractorError {
    fn from(e: serde_json::Error) -> Self {
        ExtractorError::Json(e.to_string())
    }
}

impl From<csv::Error> for ExtractorError {
    fn from(e: csv::Error) -> Self {
        ExtractorError::Csv(e.to_string())
    }
}
