//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Required environment variable is not set
    #[error("Required environment variable '{0}' is not set")]
    MissingEnv(String),

    /// Batch processing error
    #[error(transparent)]
    Extractor(#[from] weft_extractor::ExtractorError),

    /// Completion provider setup error
    #[error(transparent)]
    Llm(#[from] weft_llm::LlmError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}
