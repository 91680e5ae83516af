//! Weft CLI library.
//!
//! This library provides the pieces of the `weft` binary: argument parsing,
//! startup configuration and output formatting.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;

pub use cli::Cli;
pub use config::AppConfig;
pub use error::{CliError, Result};
pub use output::Formatter;
