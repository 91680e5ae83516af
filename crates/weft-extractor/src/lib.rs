//! Weft Extractor
//!
//! Turns free-text product descriptions and care instructions into structured
//! attributes using a completion service.
//!
//! # Architecture
//!
//! ```text
//! Input file → BatchDriver → Extractor → PromptBuilder → CompletionService
//!                                ↓
//!                   classify → parse → ExtractionResult → Output file
//! ```
//!
//! # Key Features
//!
//! - **Deterministic prompt**: Fixed attribute list, placeholder rule, JSON-only output
//! - **Bounded retry**: Up to 3 attempts, fixed 5s pause on rate limits
//! - **Best-effort parsing**: Non-JSON answers are kept as `raw_output`
//! - **Per-record failures**: Errors land on the record, the batch always completes
//! - **JSON and CSV**: Input and output formats follow the file extension
//!
//! # Example Usage
//!
//! ```no_run
//! use weft_extractor::{BatchDriver, Extractor, ExtractorConfig};
//! use weft_llm::MockProvider;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = MockProvider::new(r#"{"Product Type": "Dress"}"#);
//! let extractor = Extractor::new(provider, ExtractorConfig::default());
//! let driver = BatchDriver::new(extractor);
//!
//! let report = driver
//!     .process_file(Path::new("hm_input.json"), Path::new("hm_output.json"))
//!     .await?;
//!
//! println!("{}", report);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod batch;
mod classify;
mod config;
mod error;
mod extractor;
mod formats;
mod parser;
mod prompt;
mod types;


pub use batch::BatchDriver;
pub use classify::{classify, classify_error_message, RATE_LIMIT_MARKER, UNAUTHORIZED_MARKER};
pub use config::{ExtractorConfig, DEFAULT_MODEL};
pub use error::ExtractorError;
pub use extractor::{Extractor, ALL_ATTEMPTS_FAILED, UNAUTHORIZED_MESSAGE};
pub use formats::{load_dataset, read_csv, read_json, save_results, write_csv, write_json};
pub use parser::parse_completion;
pub use prompt::PromptBuilder;
pub use types::{AnnotatedRecord, BatchReport, Dataset, RecordFormat};
