//! Weft Domain Layer
//!
//! This crate contains the data model shared by every other Weft crate. It
//! defines the record being annotated, the shapes an extraction can take, and
//! the trait boundary to the external completion service.
//!
//! ## Key Concepts
//!
//! - **Record**: One product's fields, passed through untouched apart from the
//!   extraction result merged into it
//! - **Attribute**: A named property extracted from free text ("Closures",
//!   "Drying Method", ...)
//! - **ExtractionResult**: Attributes, raw model output, or an error; exactly
//!   one per record
//! - **AttemptOutcome**: The classified outcome of a single completion call
//!
//! ## Architecture
//!
//! Infrastructure (HTTP providers, file formats) lives in other crates and
//! only meets this one through [`traits::CompletionService`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod attributes;
pub mod outcome;
pub mod record;
pub mod traits;

// Re-exports for convenience
pub use attributes::{AttributeGroup, ATTRIBUTE_GROUPS, NOT_AVAILABLE};
pub use outcome::{AttemptOutcome, ExtractionResult, ERROR_FIELD, RAW_OUTPUT_FIELD};
pub use record::Record;
pub use traits::{ChatMessage, CompletionRequest, CompletionService};
