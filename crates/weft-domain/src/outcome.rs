//! Outcome module - what a single attempt produced, and what a record ends with

use serde_json::{Map, Value};
use std::fmt;

/// Field holding the model's text when it could not be parsed as JSON
pub const RAW_OUTPUT_FIELD: &str = "raw_output";

/// Field holding a record-level error description
pub const ERROR_FIELD: &str = "error";

/// Final result of extracting attributes for one record
///
/// Exactly one shape per record; shapes are never mixed.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionResult {
    /// The model answered with a JSON object of attribute name to value
    Attributes(Map<String, Value>),

    /// The model answered, but not with a JSON object; the stripped text is kept
    RawOutput(String),

    /// No usable answer was obtained
    Error(String),
}

impl ExtractionResult {
    /// The fields this result contributes to the augmented record
    pub fn to_fields(&self) -> Map<String, Value> {
        match self {
            ExtractionResult::Attributes(attrs) => attrs.clone(),
            ExtractionResult::RawOutput(text) => {
                let mut map = Map::new();
                map.insert(RAW_OUTPUT_FIELD.to_string(), Value::String(text.clone()));
                map
            }
            ExtractionResult::Error(message) => {
                let mut map = Map::new();
                map.insert(ERROR_FIELD.to_string(), Value::String(message.clone()));
                map
            }
        }
    }

    /// The result as a standalone JSON object
    pub fn to_value(&self) -> Value {
        Value::Object(self.to_fields())
    }

    /// Whether attributes were extracted
    pub fn is_success(&self) -> bool {
        matches!(self, ExtractionResult::Attributes(_))
    }

    /// Whether the record ended in an error
    pub fn is_error(&self) -> bool {
        matches!(self, ExtractionResult::Error(_))
    }
}

/// Classified outcome of a single completion call
///
/// Transient; drives the retry loop and is never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// The service returned text
    Success(String),

    /// The service refused the call for exceeding its rate limit
    RateLimited,

    /// The service rejected the credential
    Unauthorized,

    /// Any other failure, with its message
    OtherError(String),
}

impl fmt::Display for AttemptOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttemptOutcome::Success(_) => write!(f, "success"),
            AttemptOutcome::RateLimited => write!(f, "rate limited"),
            AttemptOutcome::Unauthorized => write!(f, "unauthorized"),
            AttemptOutcome::OtherError(message) => write!(f, "error: {}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_raw_output_fields() {
        let fields = ExtractionResult::RawOutput("oops".into()).to_fields();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.get(RAW_OUTPUT_FIELD), Some(&json!("oops")));
    }

    #[test]
    fn test_error_fields() {
        let fields = ExtractionResult::Error("All attempts failed".into()).to_fields();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.get(ERROR_FIELD), Some(&json!("All attempts failed")));
    }

    #[test]
    fn test_attribute_fields_pass_through() {
        let mut attrs = Map::new();
        attrs.insert("Product Type".into(), json!("Dress"));
        attrs.insert("Length".into(), json!("Not Available"));

        let result = ExtractionResult::Attributes(attrs.clone());
        assert_eq!(result.to_fields(), attrs);
        assert!(result.is_success());
        assert!(!result.is_error());
    }

    #[test]
    fn test_to_value_is_object() {
        let value = ExtractionResult::Error("x".into()).to_value();
        assert_eq!(value, json!({"error": "x"}));
    }

    #[test]
    fn test_attempt_outcome_display() {
        assert_eq!(AttemptOutcome::RateLimited.to_string(), "rate limited");
        assert_eq!(
            AttemptOutcome::OtherError("timeout".into()).to_string(),
            "error: timeout"
        );
    }
}
