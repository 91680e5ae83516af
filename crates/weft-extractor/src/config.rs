//! Configuration for the Extractor

use serde::{Deserialize, Serialize};
use std::time::Duration;
use weft_domain::NOT_AVAILABLE;

/// Default model identifier
pub const DEFAULT_MODEL: &str = "open-mistral-7b";

/// Configuration for the Extractor and Batch Driver
///
/// Every field has a default, so a TOML file only needs to name the settings
/// it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Model identifier sent with every request
    pub model: String,

    /// Sampling temperature (0 requests deterministic decoding)
    pub temperature: f32,

    /// Maximum completion calls per record
    pub max_attempts: u32,

    /// Fixed pause after a rate-limited attempt (seconds)
    pub rate_limit_delay_secs: u64,

    /// Retry errors that are neither rate limits nor auth failures
    pub retry_other_errors: bool,

    /// Value the model is told to use for attributes not in the text
    pub placeholder: String,

    /// Record field holding the product description
    pub description_field: String,

    /// Record field holding the care instructions
    pub care_field: String,

    /// Column added to CSV output for the extraction result
    pub result_column: String,

    /// Escape `"""` inside input texts before embedding them in the prompt
    pub escape_delimiters: bool,

    /// Unwrap markdown code fences around the model's JSON before parsing
    pub strip_code_fences: bool,
}

impl ExtractorConfig {
    /// Get the rate-limit pause as a Duration
    pub fn rate_limit_delay(&self) -> Duration {
        Duration::from_secs(self.rate_limit_delay_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.model.trim().is_empty() {
            return Err("model must not be empty".to_string());
        }
        if self.max_attempts == 0 {
            return Err("max_attempts must be greater than 0".to_string());
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err("temperature must be between 0.0 and 2.0".to_string());
        }
        if self.description_field.is_empty() || self.care_field.is_empty() {
            return Err("description_field and care_field must not be empty".to_string());
        }
        if self.result_column.is_empty() {
            return Err("result_column must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for ExtractorConfig {
    /// Defaults reproduce the reference behaviour: 3 attempts, 5s pause on
    /// rate limits, no retry on other errors, no prompt escaping
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.0,
            max_attempts: 3,
            rate_limit_delay_secs: 5,
            retry_other_errors: false,
            placeholder: NOT_AVAILABLE.to_string(),
            description_field: "description".to_string(),
            care_field: "care_instructions".to_string(),
            result_column: "extraction".to_string(),
            escape_delimiters: false,
            strip_code_fences: false,
        }
    }
}

impl ExtractorConfig {
    /// Hardened preset: retries transient non-rate-limit errors, escapes
    /// prompt delimiters and tolerates fenced JSON
    pub fn hardened() -> Self {
        Self {
            retry_other_errors: true,
            escape_delimiters: true,
            strip_code_fences: true,
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str)
            .map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ExtractorConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_matches_reference_behaviour() {
        let config = ExtractorConfig::default();
        assert_eq!(config.model, "open-mistral-7b");
        assert_eq!(config.temperature, 0.0);
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.rate_limit_delay(), Duration::from_secs(5));
        assert!(!config.retry_other_errors);
        assert_eq!(config.placeholder, "Not Available");
    }

    #[test]
    fn test_hardened_config_is_valid() {
        let config = ExtractorConfig::hardened();
        assert!(config.validate().is_ok());
        assert!(config.retry_other_errors);
        assert_eq!(config.max_attempts, 3);
    }

    #[test]
    fn test_invalid_max_attempts() {
        let mut config = ExtractorConfig::default();
        config.max_attempts = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_temperature() {
        let mut config = ExtractorConfig::default();
        config.temperature = 3.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_model_rejected() {
        let mut config = ExtractorConfig::default();
        config.model = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = ExtractorConfig::from_toml("max_attempts = 5\ncare_field = \"care\"").unwrap();
        assert_eq!(config.max_attempts, 5);
        assert_eq!(config.care_field, "care");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.rate_limit_delay_secs, 5);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ExtractorConfig::hardened();
        let toml_str = config.to_toml().unwrap();
        let parsed = ExtractorConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_malformed_toml() {
        assert!(ExtractorConfig::from_toml("max_attempts = \"three\"").is_err());
    }
}
