//! Core Extractor implementation: the per-record retry loop

use crate::classify::classify;
use crate::config::ExtractorConfig;
use crate::parser::parse_completion;
use crate::prompt::PromptBuilder;
use tracing::{debug, warn};
use weft_domain::{AttemptOutcome, CompletionRequest, CompletionService, ExtractionResult, Record};

/// Error recorded when the service rejects the credential
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized. Check your API key.";

/// Error recorded when every attempt was retried away
pub const ALL_ATTEMPTS_FAILED: &str = "All attempts failed";

/// The Extractor turns one record's free text into attributes
pub struct Extractor<C>
where
    C: CompletionService,
{
    service: C,
    config: ExtractorConfig,
}

impl<C> Extractor<C>
where
    C: CompletionService,
{
    /// Create a new Extractor
    pub fn new(service: C, config: ExtractorConfig) -> Self {
        Self { service, config }
    }

    /// The configuration in use
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Build the prompt for a record
    ///
    /// Missing description or care fields are treated as empty text.
    pub fn build_prompt(&self, record: &Record) -> String {
        PromptBuilder::new(
            record.text(&self.config.description_field),
            record.text(&self.config.care_field),
        )
        .with_placeholder(self.config.placeholder.clone())
        .with_escaped_delimiters(self.config.escape_delimiters)
        .build()
    }

    /// Extract attributes and return the augmented record
    pub async fn extract(&self, record: &Record) -> Record {
        let result = self.extract_result(record).await;
        record.merged(&result)
    }

    /// Extract attributes for a record
    ///
    /// Never fails: every failure mode ends in a raw-output or error result.
    pub async fn extract_result(&self, record: &Record) -> ExtractionResult {
        let prompt = self.build_prompt(record);
        debug!("Prompt length: {} chars", prompt.len());

        let request =
            CompletionRequest::single_prompt(&self.config.model, prompt, self.config.temperature);
        let max_attempts = self.config.max_attempts;

        for attempt in 1..=max_attempts {
            let response = self.service.complete(&request).await;
            if let Err(e) = &response {
                warn!("Attempt {}/{} failed: {}", attempt, max_attempts, e);
            }

            match classify(response) {
                AttemptOutcome::Success(text) => {
                    debug!("Completion length: {} chars", text.len());
                    return parse_completion(&text, self.config.strip_code_fences);
                }
                AttemptOutcome::RateLimited => {
                    tokio::time::sleep(self.config.rate_limit_delay()).await;
                }
                AttemptOutcome::Unauthorized => {
                    return ExtractionResult::Error(UNAUTHORIZED_MESSAGE.to_string());
                }
                AttemptOutcome::OtherError(message) => {
                    if !self.config.retry_other_errors {
                        return ExtractionResult::Error(format!("API error: {}", message));
                    }
                    tokio::time::sleep(self.config.rate_limit_delay()).await;
                }
            }
        }

        ExtractionResult::Error(ALL_ATTEMPTS_FAILED.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use weft_llm::MockProvider;

    fn create_test_extractor(provider: &MockProvider) -> Extractor<MockProvider> {
        Extractor::new(provider.clone(), ExtractorConfig::default())
    }

    fn record() -> Record {
        Record::from_value(json!({
            "sku": "0713",
            "description": "Underwired lace bra with adjustable straps",
            "care_instructions": "Hand wash only"
        }))
        .unwrap()
    }

    #[test]
    fn test_build_prompt_reads_configured_fields() {
        let mut config = ExtractorConfig::default();
        config.description_field = "desc".into();
        config.care_field = "care".into();
        let extractor = Extractor::new(MockProvider::default(), config);

        let r = Record::from_value(json!({"desc": "Linen shirt", "care": "Iron hot"})).unwrap();
        let prompt = extractor.build_prompt(&r);
        assert!(prompt.contains("\"\"\"Linen shirt\"\"\""));
        assert!(prompt.contains("\"\"\"Iron hot\"\"\""));
    }

    #[tokio::test]
    async fn test_request_uses_model_and_zero_temperature() {
        let provider = MockProvider::new("{}");
        let extractor = create_test_extractor(&provider);

        extractor.extract_result(&record()).await;

        let requests = provider.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].model, "open-mistral-7b");
        assert_eq!(requests[0].temperature, 0.0);
        assert_eq!(requests[0].messages.len(), 1);
        assert_eq!(requests[0].messages[0].role, "user");
        assert!(requests[0].messages[0].content.contains("Hand wash only"));
    }

    #[tokio::test]
    async fn test_missing_fields_are_not_an_error() {
        let provider = MockProvider::new(r#"{"Product Type": "Not Available"}"#);
        let extractor = create_test_extractor(&provider);

        let empty = Record::new();
        let out = extractor.extract(&empty).await;

        assert_eq!(out.get("Product Type"), Some(&json!("Not Available")));
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rate_limit_then_success() {
        let provider = MockProvider::new(r#"{"Closures": "Hook and eye"}"#);
        provider.push_status(429, "Too Many Requests");
        let extractor = create_test_extractor(&provider);

        let start = tokio::time::Instant::now();
        let result = extractor.extract_result(&record()).await;

        assert!(result.is_success());
        assert_eq!(provider.call_count(), 2);
        assert_eq!(start.elapsed().as_secs(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_other_error_retried_when_enabled() {
        let provider = MockProvider::new(r#"{"Length": "Short"}"#);
        provider.push_status(503, "Service Unavailable");
        let mut config = ExtractorConfig::default();
        config.retry_other_errors = true;
        let extractor = Extractor::new(provider.clone(), config);

        let result = extractor.extract_result(&record()).await;

        assert!(result.is_success());
        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_other_error_exhausts_when_enabled() {
        let provider = MockProvider::failing(weft_llm::LlmError::Communication("reset".into()));
        let mut config = ExtractorConfig::default();
        config.retry_other_errors = true;
        let extractor = Extractor::new(provider.clone(), config);

        let result = extractor.extract_result(&record()).await;

        assert_eq!(result, ExtractionResult::Error(ALL_ATTEMPTS_FAILED.into()));
        assert_eq!(provider.call_count(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_max_attempts_is_configurable() {
        let provider = MockProvider::failing(weft_llm::LlmError::Api {
            status: 429,
            message: "Too Many Requests".into(),
        });
        let mut config = ExtractorConfig::default();
        config.max_attempts = 5;
        config.rate_limit_delay_secs = 1;
        let extractor = Extractor::new(provider.clone(), config);

        let start = tokio::time::Instant::now();
        let result = extractor.extract_result(&record()).await;

        assert_eq!(result, ExtractionResult::Error(ALL_ATTEMPTS_FAILED.into()));
        assert_eq!(provider.call_count(), 5);
        assert_eq!(start.elapsed().as_secs(), 5);
    }
}
