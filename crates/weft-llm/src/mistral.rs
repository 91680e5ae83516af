//! Mistral Provider Implementation
//!
//! Calls Mistral's chat completions API (`POST /v1/chat/completions`).
//!
//! # Features
//!
//! - Async HTTP communication with bearer-token auth
//! - Configurable endpoint and request timeout
//! - Non-success statuses surface as [`LlmError::Api`] with the numeric status
//!
//! Retrying is left to the caller; a single `complete` call makes exactly one
//! HTTP request.
//!
//! # Examples
//!
//! ```no_run
//! use weft_llm::MistralProvider;
//!
//! let provider = MistralProvider::new("https://api.mistral.ai", "my-api-key").unwrap();
//! ```

use crate::LlmError;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;
use weft_domain::{CompletionRequest, CompletionService};

/// Default Mistral API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.mistral.ai";

/// Default timeout for completion requests (120 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Mistral chat completions provider
pub struct MistralProvider {
    endpoint: String,
    api_key: String,
    client: reqwest::Client,
}

/// Response from the chat completions API
#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

impl MistralProvider {
    /// Create a new Mistral provider with the default timeout
    ///
    /// # Parameters
    ///
    /// - `endpoint`: API base URL without the `/v1/...` path
    /// - `api_key`: Bearer credential
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Result<Self, LlmError> {
        Self::with_timeout(endpoint, api_key, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a new Mistral provider with an explicit request timeout
    pub fn with_timeout(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            client,
        })
    }

    /// Endpoint the provider posts to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one chat completion request
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The request cannot be sent or times out
    /// - The API answers with a non-success status
    /// - The body has no choices or no message content
    pub async fn chat(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        let url = format!("{}/v1/chat/completions", self.endpoint);

        debug!(model = %request.model, "sending chat completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        body.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| LlmError::InvalidResponse("Response contained no message content".to_string()))
    }
}

impl CompletionService for MistralProvider {
    type Error = LlmError;

    async fn complete(&self, request: &CompletionRequest) -> Result<String, Self::Error> {
        self.chat(request).await
    }
}
