//! Weft Completion Provider Layer
//!
//! Implementations of the `CompletionService` trait from `weft-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Scripted provider for testing, no network calls
//! - `MistralProvider`: Mistral chat completions API
//!
//! # Examples
//!
//! ```
//! use weft_llm::MockProvider;
//! use weft_domain::{CompletionRequest, CompletionService};
//!
//! # async fn example() {
//! let provider = MockProvider::new(r#"{"Product Type": "Dress"}"#);
//! let request = CompletionRequest::single_prompt("open-mistral-7b", "prompt", 0.0);
//! let text = provider.complete(&request).await.unwrap();
//! assert_eq!(text, r#"{"Product Type": "Dress"}"#);
//! # }
//! ```

#![warn(missing_docs)]

pub mod mistral;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use weft_domain::{CompletionRequest, CompletionService};

pub use mistral::MistralProvider;

/// Errors that can occur during completion calls
///
/// The rendered message of every variant is what the extraction loop inspects
/// for status markers, so HTTP failures always carry their numeric status.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LlmError {
    /// Network or transport failure before a response was received
    #[error("Communication error: {0}")]
    Communication(String),

    /// The service answered with a non-success HTTP status
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error body returned by the service
        message: String,
    },

    /// The service answered, but the body was not a usable completion
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Provider could not be set up
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Mock completion provider for deterministic testing
///
/// Responses queued with [`MockProvider::push_response`] and
/// [`MockProvider::push_error`] are returned first, in order; once the queue
/// is empty every call gets the default response. Clones share their queue,
/// call count and request log.
///
/// # Examples
///
/// ```
/// use weft_llm::{LlmError, MockProvider};
/// use weft_domain::{CompletionRequest, CompletionService};
///
/// # async fn example() {
/// let provider = MockProvider::new("fallback");
/// provider.push_status(429, "Too Many Requests");
/// provider.push_response("first answer");
///
/// let request = CompletionRequest::single_prompt("m", "p", 0.0);
/// assert!(provider.complete(&request).await.is_err());
/// assert_eq!(provider.complete(&request).await.unwrap(), "first answer");
/// assert_eq!(provider.complete(&request).await.unwrap(), "fallback");
/// assert_eq!(provider.call_count(), 3);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: Result<String, LlmError>,
    queue: Arc<Mutex<VecDeque<Result<String, LlmError>>>>,
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all calls
    pub fn new(response: impl Into<String>) -> Self {
        Self::with_default(Ok(response.into()))
    }

    /// Create a MockProvider that fails every unscripted call with `error`
    pub fn failing(error: LlmError) -> Self {
        Self::with_default(Err(error))
    }

    fn with_default(default_response: Result<String, LlmError>) -> Self {
        Self {
            default_response,
            queue: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a successful response
    pub fn push_response(&self, response: impl Into<String>) {
        self.queue.lock().unwrap().push_back(Ok(response.into()));
    }

    /// Queue a failure
    pub fn push_error(&self, error: LlmError) {
        self.queue.lock().unwrap().push_back(Err(error));
    }

    /// Queue an HTTP status failure
    pub fn push_status(&self, status: u16, message: impl Into<String>) {
        self.push_error(LlmError::Api {
            status,
            message: message.into(),
        });
    }

    /// Get the number of times complete was called
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Requests received so far, oldest first
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Forget recorded requests
    pub fn reset_call_count(&self) {
        self.requests.lock().unwrap().clear();
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl CompletionService for MockProvider {
    type Error = LlmError;

    async fn complete(&self, request: &CompletionRequest) -> Result<String, Self::Error> {
        self.requests.lock().unwrap().push(request.clone());

        let scripted = self.queue.lock().unwrap().pop_front();
        scripted.unwrap_or_else(|| self.default_response.clone())
    }
}
