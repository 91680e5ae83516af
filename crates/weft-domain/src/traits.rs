//! Trait definitions for external interactions
//!
//! These traits define the boundary between the extraction logic and the
//! completion service. Implementations live in `weft-llm`.

use serde::Serialize;

/// A single chat message sent to the completion service
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    /// Message role ("user" for every message Weft sends)
    pub role: String,

    /// Message text
    pub content: String,
}

impl ChatMessage {
    /// Create a user-role message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// A completion request: one model, one user message, fixed temperature
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    /// Model identifier (e.g. "open-mistral-7b")
    pub model: String,

    /// Conversation to complete
    pub messages: Vec<ChatMessage>,

    /// Sampling temperature; 0 requests deterministic decoding
    pub temperature: f32,
}

impl CompletionRequest {
    /// Build a request carrying a single user-role prompt
    ///
    /// # Examples
    ///
    /// ```
    /// use weft_domain::CompletionRequest;
    ///
    /// let request = CompletionRequest::single_prompt("open-mistral-7b", "Hello", 0.0);
    /// assert_eq!(request.messages.len(), 1);
    /// assert_eq!(request.messages[0].role, "user");
    /// ```
    pub fn single_prompt(model: impl Into<String>, prompt: impl Into<String>, temperature: f32) -> Self {
        Self {
            model: model.into(),
            messages: vec![ChatMessage::user(prompt)],
            temperature,
        }
    }
}

/// Trait for completion service operations
///
/// Implemented by the infrastructure layer (weft-llm). The only contract is:
/// accept a request, return text or fail with an error whose message can be
/// inspected for status markers.
#[allow(async_fn_in_trait)]
pub trait CompletionService {
    /// Error type for completion calls
    type Error: std::fmt::Display;

    /// Complete the request, returning the response text
    async fn complete(&self, request: &CompletionRequest) -> Result<String, Self::Error>;
}
