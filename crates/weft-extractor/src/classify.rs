//! Classify a completion call's result into an attempt outcome

use std::fmt::Display;
use weft_domain::AttemptOutcome;

/// Substring marking a rate-limit failure
pub const RATE_LIMIT_MARKER: &str = "429";

/// Substring marking a rejected credential
pub const UNAUTHORIZED_MARKER: &str = "401";

/// Classify the result of one completion call
pub fn classify<E: Display>(result: Result<String, E>) -> AttemptOutcome {
    match result {
        Ok(text) => AttemptOutcome::Success(text),
        Err(e) => classify_error_message(&e.to_string()),
    }
}

/// Classify a failure by inspecting its message
///
/// The rate-limit marker is checked first, so a message carrying both
/// markers counts as rate limited.
pub fn classify_error_message(message: &str) -> AttemptOutcome {
    if message.contains(RATE_LIMIT_MARKER) {
        AttemptOutcome::RateLimited
    } else if message.contains(UNAUTHORIZED_MARKER) {
        AttemptOutcome::Unauthorized
    } else {
        AttemptOutcome::OtherError(message.to_string())
    }
}
