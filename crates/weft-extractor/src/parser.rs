//! Parse completion text into an extraction result

use serde_json::Value;
use tracing::debug;
use weft_domain::ExtractionResult;

/// Parse the model's answer
///
/// The text is stripped of surrounding whitespace. A JSON object becomes
/// [`ExtractionResult::Attributes`]; anything else (invalid JSON, or valid JSON
/// that is not an object) becomes [`ExtractionResult::RawOutput`] holding the
/// stripped text. With `strip_code_fences`, a markdown fence around the JSON is
/// removed before parsing; the raw fallback still keeps the full stripped text.
pub fn parse_completion(text: &str, strip_code_fences: bool) -> ExtractionResult {
    let trimmed = text.trim();

    let candidate = if strip_code_fences {
        unwrap_code_fence(trimmed)
    } else {
        trimmed
    };

    match serde_json::from_str::<Value>(candidate) {
        Ok(Value::Object(attributes)) => ExtractionResult::Attributes(attributes),
        Ok(other) => {
            debug!("Completion is JSON but not an object: {}", json_kind(&other));
            ExtractionResult::RawOutput(trimmed.to_string())
        }
        Err(e) => {
            debug!("Completion is not valid JSON: {}", e);
            ExtractionResult::RawOutput(trimmed.to_string())
        }
    }
}

/// Remove a surrounding ```json ... ``` or ``` ... ``` fence, if present
fn unwrap_code_fence(text: &str) -> &str {
    if !text.starts_with("```") {
        return text;
    }

    // Skip the opening fence line (``` or ```json)
    let Some(body_start) = text.find('\n') else {
        return text;
    };
    let body = &text[body_start + 1..];

    body.trim_end()
        .strip_suffix("```")
        .map(str::trim)
        .unwrap_or(text)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
