//! Invocation event decoding.
//!
//! The handler is invoked either directly, with the request fields at the
//! top level of the event, or through an API Gateway proxy integration, with
//! the fields JSON-encoded in `body` (base64-encoded on top when
//! `isBase64Encoded` is set). Some callers pass `body` already decoded.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventError {
    #[error("request body is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("request body is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("request body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Extract the request payload from an invocation event.
///
/// A missing, `null` or empty `body` means the event itself is the payload.
/// Required fields are checked later, so an event with neither a body nor
/// top-level fields fails as a missing field.
pub fn extract_payload(mut event: Value) -> Result<Value, EventError> {
    let base64_encoded = event
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    let body = event.as_object_mut().and_then(|obj| obj.remove("body"));

    match body {
        Some(Value::String(text)) if !text.is_empty() => decode_body(&text, base64_encoded),
        Some(Value::String(_)) | Some(Value::Null) | None => Ok(event),
        Some(decoded) => Ok(decoded),
    }
}

fn decode_body(text: &str, base64_encoded: bool) -> Result<Value, EventError> {
    if base64_encoded {
        let bytes = STANDARD.decode(text.trim())?;
        let text = String::from_utf8(bytes)?;
        Ok(serde_json::from_str(&text)?)
    } else {
        Ok(serde_json::from_str(text)?)
    }
}
