//! Maps Gemini HTTP failures onto [`LlmError`].
//!
//! This is the only place that knows Gemini's status codes and error
//! envelope. Everything upstream decides retry policy from the `LlmError`
//! variant alone.

use mentor_types::llm::LlmError;

use super::types::GeminiErrorEnvelope;

/// Classify a non-success `generateContent` response.
///
/// The message comes from the JSON error envelope. A body that is not an
/// envelope is never copied into the error; only the status is kept.
///
/// - 503 / `UNAVAILABLE` -> [`LlmError::Overloaded`] (the only transient case)
/// - 401, 403, `UNAUTHENTICATED`, `PERMISSION_DENIED`, or an `API_KEY_INVALID`
///   detail -> [`LlmError::AuthenticationFailed`]
/// - 429 / `RESOURCE_EXHAUSTED` -> [`LlmError::RateLimited`]
/// - 400 / `INVALID_ARGUMENT` / `FAILED_PRECONDITION` -> [`LlmError::InvalidRequest`]
/// - anything else -> [`LlmError::Provider`] carrying the status
pub fn classify_status(status: u16, retry_after_ms: Option<u64>, body: &str) -> LlmError {
    let envelope = serde_json::from_str::<GeminiErrorEnvelope>(body).ok();
    let api_status = envelope
        .as_ref()
        .and_then(|e| e.error.status.as_deref())
        .unwrap_or_default();
    let key_invalid = envelope.as_ref().is_some_and(|e| {
        e.error
            .details
            .iter()
            .any(|d| d.reason.as_deref() == Some("API_KEY_INVALID"))
    });
    let message = envelope
        .as_ref()
        .map(|e| e.error.message.trim())
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {status}"));

    if status == 503 || api_status == "UNAVAILABLE" {
        return LlmError::Overloaded(message);
    }

    if key_invalid
        || matches!(status, 401 | 403)
        || matches!(api_status, "UNAUTHENTICATED" | "PERMISSION_DENIED")
    {
        return LlmError::AuthenticationFailed { status, message };
    }

    if status == 429 || api_status == "RESOURCE_EXHAUSTED" {
        return LlmError::RateLimited { retry_after_ms };
    }

    if status == 400 || matches!(api_status, "INVALID_ARGUMENT" | "FAILED_PRECONDITION") {
        return LlmError::InvalidRequest(message);
    }

    LlmError::Provider {
        status: Some(status),
        message,
    }
}

/// Classify a transport failure (no HTTP response was received).
pub fn classify_transport(err: &reqwest::Error) -> LlmError {
    let message = if err.is_timeout() {
        "request to generation service timed out".to_string()
    } else if err.is_connect() {
        "could not connect to generation service".to_string()
    } else {
        format!("HTTP request failed: {err}")
    };
    LlmError::Provider {
        status: None,
        message,
    }
}
