//! LLM request/response types for the gateway.
//!
//! These types model the provider-agnostic data shapes for a single
//! generation call, the per-attempt bookkeeping of the retry loop, and the
//! error taxonomy raised by provider adapters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role of a message in an LLM conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for MessageRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(MessageRole::User),
            "assistant" => Ok(MessageRole::Assistant),
            other => Err(format!("invalid message role: '{other}'")),
        }
    }
}

/// A single message in an LLM conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

/// Request to an LLM provider for a completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

/// Response from an LLM provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub content: String,
    pub model: String,
    #[serde(default)]
    pub usage: Usage,
}

/// Token usage for a completion request/response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// Errors from LLM provider operations.
///
/// Provider adapters map their raw transport and API failures onto these
/// variants; nothing outside the adapter inspects provider-specific payloads.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LlmError {
    #[error("provider error: {message}")]
    Provider {
        status: Option<u16>,
        message: String,
    },

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("provider overloaded: {0}")]
    Overloaded(String),

    #[error("authentication failed: {message}")]
    AuthenticationFailed { status: u16, message: String },

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("provider returned no text: {0}")]
    EmptyResponse(String),
}

impl LlmError {
    /// Whether the failure is temporary and the same request may be resubmitted.
    ///
    /// Only an overloaded/unavailable provider qualifies. Every other failure,
    /// rate limiting included, is fatal for the current request.
    pub fn is_transient(&self) -> bool {
        matches!(self, LlmError::Overloaded(_))
    }

    /// HTTP status that best mirrors this failure for the gateway's caller.
    pub fn status_code(&self) -> u16 {
        match self {
            LlmError::Provider { status, .. } => status.unwrap_or(500),
            LlmError::Deserialization(_) | LlmError::EmptyResponse(_) => 500,
            LlmError::RateLimited { .. } => 429,
            LlmError::Overloaded(_) => 503,
            LlmError::AuthenticationFailed { status, .. } => *status,
            LlmError::InvalidRequest(_) => 400,
        }
    }
}

/// Classified outcome of a single provider call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptOutcome {
    Success,
    TransientFailure,
    FatalFailure,
}

impl fmt::Display for AttemptOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttemptOutcome::Success => write!(f, "success"),
            AttemptOutcome::TransientFailure => write!(f, "transient_failure"),
            AttemptOutcome::FatalFailure => write!(f, "fatal_failure"),
        }
    }
}

/// Record of one submission inside the retry loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationAttempt {
    /// 1-based attempt number.
    pub attempt_number: u32,
    pub outcome: AttemptOutcome,
    /// Delay slept before the next attempt; 0 when no further attempt follows.
    pub delay_before_next_ms: u64,
}
