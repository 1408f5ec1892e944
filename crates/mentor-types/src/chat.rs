//! Chat domain types: the inbound request, the conversation context built
//! from it, and the JSON bodies returned to the caller.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ChatError;
use crate::llm::{Message, MessageRole};

/// Human-readable explanation returned when `message` or `prompt` is missing.
pub const MISSING_FIELDS_MESSAGE: &str = "Erro: A mensagem e o prompt são obrigatórios.";

/// Inbound chat request: one user message plus the persona prompt.
///
/// Both fields are optional on the wire so a missing field surfaces as a
/// validation error rather than a deserialization rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub prompt: Option<String>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            prompt: Some(prompt.into()),
        }
    }

    /// Return `(prompt, message)` when both are present and non-blank.
    ///
    /// Whitespace-only values are rejected as missing. This is stricter than
    /// a plain presence check, which would forward `"   "` to the model.
    pub fn validated(&self) -> Result<(&str, &str), ChatError> {
        let prompt = non_blank(self.prompt.as_deref());
        let message = non_blank(self.message.as_deref());
        match (prompt, message) {
            (Some(prompt), Some(message)) => Ok((prompt, message)),
            _ => Err(ChatError::Validation(MISSING_FIELDS_MESSAGE.to_string())),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Role of a turn inside a [`ConversationContext`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnRole {
    /// The persona/system instruction.
    SystemPersona,
    /// The canned acknowledgment that the persona was adopted.
    AssistantAck,
    /// The end user's message.
    User,
}

impl TurnRole {
    /// Provider-facing role for this turn.
    ///
    /// The persona is sent as a user turn so providers without a real system
    /// role still see it first.
    pub fn message_role(self) -> MessageRole {
        match self {
            TurnRole::SystemPersona | TurnRole::User => MessageRole::User,
            TurnRole::AssistantAck => MessageRole::Assistant,
        }
    }
}

impl fmt::Display for TurnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnRole::SystemPersona => write!(f, "system_persona"),
            TurnRole::AssistantAck => write!(f, "assistant_ack"),
            TurnRole::User => write!(f, "user"),
        }
    }
}

/// A single turn of the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: TurnRole,
    pub text: String,
}

/// Ordered, immutable turn sequence built fresh for each request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationContext {
    turns: Vec<Turn>,
}

impl ConversationContext {
    pub fn new(turns: Vec<Turn>) -> Self {
        Self { turns }
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Map the turns onto provider-agnostic messages, preserving order.
    pub fn to_messages(&self) -> Vec<Message> {
        self.turns
            .iter()
            .map(|turn| Message {
                role: turn.role.message_role(),
                content: turn.text.clone(),
            })
            .collect()
    }
}

/// Success (and validation-failure) body: `{ "resposta": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub resposta: String,
}

/// Upstream failure body: `{ "error": ..., "details": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatFailure {
    pub error: String,
    pub details: String,
}

impl ChatFailure {
    pub fn upstream(status: u16, details: impl Into<String>) -> Self {
        Self {
            error: format!("Falha ao comunicar com a IA. (Status: {status})"),
            details: details.into(),
        }
    }
}
