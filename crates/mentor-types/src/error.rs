use thiserror::Error;

use crate::llm::LlmError;

/// Terminal failure of the retry-governed invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvokeError {
    /// A non-transient failure; retry was never attempted.
    #[error("{0}")]
    Fatal(LlmError),

    /// Every attempt failed transiently.
    #[error("gave up after {attempts} attempts: {last}")]
    RetryExhausted { attempts: u32, last: LlmError },

    /// The optional overall deadline expired before a terminal outcome.
    #[error("no reply within {timeout_ms}ms")]
    DeadlineExceeded { timeout_ms: u64 },
}

impl InvokeError {
    /// HTTP status mirrored back to the gateway's caller.
    pub fn status_code(&self) -> u16 {
        match self {
            InvokeError::Fatal(err) => err.status_code(),
            InvokeError::RetryExhausted { last, .. } => last.status_code(),
            InvokeError::DeadlineExceeded { .. } => 504,
        }
    }

    /// Human-readable detail for the caller. Carries the last provider error.
    pub fn details(&self) -> String {
        match self {
            InvokeError::Fatal(err) => err.to_string(),
            InvokeError::RetryExhausted { last, .. } => last.to_string(),
            InvokeError::DeadlineExceeded { .. } => self.to_string(),
        }
    }
}

/// Errors surfaced by the chat service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Invoke(#[from] InvokeError),
}

/// Errors loading the gateway configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    Parse { path: String, message: String },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Errors resolving the generation-service credential at startup.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("credential not found: set {env_var} or create '{path}'")]
    NotFound { env_var: String, path: String },

    #[error("failed to read key file '{path}': {message}")]
    Unreadable { path: String, message: String },

    #[error("key file '{path}' is malformed: {message}")]
    Malformed { path: String, message: String },

    #[error("credential from {source_name} is empty")]
    Empty { source_name: String },
}
