//! Gateway configuration types.
//!
//! `GatewayConfig` represents the top-level `mentor.toml`. Every field has a
//! default, so an absent file or an empty section yields a runnable gateway.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default acknowledgment turn that follows the persona prompt.
pub const DEFAULT_ACKNOWLEDGMENT: &str =
    "Entendido. Sou o MentorGPT e seguirei rigorosamente o protocolo. Estou pronto para a solicitação.";

/// Top-level configuration for the gateway.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub server: ServerConfig,
    pub llm: LlmSettings,
    pub retry: RetryPolicy,
    pub chat: ChatConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory the frontend assets are served from.
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            static_dir: ".".to_string(),
        }
    }
}

/// Generation-service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    pub model: String,
    pub base_url: String,
    pub max_output_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Per-call HTTP timeout.
    pub request_timeout_secs: u64,
    /// JSON file holding `{ "api_key": "..." }`, used when the env var is unset.
    pub key_file: String,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            model: "gemini-1.5-flash-latest".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            max_output_tokens: 4096,
            temperature: None,
            request_timeout_secs: 120,
            key_file: "gemini-key.json".to_string(),
        }
    }
}

/// Bounded exponential-backoff policy for the invoker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Total attempts, the first one included.
    pub max_retries: u32,
    /// Delay unit; attempt `n` waits `2^n * base_delay_ms`.
    pub base_delay_ms: u64,
    /// Cap on the whole retry loop. `None` leaves it unbounded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_timeout_secs: Option<u64>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay_ms: 1000,
            overall_timeout_secs: None,
        }
    }
}

impl RetryPolicy {
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Delay slept after failed attempt `attempt` (1-based).
    ///
    /// Grows without bound; saturates at `u64::MAX` milliseconds.
    pub fn backoff(&self, attempt: u32) -> Duration {
        let millis = 2u64
            .checked_pow(attempt)
            .and_then(|factor| factor.checked_mul(self.base_delay_ms))
            .unwrap_or(u64::MAX);
        Duration::from_millis(millis)
    }

    pub fn overall_timeout(&self) -> Option<Duration> {
        self.overall_timeout_secs.map(Duration::from_secs)
    }
}

/// Conversation priming settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Fixed assistant turn inserted after the persona prompt.
    pub acknowledgment: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            acknowledgment: DEFAULT_ACKNOWLEDGMENT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_config_default_values() {
        let config = GatewayConfig::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.llm.model, "gemini-1.5-flash-latest");
        assert_eq!(config.llm.max_output_tokens, 4096);
        assert_eq!(config.retry.max_retries, 3);
        assert!(config.retry.overall_timeout_secs.is_none());
        assert_eq!(config.chat.acknowledgment, DEFAULT_ACKNOWLEDGMENT);
    }

    #[test]
    fn test_gateway_config_deserialize_empty() {
        let config: GatewayConfig = toml::from_str("").unwrap();
        assert_eq!(config.retry, RetryPolicy::default());
        assert_eq!(config.llm.key_file, "gemini-key.json");
    }

    #[test]
    fn test_gateway_config_deserialize_partial_sections() {
        let toml_str = r#"
[server]
port = 8080

[retry]
max_retries = 5
overall_timeout_secs = 30

[chat]
acknowledgment = "Understood."
"#;
        let config: GatewayConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.retry.max_retries, 5);
        assert_eq!(config.retry.base_delay_ms, 1000);
        assert_eq!(config.retry.overall_timeout(), Some(Duration::from_secs(30)));
        assert_eq!(config.chat.acknowledgment, "Understood.");
    }

    #[test]
    fn test_backoff_doubles_per_attempt() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.backoff(1), Duration::from_millis(2000));
        assert_eq!(policy.backoff(2), Duration::from_millis(4000));
        assert_eq!(policy.backoff(3), Duration::from_millis(8000));
    }

    #[test]
    fn test_backoff_saturates() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.backoff(80), Duration::from_millis(u64::MAX));
    }
}
