//! Gateway configuration loader.
//!
//! Reads `mentor.toml` and deserializes it into [`GatewayConfig`]. A missing
//! file yields the defaults; a file that exists but cannot be read or parsed
//! is a startup error, since silently replacing a bad retry policy with the
//! default would hide the mistake.

use std::path::Path;

use mentor_types::config::GatewayConfig;
use mentor_types::error::ConfigError;

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "mentor.toml";

/// Load gateway configuration from `path`.
pub async fn load_gateway_config(path: &Path) -> Result<GatewayConfig, ConfigError> {
    let path_str = path.display().to_string();

    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path_str, "No config file, using defaults");
            return Ok(GatewayConfig::default());
        }
        Err(source) => return Err(ConfigError::Read { path: path_str, source }),
    };

    let config: GatewayConfig = toml::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path_str.clone(),
        message: err.to_string(),
    })?;

    validate(&config)?;
    tracing::debug!(path = %path_str, "Loaded gateway configuration");
    Ok(config)
}

fn validate(config: &GatewayConfig) -> Result<(), ConfigError> {
    if config.llm.model.trim().is_empty() {
        return Err(ConfigError::Invalid("llm.model must not be empty".to_string()));
    }
    if config.llm.base_url.trim().is_empty() {
        return Err(ConfigError::Invalid("llm.base_url must not be empty".to_string()));
    }
    if config.llm.max_output_tokens == 0 {
        return Err(ConfigError::Invalid(
            "llm.max_output_tokens must be greater than 0".to_string(),
        ));
    }
    if config.retry.max_retries == 0 {
        return Err(ConfigError::Invalid(
            "retry.max_retries must be at least 1".to_string(),
        ));
    }
    if config.chat.acknowledgment.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "chat.acknowledgment must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_gateway_config(&tmp.path().join(DEFAULT_CONFIG_FILE))
            .await
            .unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.retry.max_retries, 3);
    }

    #[tokio::test]
    async fn load_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(DEFAULT_CONFIG_FILE);
        tokio::fs::write(
            &path,
            r#"
[llm]
model = "gemini-2.0-flash"
max_output_tokens = 2048

[retry]
max_retries = 4
"#,
        )
        .await
        .unwrap();

        let config = load_gateway_config(&path).await.unwrap();
        assert_eq!(config.llm.model, "gemini-2.0-flash");
        assert_eq!(config.llm.max_output_tokens, 2048);
        assert_eq!(config.retry.max_retries, 4);
        assert_eq!(config.server.port, 3000);
    }

    #[tokio::test]
    async fn load_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(DEFAULT_CONFIG_FILE);
        tokio::fs::write(&path, "this is not { valid toml !!!")
            .await
            .unwrap();

        let err = load_gateway_config(&path).await.unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[tokio::test]
    async fn load_zero_retries_is_invalid() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(DEFAULT_CONFIG_FILE);
        tokio::fs::write(&path, "[retry]\nmax_retries = 0\n")
            .await
            .unwrap();

        let err = load_gateway_config(&path).await.unwrap_err();
        assert!(err.to_string().contains("max_retries"));
    }
}
