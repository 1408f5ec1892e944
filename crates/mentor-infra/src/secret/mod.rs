//! Startup credential resolution for the generation service.
//!
//! Resolution order (first match wins):
//! 1. `GEMINI_API_KEY` environment variable
//! 2. JSON key file (`gemini-key.json` by default)
//!
//! The key is resolved once, before the listener binds, and kept in a
//! [`SecretString`] for the life of the process.

pub mod env;
pub mod key_file;

use std::path::Path;

use secrecy::SecretString;

use mentor_types::error::CredentialError;

/// Environment variable consulted before the key file.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Resolve the API key from the environment, then from `key_file`.
pub async fn resolve_api_key(key_file: &Path) -> Result<SecretString, CredentialError> {
    resolve_with(env::read_env_key(API_KEY_ENV), key_file).await
}

async fn resolve_with(
    env_value: Option<String>,
    key_file: &Path,
) -> Result<SecretString, CredentialError> {
    if let Some(value) = env_value {
        tracing::info!(source = API_KEY_ENV, "Loaded API key from environment");
        return Ok(SecretString::from(value));
    }

    match key_file::read_key_file(key_file).await? {
        Some(key) => {
            tracing::info!(source = %key_file.display(), "Loaded API key from key file");
            Ok(key)
        }
        None => Err(CredentialError::NotFound {
            env_var: API_KEY_ENV.to_string(),
            path: key_file.display().to_string(),
        }),
    }
}
