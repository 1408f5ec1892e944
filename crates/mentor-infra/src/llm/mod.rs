//! LLM provider implementations.
//!
//! Contains the Google Gemini implementation of the [`LlmProvider`] trait
//! defined in `mentor-core`, and a provider factory ([`create_provider`])
//! that builds it from the `[llm]` settings.
//!
//! [`LlmProvider`]: mentor_core::llm::provider::LlmProvider

pub mod gemini;

use secrecy::SecretString;

use mentor_core::llm::box_provider::BoxLlmProvider;
use mentor_types::config::LlmSettings;
use mentor_types::llm::LlmError;

use self::gemini::GeminiProvider;

/// Create a [`BoxLlmProvider`] from the configured settings and a resolved key.
///
/// # Errors
///
/// Returns [`LlmError::Provider`] if the HTTP client cannot be constructed.
pub fn create_provider(settings: &LlmSettings, api_key: SecretString) -> Result<BoxLlmProvider, LlmError> {
    let provider = GeminiProvider::new(api_key, settings)?;
    tracing::info!(
        provider = "gemini",
        model = %provider.model(),
        base_url = %settings.base_url,
        "LLM provider ready"
    );
    Ok(BoxLlmProvider::new(provider))
}
