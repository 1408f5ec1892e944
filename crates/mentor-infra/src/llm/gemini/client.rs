//! GeminiProvider -- concrete [`LlmProvider`] implementation for Google Gemini.
//!
//! Sends requests to `{base_url}/v1beta/models/{model}:generateContent`.
//! The API key is wrapped in [`secrecy::SecretString`] and only exposed when
//! building the request header.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use mentor_core::llm::provider::LlmProvider;
use mentor_types::config::LlmSettings;
use mentor_types::llm::{
    CompletionRequest, CompletionResponse, LlmError, MessageRole, Usage,
};

use super::classify::{classify_status, classify_transport};
use super::types::{GeminiContent, GeminiPart, GeminiRequest, GeminiResponse, GenerationConfig};

/// Google Gemini LLM provider.
///
/// Constructed once at startup and shared by every request.
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
}

impl GeminiProvider {
    const API_KEY_HEADER: &'static str = "x-goog-api-key";

    /// Create a provider from the configured settings.
    ///
    /// Fails only if the HTTP client cannot be built (e.g., TLS backend
    /// initialisation).
    pub fn new(api_key: SecretString, settings: &LlmSettings) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()
            .map_err(|e| LlmError::Provider {
                status: None,
                message: format!("failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            api_key,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
        })
    }

    /// The default model for this provider.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn url(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }

    /// Convert a generic [`CompletionRequest`] into a [`GeminiRequest`].
    fn to_gemini_request(request: &CompletionRequest) -> GeminiRequest {
        let contents = request
            .messages
            .iter()
            .map(|m| GeminiContent {
                role: match m.role {
                    MessageRole::User => "user".to_string(),
                    MessageRole::Assistant => "model".to_string(),
                },
                parts: vec![GeminiPart {
                    text: Some(m.content.clone()),
                }],
            })
            .collect();

        GeminiRequest {
            contents,
            generation_config: GenerationConfig {
                max_output_tokens: request.max_tokens,
                temperature: request.temperature,
            },
        }
    }

    /// Extract the reply text from a successful response.
    fn parse_response(response: GeminiResponse, model: &str) -> Result<CompletionResponse, LlmError> {
        let candidate = response.candidates.into_iter().next();

        let text = candidate
            .as_ref()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default();

        if text.is_empty() {
            let reason = response
                .prompt_feedback
                .and_then(|f| f.block_reason)
                .or_else(|| candidate.and_then(|c| c.finish_reason))
                .unwrap_or_else(|| "no candidates".to_string());
            return Err(LlmError::EmptyResponse(reason));
        }

        let usage = response
            .usage_metadata
            .map(|u| Usage {
                input_tokens: u.prompt_token_count,
                output_tokens: u.candidates_token_count,
            })
            .unwrap_or_default();

        Ok(CompletionResponse {
            content: text,
            model: response.model_version.unwrap_or_else(|| model.to_string()),
            usage,
        })
    }
}

// No Debug impl: the struct holds the API key.

impl LlmProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let model = if request.model.is_empty() {
            self.model.as_str()
        } else {
            request.model.as_str()
        };
        let body = Self::to_gemini_request(request);

        let response = self
            .client
            .post(self.url(model))
            .header(Self::API_KEY_HEADER, self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| classify_transport(&e))?;

        let status = response.status();
        if !status.is_success() {
            let retry_after_ms = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse::<u64>().ok())
                .map(|secs| secs.saturating_mul(1000));
            let error_body = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), body = %error_body, "Gemini returned an error");
            return Err(classify_status(status.as_u16(), retry_after_ms, &error_body));
        }

        let gemini_resp: GeminiResponse = response.json().await.map_err(|e| {
            LlmError::Deserialization(format!("failed to parse response: {e}"))
        })?;

        Self::parse_response(gemini_resp, model)
    }
}
