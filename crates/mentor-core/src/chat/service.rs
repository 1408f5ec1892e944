//! Chat service: one persona-primed generation per request.
//!
//! ChatService owns the context builder and the resilient invoker. It holds
//! no per-conversation state; every call builds its own context, so the
//! service is shared read-only across concurrent requests.

use tracing::{debug, instrument};

use mentor_types::config::LlmSettings;
use mentor_types::error::ChatError;
use mentor_types::llm::CompletionRequest;

use crate::chat::context::ContextBuilder;
use crate::llm::retry::ResilientInvoker;

/// Generation parameters applied to every request.
#[derive(Debug, Clone)]
pub struct GenerationSettings {
    pub model: String,
    pub max_output_tokens: u32,
    pub temperature: Option<f64>,
}

impl From<&LlmSettings> for GenerationSettings {
    fn from(settings: &LlmSettings) -> Self {
        Self {
            model: settings.model.clone(),
            max_output_tokens: settings.max_output_tokens,
            temperature: settings.temperature,
        }
    }
}

/// Builds the conversation context and runs it through the invoker.
#[derive(Debug)]
pub struct ChatService {
    builder: ContextBuilder,
    invoker: ResilientInvoker,
    generation: GenerationSettings,
}

impl ChatService {
    pub fn new(
        builder: ContextBuilder,
        invoker: ResilientInvoker,
        generation: GenerationSettings,
    ) -> Self {
        Self {
            builder,
            invoker,
            generation,
        }
    }

    pub fn invoker(&self) -> &ResilientInvoker {
        &self.invoker
    }

    /// Build the provider request for one `(persona, message)` pair.
    pub fn completion_request(&self, persona_prompt: &str, user_message: &str) -> CompletionRequest {
        let context = self.builder.build(persona_prompt, user_message);
        CompletionRequest {
            model: self.generation.model.clone(),
            messages: context.to_messages(),
            max_tokens: self.generation.max_output_tokens,
            temperature: self.generation.temperature,
        }
    }

    /// Generate the persona's reply to `user_message`.
    ///
    /// Both inputs must already be validated as non-empty. The same request
    /// is resubmitted unchanged on every retry.
    #[instrument(skip_all, fields(provider = %self.invoker.provider_name(), model = %self.generation.model))]
    pub async fn reply(&self, persona_prompt: &str, user_message: &str) -> Result<String, ChatError> {
        let request = self.completion_request(persona_prompt, user_message);
        let response = self.invoker.invoke(&request).await?;

        debug!(
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            "Reply generated"
        );

        Ok(response.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::box_provider::BoxLlmProvider;
    use crate::llm::mock::{overloaded, ScriptedProvider};
    use mentor_types::config::{RetryPolicy, DEFAULT_ACKNOWLEDGMENT};
    use mentor_types::error::InvokeError;
    use mentor_types::llm::{LlmError, MessageRole};

    fn service(provider: ScriptedProvider) -> ChatService {
        ChatService::new(
            ContextBuilder::default(),
            ResilientInvoker::new(BoxLlmProvider::new(provider), RetryPolicy::default()),
            GenerationSettings::from(&LlmSettings::default()),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_returns_provider_text() {
        let (provider, calls) = ScriptedProvider::new(vec![Ok("hello")]);
        let service = service(provider);

        let reply = service.reply("be nice", "hi").await.unwrap();
        assert_eq!(reply, "hello");

        let calls = calls.lock().unwrap();
        let sent = &calls[0].request;
        assert_eq!(sent.model, "gemini-1.5-flash-latest");
        assert_eq!(sent.max_tokens, 4096);
        assert_eq!(sent.messages.len(), 3);
        assert_eq!(sent.messages[0].content, "be nice");
        assert_eq!(sent.messages[1].role, MessageRole::Assistant);
        assert_eq!(sent.messages[1].content, DEFAULT_ACKNOWLEDGMENT);
        assert_eq!(sent.messages[2].content, "hi");
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_surfaces_exhaustion() {
        let (provider, _calls) = ScriptedProvider::new(vec![Err(overloaded())]);
        let service = service(provider);

        let err = service.reply("be nice", "hi").await.unwrap_err();
        match err {
            ChatError::Invoke(InvokeError::RetryExhausted { attempts, .. }) => {
                assert_eq!(attempts, 3)
            }
            other => panic!("Expected RetryExhausted, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_surfaces_fatal() {
        let (provider, _calls) = ScriptedProvider::new(vec![Err(LlmError::InvalidRequest(
            "contents is not specified".to_string(),
        ))]);
        let service = service(provider);

        let err = service.reply("be nice", "hi").await.unwrap_err();
        assert!(matches!(err, ChatError::Invoke(InvokeError::Fatal(_))));
    }

    #[test]
    fn test_generation_settings_from_llm_settings() {
        let settings = LlmSettings {
            temperature: Some(0.4),
            max_output_tokens: 1024,
            ..LlmSettings::default()
        };
        let generation = GenerationSettings::from(&settings);
        assert_eq!(generation.max_output_tokens, 1024);
        assert_eq!(generation.temperature, Some(0.4));
    }
}
