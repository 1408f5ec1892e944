//! Application state wiring the gateway's services together.
//!
//! Built once at startup. Handlers receive a clone per request; the chat
//! service behind the `Arc` is read-only, so concurrent requests share it
//! without locking.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use mentor_core::chat::context::ContextBuilder;
use mentor_core::chat::service::{ChatService, GenerationSettings};
use mentor_core::llm::retry::ResilientInvoker;
use mentor_infra::llm::create_provider;
use mentor_infra::secret::resolve_api_key;
use mentor_types::config::GatewayConfig;

/// Shared application state used by the REST handlers.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ChatService>,
}

impl AppState {
    pub fn new(chat_service: ChatService) -> Self {
        Self {
            chat_service: Arc::new(chat_service),
        }
    }

    /// Resolve the API key, construct the provider, and wire the chat service.
    ///
    /// Fails before anything is bound when no usable key is available.
    pub async fn init(config: &GatewayConfig) -> anyhow::Result<Self> {
        let api_key = resolve_api_key(Path::new(&config.llm.key_file))
            .await
            .context("no Gemini API key available")?;

        let provider = create_provider(&config.llm, api_key)?;
        let invoker = ResilientInvoker::new(provider, config.retry.clone());
        let service = ChatService::new(
            ContextBuilder::from_config(&config.chat),
            invoker,
            GenerationSettings::from(&config.llm),
        );

        Ok(Self::new(service))
    }
}
