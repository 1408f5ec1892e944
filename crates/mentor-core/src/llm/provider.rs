//! LlmProvider trait definition.
//!
//! This is the single seam between the gateway and the generation service.
//! Uses RPITIT for `complete`; `BoxLlmProvider` adds dynamic dispatch.

use mentor_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for generation-service backends (Gemini today, mocks in tests).
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
/// Implementations live in mentor-infra (e.g., `GeminiProvider`).
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "gemini").
    fn name(&self) -> &str;

    /// Generate a reply for the ordered messages in `request`.
    ///
    /// Errors must already be classified into [`LlmError`]; callers decide
    /// retry policy from the variant alone.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
