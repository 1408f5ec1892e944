//! LLM provider abstractions for the gateway.
//!
//! - `LlmProvider`: RPITIT trait for concrete provider implementations
//! - `BoxLlmProvider`: Object-safe wrapper for dynamic dispatch
//! - `ResilientInvoker`: Exponential-backoff retry loop around one provider

pub mod box_provider;
pub mod provider;
pub mod retry;

#[cfg(test)]
pub(crate) mod mock;
