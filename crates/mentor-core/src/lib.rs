//! Business logic for the MentorGPT gateway.
//!
//! This crate defines the `LlmProvider` port that the infrastructure layer
//! implements, the conversation context builder, and the retry-governed
//! invoker. It depends only on `mentor-types` -- never on `mentor-infra`
//! or any HTTP crate.

pub mod chat;
pub mod llm;
