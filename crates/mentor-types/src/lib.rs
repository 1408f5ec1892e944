//! Shared domain types for the MentorGPT gateway.
//!
//! This crate contains the types passed between the gateway layers: chat
//! requests and conversation turns, provider-agnostic LLM request/response
//! shapes, configuration, and the error taxonomy.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
