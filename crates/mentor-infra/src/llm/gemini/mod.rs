//! Google Gemini provider.

pub mod classify;
pub mod client;
pub mod types;

pub use client::GeminiProvider;
