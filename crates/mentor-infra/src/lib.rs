//! Infrastructure layer for the MentorGPT gateway.
//!
//! Contains the implementations behind the ports defined in `mentor-core`:
//! the Gemini `LlmProvider`, the `mentor.toml` loader, and startup
//! credential resolution.

pub mod config;
pub mod llm;
pub mod secret;
