//! HTTP layer: the chat endpoint, health check, and static frontend.

pub mod error;
pub mod handlers;
pub mod router;
