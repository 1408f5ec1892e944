//! Observability for the MentorGPT gateway.

pub mod tracing_setup;
