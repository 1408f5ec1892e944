//! Chat pipeline: build the persona-primed context for one request and run
//! it through the resilient invoker.

pub mod context;
pub mod service;
