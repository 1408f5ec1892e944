//! Scripted provider used by the core unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use mentor_types::llm::{CompletionRequest, CompletionResponse, LlmError, Usage};

use super::provider::LlmProvider;

/// One observed call: when it happened (tokio clock) and what was sent.
#[derive(Debug, Clone)]
pub(crate) struct RecordedCall {
    pub at: tokio::time::Instant,
    pub request: CompletionRequest,
}

pub(crate) type CallLog = Arc<Mutex<Vec<RecordedCall>>>;

/// Returns the scripted outcomes in order, repeating the last one forever.
pub(crate) struct ScriptedProvider {
    script: Mutex<VecDeque<Result<String, LlmError>>>,
    last: Result<String, LlmError>,
    calls: CallLog,
}

impl ScriptedProvider {
    pub(crate) fn new(outcomes: Vec<Result<&str, LlmError>>) -> (Self, CallLog) {
        let script: VecDeque<Result<String, LlmError>> = outcomes
            .into_iter()
            .map(|o| o.map(str::to_string))
            .collect();
        let last = script
            .back()
            .cloned()
            .unwrap_or_else(|| Ok(String::new()));
        let calls: CallLog = Arc::new(Mutex::new(Vec::new()));
        let provider = Self {
            script: Mutex::new(script),
            last,
            calls: Arc::clone(&calls),
        };
        (provider, calls)
    }
}

impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        self.calls.lock().unwrap().push(RecordedCall {
            at: tokio::time::Instant::now(),
            request: request.clone(),
        });
        let next = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.last.clone());
        next.map(|content| CompletionResponse {
            content,
            model: request.model.clone(),
            usage: Usage::default(),
        })
    }
}

pub(crate) fn overloaded() -> LlmError {
    LlmError::Overloaded("The model is overloaded. Please try again later.".to_string())
}
