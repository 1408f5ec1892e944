//! Retry-governed invocation of the generation service.
//!
//! `ResilientInvoker` submits one prepared request to a provider and walks a
//! small state machine over attempts:
//!
//! - success -> return the response
//! - transient failure (provider overloaded) with attempts left -> sleep
//!   `2^n * base_delay` and resubmit the identical request
//! - transient failure on the last attempt -> `RetryExhausted`
//! - any other failure -> `Fatal`, no retry
//!
//! The sleep is `tokio::time::sleep`, so a waiting request never blocks other
//! requests on the runtime.

use std::time::Duration;

use tracing::{debug, error, info, warn};

use mentor_types::config::RetryPolicy;
use mentor_types::error::InvokeError;
use mentor_types::llm::{AttemptOutcome, CompletionRequest, CompletionResponse, InvocationAttempt};

use super::box_provider::BoxLlmProvider;

/// Per-attempt trace of one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationReport {
    pub attempts: Vec<InvocationAttempt>,
}

impl InvocationReport {
    fn record(&mut self, attempt_number: u32, outcome: AttemptOutcome, delay: Duration) {
        self.attempts.push(InvocationAttempt {
            attempt_number,
            outcome,
            delay_before_next_ms: duration_ms(delay),
        });
    }

    /// Number of provider calls made.
    pub fn attempt_count(&self) -> u32 {
        self.attempts.len() as u32
    }

    /// Sum of all backoff sleeps.
    pub fn total_delay(&self) -> Duration {
        Duration::from_millis(
            self.attempts
                .iter()
                .map(|a| a.delay_before_next_ms)
                .fold(0u64, u64::saturating_add),
        )
    }
}

/// Submits requests to a provider under a bounded exponential-backoff policy.
#[derive(Debug)]
pub struct ResilientInvoker {
    provider: BoxLlmProvider,
    policy: RetryPolicy,
}

impl ResilientInvoker {
    /// Create an invoker. A `max_retries` of zero is raised to one attempt.
    pub fn new(provider: BoxLlmProvider, policy: RetryPolicy) -> Self {
        let policy = if policy.max_retries == 0 {
            warn!("max_retries of 0 would never call the provider; using 1");
            policy.with_max_retries(1)
        } else {
            policy
        };
        Self { provider, policy }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Run the retry loop and return only the terminal outcome.
    pub async fn invoke(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, InvokeError> {
        self.invoke_with_report(request).await.0
    }

    /// Run the retry loop, also returning the per-attempt report.
    ///
    /// When the policy sets an overall timeout the whole loop, sleeps
    /// included, is bounded by it.
    pub async fn invoke_with_report(
        &self,
        request: &CompletionRequest,
    ) -> (Result<CompletionResponse, InvokeError>, InvocationReport) {
        let mut report = InvocationReport::default();

        let result = match self.policy.overall_timeout() {
            Some(limit) => {
                let bounded = tokio::time::timeout(limit, self.run(request, &mut report)).await;
                match bounded {
                    Ok(result) => result,
                    Err(_) => {
                        warn!(
                            provider = %self.provider.name(),
                            timeout_ms = duration_ms(limit),
                            attempts = report.attempt_count(),
                            "Overall invocation deadline exceeded"
                        );
                        Err(InvokeError::DeadlineExceeded {
                            timeout_ms: duration_ms(limit),
                        })
                    }
                }
            }
            None => self.run(request, &mut report).await,
        };

        (result, report)
    }

    async fn run(
        &self,
        request: &CompletionRequest,
        report: &mut InvocationReport,
    ) -> Result<CompletionResponse, InvokeError> {
        let provider = self.provider.name();
        let max_retries = self.policy.max_retries;
        let mut attempt: u32 = 1;

        loop {
            debug!(provider = %provider, attempt, max_retries, "Calling generation service");

            match self.provider.complete(request).await {
                Ok(response) => {
                    report.record(attempt, AttemptOutcome::Success, Duration::ZERO);
                    if attempt > 1 {
                        info!(provider = %provider, attempt, "Generation succeeded after retry");
                    }
                    return Ok(response);
                }
                Err(err) if err.is_transient() && attempt < max_retries => {
                    let delay = self.policy.backoff(attempt);
                    report.record(attempt, AttemptOutcome::TransientFailure, delay);
                    warn!(
                        provider = %provider,
                        attempt,
                        max_retries,
                        delay_ms = duration_ms(delay),
                        error = %err,
                        "Provider overloaded, backing off"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) if err.is_transient() => {
                    report.record(attempt, AttemptOutcome::TransientFailure, Duration::ZERO);
                    error!(
                        provider = %provider,
                        attempts = attempt,
                        error = %err,
                        "Provider still overloaded, retries exhausted"
                    );
                    return Err(InvokeError::RetryExhausted {
                        attempts: attempt,
                        last: err,
                    });
                }
                Err(err) => {
                    report.record(attempt, AttemptOutcome::FatalFailure, Duration::ZERO);
                    error!(
                        provider = %provider,
                        attempt,
                        error = %err,
                        "Non-transient error, returning immediately"
                    );
                    return Err(InvokeError::Fatal(err));
                }
            }
        }
    }
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
