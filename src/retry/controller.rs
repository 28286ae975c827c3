//! Bounded retry loop with a fixed delay between attempts.

use std::future::Future;

use crate::sink::DiagnosticSink;
use crate::time::{Sleeper, TokioSleeper};
use crate::transport::TransportError;

use super::RetryPolicy;

/// Result of one executor call inside the retry loop.
#[derive(Debug)]
pub enum AttemptOutcome {
    /// The call returned a response body.
    Success(String),
    /// The call failed.
    Failure(TransportError),
}

impl From<Result<String, TransportError>> for AttemptOutcome {
    fn from(result: Result<String, TransportError>) -> Self {
        match result {
            Ok(body) => Self::Success(body),
            Err(e) => Self::Failure(e),
        }
    }
}

/// Terminal state of a retry loop.
#[derive(Debug)]
pub enum RetryOutcome {
    /// An attempt succeeded.
    Succeeded {
        /// Response body of the successful attempt
        body: String,
        /// Attempts made, including the successful one
        attempts: u32,
    },
    /// Every permitted attempt failed.
    Exhausted {
        /// Attempts made
        attempts: u32,
        /// Error from the final attempt
        last_error: TransportError,
    },
}

impl RetryOutcome {
    /// Returns true if an attempt succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }

    /// Returns the number of attempts made.
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        match self {
            Self::Succeeded { attempts, .. } | Self::Exhausted { attempts, .. } => *attempts,
        }
    }

    /// Returns the response body, or empty text after exhaustion.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Succeeded { body, .. } => body,
            Self::Exhausted { .. } => String::new(),
        }
    }
}

/// Runs an operation until it succeeds or the attempt budget is spent.
///
/// Every failed attempt is reported to the sink as
/// `Error:\t{error}. Waiting {delay}ms.` and followed by the policy delay,
/// including the last one. Each run ends with exactly one terminal line
/// describing the outcome.
#[derive(Debug, Clone)]
pub struct RetryController<S = TokioSleeper> {
    policy: RetryPolicy,
    sleeper: S,
}

impl RetryController<TokioSleeper> {
    /// Creates a controller that waits on the tokio timer.
    #[must_use]
    pub const fn new(policy: RetryPolicy) -> Self {
        Self {
            policy,
            sleeper: TokioSleeper,
        }
    }
}

impl<S> RetryController<S> {
    /// Sets a custom sleeper for the delay between attempts.
    #[must_use]
    pub fn with_sleeper<S2>(self, sleeper: S2) -> RetryController<S2> {
        RetryController {
            policy: self.policy,
            sleeper,
        }
    }

    /// Replaces the retry policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the retry policy.
    #[must_use]
    pub const fn policy(&self) -> &RetryPolicy {
        &self.policy
    }
}

impl<S: Sleeper> RetryController<S> {
    /// Runs `attempt` until it succeeds or `max_attempts` is reached.
    pub async fn run<F, Fut, K>(&self, sink: &K, mut attempt: F) -> RetryOutcome
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = AttemptOutcome>,
        K: DiagnosticSink + ?Sized,
    {
        let mut attempts_remaining = self.policy.max_attempts;
        let mut attempts = 0;

        loop {
            attempts += 1;

            match attempt().await {
                AttemptOutcome::Success(body) => {
                    tracing::info!(attempts, "Request succeeded");
                    sink.emit(&succeeded_line(attempts));
                    return RetryOutcome::Succeeded { body, attempts };
                }
                AttemptOutcome::Failure(error) => {
                    tracing::warn!(attempt = attempts, error = %error, "Request attempt failed");
                    sink.emit(&failure_line(&error, &self.policy));

                    attempts_remaining = attempts_remaining.saturating_sub(1);
                    self.sleeper.sleep(self.policy.delay).await;

                    if attempts_remaining == 0 {
                        tracing::info!(attempts, "Retry attempts exhausted");
                        sink.emit(&exhausted_line(attempts));
                        return RetryOutcome::Exhausted {
                            attempts,
                            last_error: error,
                        };
                    }
                }
            }
        }
    }
}

/// Prefix of every per-attempt failure line.
pub const FAILURE_PREFIX: &str = "Error:\t";

fn failure_line(error: &TransportError, policy: &RetryPolicy) -> String {
    format!(
        "{FAILURE_PREFIX}{error}. Waiting {}ms.",
        policy.delay_millis()
    )
}

fn succeeded_line(attempts: u32) -> String {
    format!("Request is executed after {attempts} attempt(s).")
}

fn exhausted_line(attempts: u32) -> String {
    format!("Request is executed with no response body after {attempts} failed attempt(s).")
}
