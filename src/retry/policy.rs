//! Retry policy configuration for the retry operations.

use std::time::Duration;

/// Fixed-delay retry configuration.
///
/// Controls how many attempts are made and how long to wait after each
/// failed attempt. The policy is an immutable value handed to the
/// [`RetryController`](super::RetryController) at construction; callers of
/// the retry operations cannot change it per call.
///
/// # Defaults
///
/// - `max_attempts`: 3
/// - `delay`: 50 milliseconds
///
/// # Example
///
/// ```
/// use dbcurl::retry::RetryPolicy;
/// use std::time::Duration;
///
/// let policy = RetryPolicy::default();
/// assert_eq!(policy.max_attempts, 3);
///
/// let fast = RetryPolicy::new()
///     .with_max_attempts(5)
///     .with_delay(Duration::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the initial attempt).
    ///
    /// A value of 1 means no retries; only the initial attempt is made.
    pub max_attempts: u32,

    /// Wait after every failed attempt.
    pub delay: Duration,
}

impl RetryPolicy {
    /// Default maximum attempts.
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

    /// Default delay after a failed attempt (50 milliseconds).
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(50);

    /// Minimum value for `max_attempts`.
    pub const MIN_MAX_ATTEMPTS: u32 = 1;

    /// Creates a new retry policy with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            delay: Self::DEFAULT_DELAY,
        }
    }

    /// Sets the maximum number of attempts.
    ///
    /// # Panics
    ///
    /// Panics if `max_attempts` is less than 1.
    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        assert!(
            max_attempts >= Self::MIN_MAX_ATTEMPTS,
            "max_attempts must be at least 1"
        );
        self.max_attempts = max_attempts;
        self
    }

    /// Sets the delay after each failed attempt.
    ///
    /// Zero delay is supported (useful in tests) but creates a tight
    /// retry loop.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the delay in whole milliseconds, as reported in diagnostics.
    #[must_use]
    pub const fn delay_millis(&self) -> u128 {
        self.delay.as_millis()
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new()
    }
}
