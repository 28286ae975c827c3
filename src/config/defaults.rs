//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::time::Duration;

/// Default maximum number of attempts for the retry operations.
pub const RETRY_MAX_ATTEMPTS: u32 = 3;

/// Default delay after a failed attempt, in milliseconds.
pub const RETRY_DELAY_MS: u64 = 50;

/// Default output path for `dbcurl init`.
pub const CONFIG_FILE: &str = "dbcurl.toml";

/// Default retry delay as Duration.
#[must_use]
pub const fn retry_delay() -> Duration {
    Duration::from_millis(RETRY_DELAY_MS)
}
