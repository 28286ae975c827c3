//! Retry handling for the retry operations.
//!
//! This module provides:
//! - Fixed-delay retry configuration ([`RetryPolicy`])
//! - The bounded retry loop ([`RetryController`])
//! - Per-attempt and terminal results ([`AttemptOutcome`], [`RetryOutcome`])

mod controller;
mod policy;


pub use controller::{AttemptOutcome, FAILURE_PREFIX, RetryController, RetryOutcome};
pub use policy::RetryPolicy;
