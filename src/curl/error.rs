//! Error types for the callable operations.

use thiserror::Error;

use crate::transport::TransportError;

use super::Verb;

/// Error returned to the caller of a callable operation.
///
/// The retry operations return errors only for bad input or when the
/// client or runtime cannot be set up; request failures are reported
/// through the diagnostic sink and end in an empty result instead.
#[derive(Debug, Error)]
pub enum CurlError {
    /// POST or PUT was called without a body.
    ///
    /// Raised before any network activity and never retried.
    #[error("You must specify data that will be sent to the endpoint ({verb} requires a body)")]
    MissingBody {
        /// The verb that needed a body
        verb: Verb,
    },

    /// The HTTP round-trip failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The blocking facade could not start its runtime.
    #[error("Failed to start request runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

impl CurlError {
    /// Returns true if the caller passed unusable input.
    #[must_use]
    pub const fn is_caller_error(&self) -> bool {
        matches!(self, Self::MissingBody { .. })
    }
}
