//! Error types for HTTP transport operations.

use thiserror::Error;

use crate::header::HeaderLineError;

/// Error type for a single HTTP round-trip.
///
/// Describes what went wrong without dictating recovery strategy.
/// The retry operations treat every variant as a failed attempt.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    ///
    /// The server did not respond within the configured timeout period.
    #[error("Request timed out")]
    Timeout,

    /// The provided URL could not be parsed, even after escaping.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A header entry could not be turned into an HTTP header.
    #[error("Invalid header: {0}")]
    InvalidHeader(#[from] HeaderLineError),

    /// The server answered with a non-success status.
    #[error("The remote server returned an error: {status}")]
    Status {
        /// HTTP status code
        status: http::StatusCode,
        /// Response body, if it was valid UTF-8
        body: Option<String>,
    },

    /// The transport client could not be constructed.
    #[error("Failed to set up HTTP client: {0}")]
    Setup(#[source] Box<dyn std::error::Error + Send + Sync>),
}
