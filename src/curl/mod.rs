//! The CURL-like callable operations.
//!
//! This module provides:
//! - Async operations over injectable collaborators ([`Curl`])
//! - Blocking, per-call operations for the host ([`CurlSession`], [`blocking`])
//! - Validated request descriptions ([`RequestSpec`], [`Verb`])
//! - Caller-facing errors ([`CurlError`])
//!
//! The retry operations never fail because of the network: every failed
//! attempt is reported through the [`DiagnosticSink`](crate::sink::DiagnosticSink)
//! and exhaustion yields empty text. Callers that do not need the body
//! simply discard it; the diagnostics are the same.

pub mod blocking;
mod error;
mod ops;
mod request;

#[cfg(test)]
mod request_tests;

pub use blocking::CurlSession;
pub use error::CurlError;
pub use ops::Curl;
pub use request::{RequestSpec, Verb};
