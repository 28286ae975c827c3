//! Transport layer performing single HTTP round-trips.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`], [`TransportSettings`])
//! - Executing one request and returning body text ([`Executor`])

mod client;
mod error;
mod executor;
mod http;

#[cfg(test)]
mod http_tests;

pub use client::{ReqwestClient, TransportSettings};
pub use error::TransportError;
pub use executor::{Executor, build_request, escape_url};
pub use http::{HttpClient, HttpRequest, HttpResponse};
