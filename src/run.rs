//! Application execution logic.
//!
//! Runs the one callable operation a `dbcurl` invocation asks for.

use dbcurl::config::{Invocation, ValidatedConfig};
use dbcurl::curl::{CurlError, CurlSession, Verb};
use dbcurl::sink::DiagnosticSink;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Builds the session described by the configuration.
pub fn session<K>(config: &ValidatedConfig, sink: K) -> CurlSession<K> {
    CurlSession::new()
        .with_settings(config.settings.clone())
        .with_retry_policy(config.retry_policy)
        .with_sink(sink)
}

/// Performs the invocation and returns the response body.
///
/// # Errors
///
/// Returns [`CurlError`] for a missing body or, for the plain operations,
/// a failed request.
pub fn execute<K: DiagnosticSink>(
    session: &CurlSession<K>,
    invocation: &Invocation,
) -> Result<String, CurlError> {
    let header_spec = invocation.header_spec.as_deref();
    let body = invocation.body.as_deref();
    let url = invocation.url.as_str();

    tracing::debug!(verb = %invocation.verb, retry = invocation.retry, "Executing request");

    match (invocation.verb, invocation.retry) {
        (Verb::Get, _) => session.get(header_spec, url),
        (Verb::Post, false) => session.post(header_spec, body, url),
        (Verb::Post, true) => session.post_with_retry(header_spec, body, url),
        (Verb::Put, false) => session.put(header_spec, body, url),
        (Verb::Put, true) => session.put_with_retry(header_spec, body, url),
    }
}
