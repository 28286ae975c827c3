//! Blocking entry points, one per database-callable unit.
//!
//! Every call builds its own transport client and a current-thread tokio
//! runtime, drives the request to completion on the calling thread and
//! drops both. Nothing is shared between calls, including retry delays.
//!
//! These functions must not be called from inside an async runtime.

use std::future::Future;

use crate::header::HeaderSpec;
use crate::retry::{RetryOutcome, RetryPolicy};
use crate::sink::{DiagnosticSink, TracingSink};
use crate::time::TokioSleeper;
use crate::transport::{ReqwestClient, TransportSettings};

use super::{Curl, CurlError, RequestSpec, Verb};

/// Process-wide settings for the blocking operations.
///
/// Holds the transport settings, the retry policy and the diagnostic sink.
/// A session is configured once by the host; callers of the operations
/// cannot change the policy per call.
///
/// # Example
///
/// ```no_run
/// use dbcurl::curl::CurlSession;
/// use dbcurl::sink::WriterSink;
///
/// let session = CurlSession::new().with_sink(WriterSink::stderr());
/// let body = session.put_with_retry(None, Some("{}"), "https://example.com/items/1")?;
/// # Ok::<(), dbcurl::curl::CurlError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct CurlSession<K = TracingSink> {
    settings: TransportSettings,
    policy: RetryPolicy,
    sink: K,
}

impl CurlSession<TracingSink> {
    /// Creates a session with default settings and a [`TracingSink`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            settings: TransportSettings::new(),
            policy: RetryPolicy::new(),
            sink: TracingSink,
        }
    }
}

impl<K> CurlSession<K> {
    /// Sets the transport settings.
    #[must_use]
    pub fn with_settings(mut self, settings: TransportSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Sets the retry policy.
    #[must_use]
    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the diagnostic sink.
    #[must_use]
    pub fn with_sink<K2>(self, sink: K2) -> CurlSession<K2> {
        CurlSession {
            settings: self.settings,
            policy: self.policy,
            sink,
        }
    }

    /// Returns the transport settings.
    #[must_use]
    pub const fn settings(&self) -> &TransportSettings {
        &self.settings
    }

    /// Returns the retry policy.
    #[must_use]
    pub const fn retry_policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Returns the diagnostic sink.
    #[must_use]
    pub const fn sink(&self) -> &K {
        &self.sink
    }
}

impl<K: DiagnosticSink> CurlSession<K> {
    /// Blocking GET.
    ///
    /// # Errors
    ///
    /// Returns [`CurlError::Transport`] if the request fails.
    pub fn get(&self, header_spec: Option<&str>, url: &str) -> Result<String, CurlError> {
        self.execute(&RequestSpec::get(HeaderSpec::new(header_spec), url))
    }

    /// Blocking POST.
    ///
    /// # Errors
    ///
    /// Returns [`CurlError::MissingBody`] without touching the network if
    /// `body` is `None`, or [`CurlError::Transport`] if the request fails.
    pub fn post(
        &self,
        header_spec: Option<&str>,
        body: Option<&str>,
        url: &str,
    ) -> Result<String, CurlError> {
        let spec = RequestSpec::new(Verb::Post, HeaderSpec::new(header_spec), body, url)?;
        self.execute(&spec)
    }

    /// Blocking POST with retries. Returns empty text after exhaustion.
    ///
    /// # Errors
    ///
    /// Returns [`CurlError::MissingBody`] without touching the network if
    /// `body` is `None`.
    pub fn post_with_retry(
        &self,
        header_spec: Option<&str>,
        body: Option<&str>,
        url: &str,
    ) -> Result<String, CurlError> {
        let spec = RequestSpec::new(Verb::Post, HeaderSpec::new(header_spec), body, url)?;
        Ok(self.execute_with_retry(&spec)?.into_text())
    }

    /// Blocking PUT.
    ///
    /// # Errors
    ///
    /// Returns [`CurlError::MissingBody`] without touching the network if
    /// `body` is `None`, or [`CurlError::Transport`] if the request fails.
    pub fn put(
        &self,
        header_spec: Option<&str>,
        body: Option<&str>,
        url: &str,
    ) -> Result<String, CurlError> {
        let spec = RequestSpec::new(Verb::Put, HeaderSpec::new(header_spec), body, url)?;
        self.execute(&spec)
    }

    /// Blocking PUT with retries. Returns empty text after exhaustion.
    ///
    /// # Errors
    ///
    /// Returns [`CurlError::MissingBody`] without touching the network if
    /// `body` is `None`.
    pub fn put_with_retry(
        &self,
        header_spec: Option<&str>,
        body: Option<&str>,
        url: &str,
    ) -> Result<String, CurlError> {
        let spec = RequestSpec::new(Verb::Put, HeaderSpec::new(header_spec), body, url)?;
        Ok(self.execute_with_retry(&spec)?.into_text())
    }

    /// Executes a prepared request once.
    ///
    /// # Errors
    ///
    /// Returns [`CurlError`] if the client or runtime cannot be set up or
    /// the request fails.
    pub fn execute(&self, spec: &RequestSpec) -> Result<String, CurlError> {
        let curl = self.curl()?;
        block_on(curl.execute(spec))?
    }

    /// Executes a prepared request under the retry policy.
    ///
    /// # Errors
    ///
    /// Returns [`CurlError`] only if the client or runtime cannot be set
    /// up; request failures end in [`RetryOutcome::Exhausted`].
    pub fn execute_with_retry(&self, spec: &RequestSpec) -> Result<RetryOutcome, CurlError> {
        let curl = self.curl()?;
        block_on(curl.execute_with_retry(spec))
    }

    fn curl(&self) -> Result<Curl<ReqwestClient, TokioSleeper, &K>, CurlError> {
        let client = ReqwestClient::new(&self.settings)?;
        Ok(Curl::new(client)
            .with_retry_policy(self.policy)
            .with_sink(&self.sink))
    }
}

fn block_on<F: Future>(future: F) -> Result<F::Output, CurlError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(CurlError::Runtime)?;
    Ok(runtime.block_on(future))
}

/// Blocking GET with default settings.
///
/// # Errors
///
/// See [`CurlSession::get`].
pub fn get(header_spec: Option<&str>, url: &str) -> Result<String, CurlError> {
    CurlSession::new().get(header_spec, url)
}

/// Blocking POST with default settings.
///
/// # Errors
///
/// See [`CurlSession::post`].
pub fn post(header_spec: Option<&str>, body: Option<&str>, url: &str) -> Result<String, CurlError> {
    CurlSession::new().post(header_spec, body, url)
}

/// Blocking POST with retries and default settings.
///
/// # Errors
///
/// See [`CurlSession::post_with_retry`].
pub fn post_with_retry(
    header_spec: Option<&str>,
    body: Option<&str>,
    url: &str,
) -> Result<String, CurlError> {
    CurlSession::new().post_with_retry(header_spec, body, url)
}

/// Blocking PUT with default settings.
///
/// # Errors
///
/// See [`CurlSession::put`].
pub fn put(header_spec: Option<&str>, body: Option<&str>, url: &str) -> Result<String, CurlError> {
    CurlSession::new().put(header_spec, body, url)
}

/// Blocking PUT with retries and default settings.
///
/// # Errors
///
/// See [`CurlSession::put_with_retry`].
pub fn put_with_retry(
    header_spec: Option<&str>,
    body: Option<&str>,
    url: &str,
) -> Result<String, CurlError> {
    CurlSession::new().put_with_retry(header_spec, body, url)
}
