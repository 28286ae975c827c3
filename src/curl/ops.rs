//! Async callable operations over an injectable transport client.

use crate::header::HeaderSpec;
use crate::retry::{AttemptOutcome, RetryController, RetryOutcome, RetryPolicy};
use crate::sink::{DiagnosticSink, TracingSink};
use crate::time::{Sleeper, TokioSleeper};
use crate::transport::{Executor, HttpClient};

use super::{CurlError, RequestSpec, Verb};

/// The CURL-like operations, generic over their collaborators.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation
/// - `S`: The sleeper used between retry attempts (defaults to [`TokioSleeper`])
/// - `K`: The diagnostic sink for retry reporting (defaults to [`TracingSink`])
///
/// # Example
///
/// ```no_run
/// use dbcurl::curl::Curl;
/// use dbcurl::transport::{ReqwestClient, TransportSettings};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let curl = Curl::new(ReqwestClient::new(&TransportSettings::new())?);
/// let body = curl
///     .put_with_retry(Some("Content-Type: application/json;"), Some("{}"), "https://example.com/items/1")
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Curl<H, S = TokioSleeper, K = TracingSink> {
    executor: Executor<H>,
    retry: RetryController<S>,
    sink: K,
}

impl<H> Curl<H, TokioSleeper, TracingSink> {
    /// Creates the operations with the default retry policy, the tokio
    /// sleeper and a [`TracingSink`].
    #[must_use]
    pub const fn new(client: H) -> Self {
        Self {
            executor: Executor::new(client),
            retry: RetryController::new(RetryPolicy::new()),
            sink: TracingSink,
        }
    }
}

impl<H, S, K> Curl<H, S, K> {
    /// Sets the retry policy.
    #[must_use]
    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry = self.retry.with_policy(policy);
        self
    }

    /// Sets a custom sleeper for retry delays.
    ///
    /// This is primarily useful for testing to avoid actual delays.
    #[must_use]
    pub fn with_sleeper<S2>(self, sleeper: S2) -> Curl<H, S2, K> {
        Curl {
            executor: self.executor,
            retry: self.retry.with_sleeper(sleeper),
            sink: self.sink,
        }
    }

    /// Sets the diagnostic sink.
    #[must_use]
    pub fn with_sink<K2>(self, sink: K2) -> Curl<H, S, K2> {
        Curl {
            executor: self.executor,
            retry: self.retry,
            sink,
        }
    }

    /// Returns the configured retry policy.
    #[must_use]
    pub const fn retry_policy(&self) -> &RetryPolicy {
        self.retry.policy()
    }

    /// Returns the diagnostic sink.
    #[must_use]
    pub const fn sink(&self) -> &K {
        &self.sink
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn client(&self) -> &H {
        self.executor.client()
    }
}

impl<H: HttpClient, S: Sleeper, K: DiagnosticSink> Curl<H, S, K> {
    /// Sends a GET request and returns the body.
    ///
    /// # Errors
    ///
    /// Returns [`CurlError::Transport`] if the request fails.
    pub async fn get(&self, header_spec: Option<&str>, url: &str) -> Result<String, CurlError> {
        let spec = RequestSpec::get(HeaderSpec::new(header_spec), url);
        self.execute(&spec).await
    }

    /// Sends a POST request and returns the body.
    ///
    /// # Errors
    ///
    /// Returns [`CurlError::MissingBody`] if `body` is `None`, or
    /// [`CurlError::Transport`] if the request fails.
    pub async fn post(
        &self,
        header_spec: Option<&str>,
        body: Option<&str>,
        url: &str,
    ) -> Result<String, CurlError> {
        let spec = RequestSpec::new(Verb::Post, HeaderSpec::new(header_spec), body, url)?;
        self.execute(&spec).await
    }

    /// Sends a PUT request and returns the body.
    ///
    /// # Errors
    ///
    /// Returns [`CurlError::MissingBody`] if `body` is `None`, or
    /// [`CurlError::Transport`] if the request fails.
    pub async fn put(
        &self,
        header_spec: Option<&str>,
        body: Option<&str>,
        url: &str,
    ) -> Result<String, CurlError> {
        let spec = RequestSpec::new(Verb::Put, HeaderSpec::new(header_spec), body, url)?;
        self.execute(&spec).await
    }

    /// Sends a POST request with retries.
    ///
    /// Returns empty text once every attempt has failed.
    ///
    /// # Errors
    ///
    /// Returns [`CurlError::MissingBody`] if `body` is `None`.
    pub async fn post_with_retry(
        &self,
        header_spec: Option<&str>,
        body: Option<&str>,
        url: &str,
    ) -> Result<String, CurlError> {
        let spec = RequestSpec::new(Verb::Post, HeaderSpec::new(header_spec), body, url)?;
        Ok(self.execute_with_retry(&spec).await.into_text())
    }

    /// Sends a PUT request with retries.
    ///
    /// Returns empty text once every attempt has failed.
    ///
    /// # Errors
    ///
    /// Returns [`CurlError::MissingBody`] if `body` is `None`.
    pub async fn put_with_retry(
        &self,
        header_spec: Option<&str>,
        body: Option<&str>,
        url: &str,
    ) -> Result<String, CurlError> {
        let spec = RequestSpec::new(Verb::Put, HeaderSpec::new(header_spec), body, url)?;
        Ok(self.execute_with_retry(&spec).await.into_text())
    }

    /// Executes a request once.
    ///
    /// # Errors
    ///
    /// Returns [`CurlError::Transport`] if the request fails.
    pub async fn execute(&self, spec: &RequestSpec) -> Result<String, CurlError> {
        let body = self
            .executor
            .execute(&spec.verb().method(), spec.url(), spec.body(), spec.headers())
            .await?;
        Ok(body)
    }

    /// Executes a request under the retry policy.
    ///
    /// Failures are reported to the sink; the outcome is never an error.
    pub async fn execute_with_retry(&self, spec: &RequestSpec) -> RetryOutcome {
        let method = &spec.verb().method();
        self.retry
            .run(&self.sink, move || async move {
                AttemptOutcome::from(
                    self.executor
                        .execute(method, spec.url(), spec.body(), spec.headers())
                        .await,
                )
            })
            .await
    }
}
