//! Production HTTP client implementation using reqwest.

use std::time::Duration;

use http::header::{CONNECTION, EXPECT, HeaderValue};

use super::{HttpClient, HttpRequest, HttpResponse, TransportError};

/// Transport settings applied to every client.
///
/// The TLS floor, disabled keep-alive and disabled `Expect: 100-continue`
/// are fixed requirements and cannot be changed. Only the timeout and the
/// user agent are configurable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransportSettings {
    /// Overall request timeout. `None` keeps the client's default.
    pub timeout: Option<Duration>,
    /// `User-Agent` header value. `None` sends no user agent.
    pub user_agent: Option<String>,
}

impl TransportSettings {
    /// Creates settings with no timeout and no user agent.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            timeout: None,
            user_agent: None,
        }
    }

    /// Sets the overall request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the `User-Agent` header value.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

/// Production HTTP client using reqwest.
///
/// Every client negotiates at least TLS 1.2 and keeps no idle connections.
/// Every request is sent with `Connection: close`, overriding any caller
/// value, and without an `Expect` header, so the 100-continue handshake
/// never happens.
///
/// # Example
///
/// ```no_run
/// use dbcurl::transport::{HttpClient, HttpRequest, ReqwestClient, TransportSettings};
/// use http::Method;
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ReqwestClient::new(&TransportSettings::new())?;
/// let url = Url::parse("https://api.example.com/hook")?;
/// let request = HttpRequest::new(Method::POST, url).with_body(b"hello".to_vec());
/// let response = client.request(request).await?;
/// println!("Status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Builds a client that honours the fixed transport requirements.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Setup`] if the TLS backend cannot be
    /// initialized.
    pub fn new(settings: &TransportSettings) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder()
            .min_tls_version(reqwest::tls::Version::TLS_1_2)
            .pool_max_idle_per_host(0);

        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = &settings.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }

        let inner = builder
            .build()
            .map_err(|e| TransportError::Setup(Box::new(e)))?;

        Ok(Self { inner })
    }

    /// Creates an HTTP client from an existing reqwest client.
    ///
    /// The caller is responsible for the TLS floor and pool settings;
    /// `Connection: close` and `Expect` stripping still apply per request.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { inner: client }
    }
}

impl HttpClient for ReqwestClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut headers = req.headers;
        headers.remove(EXPECT);
        headers.insert(CONNECTION, HeaderValue::from_static("close"));

        let mut builder = self.inner.request(req.method, req.url.as_str());
        for (name, value) in &headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout
            } else if e.is_builder() {
                TransportError::InvalidUrl(e.to_string())
            } else {
                TransportError::Connection(Box::new(e))
            }
        })?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TransportError::Timeout
                } else {
                    TransportError::Connection(Box::new(e))
                }
            })?
            .to_vec();

        Ok(HttpResponse::new(status, headers, body))
    }
}
