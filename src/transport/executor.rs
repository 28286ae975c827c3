//! Single HTTP round-trip returning the response body as text.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::header::HeaderEntry;

use super::{HttpClient, HttpRequest, TransportError};

/// Performs one HTTP request and returns the body as text.
///
/// The executor never retries and never writes diagnostics. Retry
/// handling lives in [`crate::retry::RetryController`].
#[derive(Debug, Clone)]
pub struct Executor<H> {
    client: H,
}

impl<H> Executor<H> {
    /// Creates an executor around the given transport client.
    #[must_use]
    pub const fn new(client: H) -> Self {
        Self { client }
    }

    /// Returns the underlying transport client.
    #[must_use]
    pub const fn client(&self) -> &H {
        &self.client
    }
}

impl<H: HttpClient> Executor<H> {
    /// Sends one request and returns the response body.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the URL or a header cannot be used,
    /// the round-trip fails, or the server answers with a non-2xx status.
    pub async fn execute(
        &self,
        method: &http::Method,
        url: &str,
        body: Option<&str>,
        headers: &[HeaderEntry],
    ) -> Result<String, TransportError> {
        let request = build_request(method, url, body, headers)?;
        tracing::debug!(method = %request.method, url = %request.url, "Sending request");

        let response = self.client.request(request).await?;
        tracing::debug!(status = %response.status, bytes = response.body.len(), "Received response");

        if !response.is_success() {
            return Err(TransportError::Status {
                status: response.status,
                body: response.body_text().map(ToString::to_string),
            });
        }

        Ok(response.into_text())
    }
}

/// Builds the transport request from caller input.
///
/// The `Content-Type` entry replaces any earlier value; raw entries are
/// appended in order.
///
/// # Errors
///
/// Returns [`TransportError::InvalidUrl`] or
/// [`TransportError::InvalidHeader`] for unusable input.
pub fn build_request(
    method: &http::Method,
    url: &str,
    body: Option<&str>,
    headers: &[HeaderEntry],
) -> Result<HttpRequest, TransportError> {
    let mut request = HttpRequest::new(method.clone(), escape_url(url)?);

    for entry in headers {
        let (name, value) = entry.to_pair()?;
        request = if entry.is_content_type() {
            request.with_replaced_header(name, value)
        } else {
            request.with_header(name, value)
        };
    }

    if let Some(body) = body.filter(|_| *method != http::Method::GET) {
        request = request.with_body(body.as_bytes().to_vec());
    }

    Ok(request)
}

/// Characters escaped in the path, query and fragment before parsing.
///
/// `%` is left alone so existing escapes survive.
const URL_ESCAPE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}')
    .add(b'[')
    .add(b']');

/// Percent-escapes the caller's URL.
///
/// Everything after the authority is escaped before the text is parsed,
/// so `\` stays part of the path as `%5C` instead of becoming a `/`.
/// Existing escapes are kept. This is sanitation, not validation: a URL
/// that still cannot be parsed is reported as invalid.
///
/// # Errors
///
/// Returns [`TransportError::InvalidUrl`] if the text is not a URL.
pub fn escape_url(raw: &str) -> Result<url::Url, TransportError> {
    let trimmed = raw.trim();
    let (authority, rest) = split_after_authority(trimmed);
    let escaped = format!("{authority}{}", utf8_percent_encode(rest, URL_ESCAPE));

    url::Url::parse(&escaped).map_err(|e| TransportError::InvalidUrl(format!("'{raw}': {e}")))
}

/// Splits `scheme://authority` from the path, query and fragment.
///
/// Text without `://` is returned whole as the first half.
fn split_after_authority(url: &str) -> (&str, &str) {
    let Some(scheme_end) = url.find("://") else {
        return (url, "");
    };
    let authority_start = scheme_end + "://".len();
    let authority_end = url[authority_start..]
        .find(['/', '?', '#'])
        .map_or(url.len(), |offset| authority_start + offset);

    url.split_at(authority_end)
}
