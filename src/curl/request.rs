//! Validated request description built from caller input.

use std::fmt;

use crate::header::{HeaderEntry, HeaderSpec};

use super::CurlError;

/// The HTTP verbs exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    /// Read-only retrieval
    Get,
    /// Upload with `POST`
    Post,
    /// Upload with `PUT`
    Put,
}

impl Verb {
    /// Returns the explicit HTTP method for this verb.
    #[must_use]
    pub const fn method(self) -> http::Method {
        match self {
            Self::Get => http::Method::GET,
            Self::Post => http::Method::POST,
            Self::Put => http::Method::PUT,
        }
    }

    /// Returns true if the verb must carry a body.
    #[must_use]
    pub const fn requires_body(self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }

    /// Returns the method name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request ready for the executor.
///
/// Construction parses the header spec and checks that POST and PUT carry
/// a body, so an invalid request never reaches the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    verb: Verb,
    url: String,
    body: Option<String>,
    headers: Vec<HeaderEntry>,
}

impl RequestSpec {
    /// Builds a request from caller input.
    ///
    /// A body passed with GET is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`CurlError::MissingBody`] if `verb` requires a body and
    /// `body` is `None`.
    pub fn new(
        verb: Verb,
        header_spec: HeaderSpec<'_>,
        body: Option<&str>,
        url: &str,
    ) -> Result<Self, CurlError> {
        if verb.requires_body() && body.is_none() {
            return Err(CurlError::MissingBody { verb });
        }

        Ok(Self {
            verb,
            url: url.to_string(),
            body: body.filter(|_| verb.requires_body()).map(ToString::to_string),
            headers: header_spec.entries(),
        })
    }

    /// Builds a GET request.
    #[must_use]
    pub fn get(header_spec: HeaderSpec<'_>, url: &str) -> Self {
        Self {
            verb: Verb::Get,
            url: url.to_string(),
            body: None,
            headers: header_spec.entries(),
        }
    }

    /// Returns the verb.
    #[must_use]
    pub const fn verb(&self) -> Verb {
        self.verb
    }

    /// Returns the unescaped URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the body, if any.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Returns the parsed headers.
    #[must_use]
    pub fn headers(&self) -> &[HeaderEntry] {
        &self.headers
    }
}
