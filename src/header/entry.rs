//! Parsed header entries and their conversion into `http` types.

use http::header::{CONTENT_TYPE, HeaderName, HeaderValue};
use thiserror::Error;

/// One header produced by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderEntry {
    /// Value for the dedicated `Content-Type` header, already normalized.
    ContentType(String),

    /// A `Name: Value` line added as-is.
    ///
    /// The line is only split when the request is built.
    Raw(String),
}

/// Error converting a header entry into a name/value pair.
#[derive(Debug, Error)]
pub enum HeaderLineError {
    /// The raw line has no `:` separator.
    #[error("Header line '{line}' has no ':' separator")]
    MissingSeparator {
        /// The offending line
        line: String,
    },

    /// The header name is not a valid HTTP token.
    #[error("Invalid header name '{name}': {source}")]
    InvalidName {
        /// The invalid name
        name: String,
        /// Underlying parse error
        #[source]
        source: http::header::InvalidHeaderName,
    },

    /// The header value contains forbidden characters.
    #[error("Invalid value for header '{name}': {source}")]
    InvalidValue {
        /// The header name
        name: String,
        /// Underlying parse error
        #[source]
        source: http::header::InvalidHeaderValue,
    },
}

impl HeaderEntry {
    /// Returns true for the dedicated `Content-Type` entry.
    #[must_use]
    pub const fn is_content_type(&self) -> bool {
        matches!(self, Self::ContentType(_))
    }

    /// Converts the entry into a header name and value.
    ///
    /// Raw lines are split at the first `:` and both halves trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`HeaderLineError`] if the line has no separator or the
    /// name or value is not valid HTTP.
    pub fn to_pair(&self) -> Result<(HeaderName, HeaderValue), HeaderLineError> {
        match self {
            Self::ContentType(value) => Ok((CONTENT_TYPE, header_value("Content-Type", value)?)),
            Self::Raw(line) => {
                let (name, value) = line
                    .split_once(':')
                    .ok_or_else(|| HeaderLineError::MissingSeparator { line: line.clone() })?;
                let name = name.trim();
                let header_name = name.parse::<HeaderName>().map_err(|source| {
                    HeaderLineError::InvalidName {
                        name: name.to_string(),
                        source,
                    }
                })?;
                Ok((header_name, header_value(name, value.trim())?))
            }
        }
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, HeaderLineError> {
    HeaderValue::from_str(value).map_err(|source| HeaderLineError::InvalidValue {
        name: name.to_string(),
        source,
    })
}
