//! Splits a header spec string into [`HeaderEntry`] values.

use super::HeaderEntry;

/// Separates multiple headers within one spec string.
pub const SEGMENT_DELIMITER: char = ';';

/// Header name that gets routed through the dedicated `Content-Type` slot.
const CONTENT_TYPE: &str = "content-type";

/// Characters stripped from both ends of a `Content-Type` value.
const CONTENT_TYPE_TRIM: [char; 2] = [' ', '"'];

/// A raw header specification as passed in by the caller.
///
/// Holds the unparsed text, or nothing when the caller passed `NULL`.
/// The header spec is parsed on demand and never mutated.
///
/// # Example
///
/// ```
/// use dbcurl::header::{HeaderEntry, HeaderSpec};
///
/// let spec = HeaderSpec::new(Some("Content-Type: \"Application/JSON\"; X-Trace: abc"));
/// assert_eq!(
///     spec.entries(),
///     vec![
///         HeaderEntry::ContentType("application/json".to_string()),
///         HeaderEntry::Raw("X-Trace: abc".to_string()),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderSpec<'a> {
    raw: Option<&'a str>,
}

impl<'a> HeaderSpec<'a> {
    /// Wraps the caller's header text.
    #[must_use]
    pub const fn new(raw: Option<&'a str>) -> Self {
        Self { raw }
    }

    /// Returns the unparsed text, if any.
    #[must_use]
    pub const fn raw(&self) -> Option<&'a str> {
        self.raw
    }

    /// Returns true if the header spec contributes no headers.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.raw.is_none_or(|raw| raw.trim().is_empty())
    }

    /// Parses the header spec into ordered header entries.
    #[must_use]
    pub fn entries(&self) -> Vec<HeaderEntry> {
        parse(self.raw)
    }
}

/// Parses a header spec into the ordered list of headers to apply.
///
/// - `None` or blank input yields no entries.
/// - Input without `;` yields exactly one [`HeaderEntry::Raw`] holding the
///   input verbatim.
/// - Otherwise every non-blank `;`-segment yields one entry, in order.
///   Segments named `content-type` become [`HeaderEntry::ContentType`];
///   all others stay raw lines.
///
/// Malformed segments are not rejected here. They fail when the request
/// is built, see [`HeaderEntry::to_pair`].
#[must_use]
pub fn parse(spec: Option<&str>) -> Vec<HeaderEntry> {
    let Some(spec) = spec.filter(|s| !s.trim().is_empty()) else {
        return Vec::new();
    };

    if !spec.contains(SEGMENT_DELIMITER) {
        return vec![HeaderEntry::Raw(spec.to_string())];
    }

    spec.split(SEGMENT_DELIMITER)
        .filter(|segment| !segment.trim().is_empty())
        .map(parse_segment)
        .collect()
}

fn parse_segment(segment: &str) -> HeaderEntry {
    match segment.split_once(':') {
        Some((name, value)) if name.trim().eq_ignore_ascii_case(CONTENT_TYPE) => {
            HeaderEntry::ContentType(normalize_content_type(value))
        }
        _ => HeaderEntry::Raw(segment.trim().to_string()),
    }
}

fn normalize_content_type(value: &str) -> String {
    value
        .to_lowercase()
        .trim_matches(CONTENT_TYPE_TRIM.as_slice())
        .to_string()
}
