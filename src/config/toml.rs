//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional; missing values fall back to the defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Retry policy configuration
    #[serde(default)]
    pub retry: RetrySection,

    /// Transport configuration
    #[serde(default)]
    pub transport: TransportSection,
}

/// Retry policy configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RetrySection {
    /// Maximum number of attempts, including the first
    pub max_attempts: Option<u32>,

    /// Delay after each failed attempt in milliseconds
    pub delay_ms: Option<u64>,
}

/// Transport configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransportSection {
    /// Overall request timeout in seconds
    pub timeout_secs: Option<u64>,

    /// `User-Agent` header value
    pub user_agent: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# dbcurl Configuration File

[retry]
# Maximum number of attempts for post/put --retry, including the first (default: 3)
# max_attempts = 3

# Delay after each failed attempt in milliseconds (default: 50)
# delay_ms = 50

[transport]
# Overall request timeout in seconds (default: client default)
# timeout_secs = 30

# User-Agent header sent with every request (default: none)
# user_agent = "dbcurl"
"#
    .to_string()
}
