//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use http::HeaderValue;

use crate::curl::Verb;
use crate::retry::RetryPolicy;
use crate::transport::TransportSettings;

use super::cli::{Cli, Command};
use super::defaults;
use super::error::ConfigError;
use super::toml::TomlConfig;

/// The request a single `dbcurl` invocation performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// HTTP verb
    pub verb: Verb,

    /// Raw header specification, parsed by the library
    pub header_spec: Option<String>,

    /// Request body; `None` for GET or when `-d` was omitted
    pub body: Option<String>,

    /// Target URL as given by the caller
    pub url: String,

    /// Whether to use the retry operation
    pub retry: bool,
}

impl Invocation {
    fn from_command(command: &Command) -> Option<Self> {
        let verb = command.verb()?;
        let invocation = match command {
            Command::Get(args) => Self {
                verb,
                header_spec: args.header.clone(),
                body: None,
                url: args.url.clone(),
                retry: false,
            },
            Command::Post(args) | Command::Put(args) => Self {
                verb,
                header_spec: args.request.header.clone(),
                body: args.data.clone(),
                url: args.request.url.clone(),
                retry: args.retry,
            },
            Command::Init { .. } => return None,
        };
        Some(invocation)
    }
}

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// The request to perform
    pub invocation: Invocation,

    /// Retry policy for the retry operations
    pub retry_policy: RetryPolicy,

    /// Transport settings for every client
    pub settings: TransportSettings,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let timeout_str = self
            .settings
            .timeout
            .map_or_else(|| "default".to_string(), |t| format!("{}s", t.as_secs()));

        write!(
            f,
            "Config {{ verb: {}, url: {}, retry: {}, policy: {}x/{}ms, timeout: {} }}",
            self.invocation.verb,
            self.invocation.url,
            self.invocation.retry,
            self.retry_policy.max_attempts,
            self.retry_policy.delay_millis(),
            timeout_str,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// Retry and transport settings come from the TOML file only; missing
    /// values fall back to [`defaults`].
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No request command was given
    /// - `retry.max_attempts` is zero
    /// - `transport.timeout_secs` is zero
    /// - `transport.user_agent` is not a valid header value
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let invocation = cli
            .command
            .as_ref()
            .and_then(Invocation::from_command)
            .ok_or(ConfigError::MissingCommand)?;

        let retry_policy = Self::build_retry_policy(toml)?;
        let settings = Self::build_transport_settings(toml)?;

        Ok(Self {
            invocation,
            retry_policy,
            settings,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn build_retry_policy(toml: Option<&TomlConfig>) -> Result<RetryPolicy, ConfigError> {
        let retry = toml.map(|t| &t.retry);

        let max_attempts = retry
            .and_then(|r| r.max_attempts)
            .unwrap_or(defaults::RETRY_MAX_ATTEMPTS);

        let delay = retry
            .and_then(|r| r.delay_ms)
            .map_or_else(defaults::retry_delay, Duration::from_millis);

        if max_attempts < RetryPolicy::MIN_MAX_ATTEMPTS {
            return Err(ConfigError::InvalidRetry(
                "max_attempts must be greater than 0".to_string(),
            ));
        }

        Ok(RetryPolicy::new()
            .with_max_attempts(max_attempts)
            .with_delay(delay))
    }

    fn build_transport_settings(
        toml: Option<&TomlConfig>,
    ) -> Result<TransportSettings, ConfigError> {
        let Some(transport) = toml.map(|t| &t.transport) else {
            return Ok(TransportSettings::new());
        };

        let mut settings = TransportSettings::new();

        if let Some(seconds) = transport.timeout_secs {
            if seconds == 0 {
                return Err(ConfigError::InvalidTimeout {
                    field: "timeout_secs",
                    reason: "must be greater than 0".to_string(),
                });
            }
            settings = settings.with_timeout(Duration::from_secs(seconds));
        }

        if let Some(ref user_agent) = transport.user_agent {
            HeaderValue::from_str(user_agent).map_err(|e| ConfigError::InvalidUserAgent {
                value: user_agent.clone(),
                reason: e.to_string(),
            })?;
            settings = settings.with_user_agent(user_agent.as_str());
        }

        Ok(settings)
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
