//! Configuration layer for the `dbcurl` host binary.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`], [`Invocation`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Sources
//!
//! The request itself (verb, header spec, body, URL, retry flag) comes
//! from the command line only. Retry and transport settings come from the
//! TOML file only, falling back to built-in defaults. A caller cannot
//! change the retry policy for a single call.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod validated_tests;

pub use cli::{Cli, Command, RequestArgs, UploadArgs};
pub use error::ConfigError;
pub use toml::{TomlConfig, default_config_template};
pub use validated::{Invocation, ValidatedConfig, write_default_config};
