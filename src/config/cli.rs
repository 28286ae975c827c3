//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::curl::Verb;

use super::defaults;

/// dbcurl: CURL-like HTTP calls with optional retries
///
/// Sends one GET, POST or PUT request and prints the response body.
/// Retry diagnostics are written to standard error.
#[derive(Debug, Parser)]
#[command(name = "dbcurl")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for dbcurl
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Send a GET request
    Get(RequestArgs),

    /// Send a POST request
    Post(UploadArgs),

    /// Send a PUT request
    Put(UploadArgs),

    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE)]
        output: PathBuf,
    },
}

/// Arguments shared by every request command.
#[derive(Debug, Clone, Args)]
pub struct RequestArgs {
    /// Header specification, e.g. 'Content-Type: application/json; X-Trace: abc'
    #[arg(short = 'H', long = "header", value_name = "SPEC")]
    pub header: Option<String>,

    /// Target URL
    pub url: String,
}

/// Arguments for commands that send a body.
#[derive(Debug, Clone, Args)]
pub struct UploadArgs {
    #[command(flatten)]
    pub request: RequestArgs,

    /// Request body
    #[arg(short = 'd', long = "data")]
    pub data: Option<String>,

    /// Retry failed attempts and print an empty body after exhaustion
    #[arg(long)]
    pub retry: bool,
}

impl Command {
    /// Returns the HTTP verb of a request command, or `None` for `init`.
    #[must_use]
    pub const fn verb(&self) -> Option<Verb> {
        match self {
            Self::Get(_) => Some(Verb::Get),
            Self::Post(_) => Some(Verb::Post),
            Self::Put(_) => Some(Verb::Put),
            Self::Init { .. } => None,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}
