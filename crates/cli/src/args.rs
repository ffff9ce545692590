//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `commands` module).
//! - Does not handle config loading (done in `main()`).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::commands;

#[derive(Parser)]
#[command(name = "pagerduty-cli")]
#[command(about = "PagerDuty CLI - Inspect incident alerts from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  pagerduty-cli alerts list PT4KHLK\n  pagerduty-cli alerts list PT4KHLK --limit 25 -o json\n  pagerduty-cli --log-format json alerts list PT4KHLK -o ndjson --output-file alerts.ndjson\n"
)]
pub struct Cli {
    /// Base URL of the PagerDuty REST API (e.g., https://api.eu.pagerduty.com)
    #[arg(short, long, global = true, env = "PAGERDUTY_API_HOST")]
    pub base_url: Option<String>,

    /// REST API key (sent as `Authorization: Token token=<key>`)
    #[arg(short = 'k', long, global = true, env = "PAGERDUTY_USER_API_KEY")]
    pub api_key: Option<String>,

    /// OAuth access token (used when no API key is given)
    #[arg(long, global = true, env = "PAGERDUTY_OAUTH_TOKEN")]
    pub oauth_token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "PAGERDUTY_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Maximum number of retries for rate-limited requests
    #[arg(long, global = true, env = "PAGERDUTY_MAX_RETRIES")]
    pub max_retries: Option<usize>,

    /// Output format (json, table, ndjson)
    #[arg(short, long, global = true, default_value = "table")]
    pub output: String,

    /// Output file path (saves results to file instead of stdout)
    #[arg(long, global = true, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Log line layout on stderr. Verbosity is controlled by RUST_LOG.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Suppress the progress spinner.
    ///
    /// Note: the spinner always writes to STDERR; this flag disables it entirely.
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect the alerts grouped under an incident
    Alerts {
        #[command(subcommand)]
        command: commands::alerts::AlertsCommand,
    },
}
