//! PagerDuty CLI - Command-line access to incident alerts.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Execute PagerDuty REST API commands via the shared client library.
//! - Format and display results in various output formats (table, JSON, NDJSON).
//!
//! Does NOT handle:
//! - REST API implementation, pagination, or normalization (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Logs and progress go to stderr; stdout carries only command results.

mod args;
mod cancellation;
mod commands;
mod error;
mod formatters;
mod progress;

use args::{Cli, Commands, LogFormat};
use cancellation::{interrupted, is_cancelled_error, print_cancelled_message};
use clap::Parser;
use error::{ExitCode, ExitCodeExt};
use pagerduty_config::{Config, ConfigLoader};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::from(&e).as_i32());
    }

    let cli = Cli::parse();

    init_logging(cli.log_format);

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to build configuration: {:#}", e);
            std::process::exit(ExitCode::from(&e).as_i32());
        }
    };

    let result = tokio::select! {
        res = run_command(cli, config) => res,
        cancelled = interrupted() => Err(cancelled.into()),
    };

    let exit_code = match result {
        Ok(()) => ExitCode::Success,
        Err(e) if is_cancelled_error(&e) => {
            print_cancelled_message();
            ExitCode::Interrupted
        }
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// Install the global subscriber: `RUST_LOG` filtering, stderr output.
fn init_logging(format: LogFormat) {
    let registry = tracing_subscriber::registry().with(EnvFilter::from_default_env());
    match format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }
}

/// Environment first, then CLI flags on top.
fn build_config(cli: &Cli) -> Result<Config, pagerduty_config::ConfigError> {
    let mut loader = ConfigLoader::new().from_env()?;

    if let Some(ref url) = cli.base_url {
        loader = loader.with_base_url(url.clone());
    }
    if let Some(ref key) = cli.api_key {
        loader = loader.with_api_key(key.clone());
    }
    if let Some(ref token) = cli.oauth_token {
        loader = loader.with_oauth_token(token.clone());
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(std::time::Duration::from_secs(timeout_secs));
    }
    if let Some(retries) = cli.max_retries {
        loader = loader.with_max_retries(retries);
    }

    loader.build()
}

async fn run_command(cli: Cli, config: Config) -> anyhow::Result<()> {
    match cli.command {
        Commands::Alerts { command } => {
            commands::alerts::run(config, command, &cli.output, cli.output_file, cli.quiet).await
        }
    }
}
