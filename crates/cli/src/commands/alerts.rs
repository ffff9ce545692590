//! Incident alerts command implementation.
//!
//! Responsibilities:
//! - List the alerts of one incident, optionally capped by `--limit`.
//! - Format output via shared formatters.
//!
//! Does NOT handle:
//! - Direct REST API calls or pagination (handled by client crate).
//! - Output formatting details (see formatters module).
//!
//! Invariants:
//! - `--limit` must be a positive integer.
//! - Incident IDs are passed through unmodified; the client percent-encodes them.

use anyhow::{Context, Result};
use clap::Subcommand;
use tracing::info;

use crate::commands::{build_client_from_config, emit_output, resolve_formatter};
use crate::progress::Spinner;

#[derive(Subcommand)]
pub enum AlertsCommand {
    /// List the alerts grouped under an incident
    List {
        /// ID of the incident (e.g., PT4KHLK)
        #[arg(value_name = "INCIDENT_ID")]
        incident_id: String,

        /// Maximum number of alerts to return (default: up to 1000)
        #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
        limit: Option<u64>,
    },
}

pub async fn run(
    config: pagerduty_config::Config,
    command: AlertsCommand,
    output_format: &str,
    output_file: Option<std::path::PathBuf>,
    quiet: bool,
) -> Result<()> {
    match command {
        AlertsCommand::List { incident_id, limit } => {
            run_list(config, &incident_id, limit, output_format, output_file, quiet).await
        }
    }
}

async fn run_list(
    config: pagerduty_config::Config,
    incident_id: &str,
    limit: Option<u64>,
    output_format: &str,
    output_file: Option<std::path::PathBuf>,
    quiet: bool,
) -> Result<()> {
    info!(incident_id, ?limit, "Listing incident alerts");

    // Reject a bad --output before any request goes out.
    let (format, formatter) = resolve_formatter(output_format)?;
    let client = build_client_from_config(&config)?;
    let limit = limit.map(usize::try_from).transpose().context("--limit is too large")?;

    let spinner = Spinner::new(!quiet, format!("Fetching alerts for incident {incident_id}"));
    let alerts = client
        .list_alerts(incident_id, limit)
        .await
        .with_context(|| format!("Failed to list alerts for incident {incident_id}"))?;
    spinner.finish(format!("Fetched {} alert(s)", alerts.len()));

    let output = formatter.format_alerts(&alerts)?;
    emit_output(&output, format, output_file.as_deref())
}
