//! CLI command implementations.

pub mod alerts;

use anyhow::{Context, Result};
use pagerduty_client::PagerDutyClient;
use pagerduty_config::Config;

use crate::formatters::{OutputFormat, get_formatter, write_to_file};

/// Build a client from the resolved configuration.
pub fn build_client_from_config(config: &Config) -> Result<PagerDutyClient> {
    PagerDutyClient::builder()
        .from_config(config)
        .build()
        .context("Failed to build PagerDuty client")
}

/// Print formatted output to stdout, or write it to `output_file` when given.
pub fn emit_output(
    output: &str,
    format: OutputFormat,
    output_file: Option<&std::path::Path>,
) -> Result<()> {
    if let Some(path) = output_file {
        write_to_file(output, path)
            .with_context(|| format!("Failed to write output to {}", path.display()))?;
        eprintln!(
            "Results written to {} ({:?} format)",
            path.display(),
            format
        );
    } else {
        print!("{}", output);
    }
    Ok(())
}

/// Resolve the formatter named by `--output`.
pub fn resolve_formatter(
    output_format: &str,
) -> Result<(OutputFormat, Box<dyn crate::formatters::Formatter>)> {
    let format = OutputFormat::from_str(output_format)?;
    Ok((format, get_formatter(format)))
}
