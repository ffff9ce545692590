//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide multiple output formats: JSON, Table, and NDJSON.
//! - Implement the `Formatter` trait for alert listings.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings).
//!
//! ## Empty-State Handling
//!
//! | Format | Empty State Behavior | Example |
//! |--------|---------------------|---------|
//! | JSON | Valid empty structure | `{"response": []}` |
//! | NDJSON | No lines | `` |
//! | Table | Human message | `No alerts found.` |
//!
//! ## Missing/Null Value Handling
//!
//! JSON and NDJSON omit absent fields entirely (the wire form of the model).
//! Table output renders them as `common::DEFAULT_MISSING_VALUE`.

use anyhow::Result;
use pagerduty_client::{Alert, ListResponseModel};

mod common;
mod json;
mod ndjson;
mod table;

pub use common::write_to_file;
pub use json::JsonFormatter;
pub use ndjson::NdjsonFormatter;
pub use table::TableFormatter;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
    Ndjson,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            "ndjson" | "jsonl" => Ok(OutputFormat::Ndjson),
            _ => anyhow::bail!(
                "Invalid output format: {}. Valid options: json, table, ndjson",
                s
            ),
        }
    }
}

/// Formatter trait for different output types.
pub trait Formatter {
    /// Format the alerts of one incident.
    fn format_alerts(&self, alerts: &ListResponseModel<Alert>) -> Result<String>;
}

/// Get a formatter for the specified format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Ndjson => Box::new(NdjsonFormatter),
    }
}
