//! NDJSON formatter implementation.
//!
//! Responsibilities:
//! - Format alerts as NDJSON (Newline Delimited JSON), one alert per line.
//!
//! Invariants:
//! - Each line is a valid JSON object
//! - Records are separated by newlines (no trailing comma)
//! - Suitable for streaming and log processing pipelines

use crate::formatters::Formatter;
use anyhow::Result;
use pagerduty_client::{Alert, ListResponseModel};
use serde::Serialize;

/// NDJSON formatter.
pub struct NdjsonFormatter;

fn to_ndjson<'a, T: Serialize + 'a>(items: impl IntoIterator<Item = &'a T>) -> Result<String> {
    let mut output = String::new();
    for item in items {
        output.push_str(&serde_json::to_string(item)?);
        output.push('\n');
    }
    Ok(output)
}

impl Formatter for NdjsonFormatter {
    fn format_alerts(&self, alerts: &ListResponseModel<Alert>) -> Result<String> {
        to_ndjson(alerts)
    }
}
