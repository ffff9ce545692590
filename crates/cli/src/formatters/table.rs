//! Table formatter implementation.
//!
//! Responsibilities:
//! - Format alerts as fixed-width, human-readable columns.
//!
//! Does NOT handle:
//! - Other output formats.
//! - File I/O.

use crate::formatters::Formatter;
use crate::formatters::common::{format_missing, truncate};
use anyhow::Result;
use pagerduty_client::{Alert, ListResponseModel};

const SUMMARY_WIDTH: usize = 60;

/// Table formatter.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_alerts(&self, alerts: &ListResponseModel<Alert>) -> Result<String> {
        if alerts.is_empty() {
            return Ok("No alerts found.\n".to_string());
        }

        let mut output = String::new();
        output.push_str(&format!(
            "{:<16} {:<12} {:<10} {:<26} {}\n",
            "ID", "STATUS", "SEVERITY", "CREATED", "SUMMARY"
        ));
        output.push_str(&format!(
            "{:<16} {:<12} {:<10} {:<26} {}\n",
            "==", "======", "========", "=======", "======="
        ));

        for alert in alerts {
            let created = alert
                .created_at
                .map(|ts| ts.to_rfc3339())
                .unwrap_or_else(|| format_missing(None).to_string());
            let summary = truncate(format_missing(alert.summary.as_deref()), SUMMARY_WIDTH);

            output.push_str(&format!(
                "{:<16} {:<12} {:<10} {:<26} {}\n",
                alert.id,
                format_missing(alert.status.as_deref()),
                format_missing(alert.severity.as_deref()),
                created,
                summary
            ));
        }

        output.push_str(&format!("\nTotal: {} alert(s)\n", alerts.len()));
        Ok(output)
    }
}
