//! JSON formatter implementation.
//!
//! Responsibilities:
//! - Format alert listings as pretty-printed JSON in the `{"response": [...]}` envelope.
//!
//! Does NOT handle:
//! - Other output formats.

use crate::formatters::Formatter;
use anyhow::Result;
use pagerduty_client::{Alert, ListResponseModel};

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_alerts(&self, alerts: &ListResponseModel<Alert>) -> Result<String> {
        let mut output = serde_json::to_string_pretty(alerts)?;
        output.push('\n');
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_format_alerts_uses_response_envelope() {
        let mut alert = Alert::new("PT4KHLK");
        alert.klass = Some("cpu".to_string());
        let alerts = ListResponseModel::new(vec![alert]);

        let output = JsonFormatter.format_alerts(&alerts).unwrap();
        let parsed: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(
            parsed,
            json!({"response": [{"id": "PT4KHLK", "class": "cpu", "type": "alert"}]})
        );
    }

    #[test]
    fn test_format_empty_alerts() {
        let output = JsonFormatter
            .format_alerts(&ListResponseModel::default())
            .unwrap();
        let parsed: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, json!({"response": []}));
    }
}
