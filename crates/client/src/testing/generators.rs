//! Test data generators using the fake crate.
//!
//! Provides raw alert records shaped like PagerDuty's `incidents/{id}/alerts`
//! payloads, for feeding the pagination engine and the normalization layer.

use chrono::{Duration, Utc};
use fake::Fake;
use fake::faker::lorem::en::{Sentence, Word};
use serde_json::{Value, json};
use std::ops::Range;

use crate::models::Record;

const STATUSES: &[&str] = &["triggered", "acknowledged", "resolved"];
const SEVERITIES: &[&str] = &["critical", "error", "warning", "info"];

/// Minimal records `{"id": "A<n>"}` for each `n` in `range`.
pub fn numbered_records(range: Range<usize>) -> Vec<Record> {
    range
        .map(|n| {
            let mut record = Record::new();
            record.insert("id".to_string(), Value::String(format!("A{n}")));
            record
        })
        .collect()
}

/// Generates realistic alert records.
///
/// # Example
/// ```ignore
/// use pagerduty_client::testing::generators::AlertRecordGenerator;
///
/// let records = AlertRecordGenerator::new()
///     .with_incident("PINC123")
///     .with_class_key("klass")
///     .generate_many(50);
/// ```
#[derive(Debug, Clone)]
pub struct AlertRecordGenerator {
    incident_id: String,
    service_id: String,
    class_key: &'static str,
    include_body: bool,
}

impl Default for AlertRecordGenerator {
    fn default() -> Self {
        Self {
            incident_id: "PINC001".to_string(),
            service_id: "PSVC001".to_string(),
            class_key: "class",
            include_body: true,
        }
    }
}

impl AlertRecordGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_incident(mut self, incident_id: &str) -> Self {
        self.incident_id = incident_id.to_string();
        self
    }

    pub fn with_service(mut self, service_id: &str) -> Self {
        self.service_id = service_id.to_string();
        self
    }

    /// Wire key used for the class attribute (`"class"` or `"klass"`).
    pub fn with_class_key(mut self, key: &'static str) -> Self {
        self.class_key = key;
        self
    }

    pub fn with_body(mut self, include: bool) -> Self {
        self.include_body = include;
        self
    }

    /// One record with id `A<index>`.
    pub fn generate_one(&self, index: usize) -> Record {
        let created = Utc::now() - Duration::seconds((0..30 * 86_400).fake::<i64>());
        let status = STATUSES[index % STATUSES.len()];
        let severity = SEVERITIES[(0..SEVERITIES.len()).fake::<usize>()];
        let summary: String = Sentence(3..8).fake();
        let class: String = Word().fake();

        let mut value = json!({
            "id": format!("A{index}"),
            "type": "alert",
            "summary": summary,
            "status": status,
            "severity": severity,
            "created_at": created.to_rfc3339(),
            "alert_key": format!("{}/{}", Word().fake::<String>(), index),
            "html_url": format!("https://example.pagerduty.com/alerts/A{index}"),
            "incident": {"id": self.incident_id, "type": "incident_reference"},
            "service": {"id": self.service_id, "type": "service_reference"},
            "suppressed": false
        });
        if let Value::Object(map) = &mut value {
            map.insert(self.class_key.to_string(), Value::String(class));
            if self.include_body {
                map.insert(
                    "body".to_string(),
                    json!({
                        "type": "alert_body",
                        "contexts": [],
                        "details": {"host": Word().fake::<String>(), "value": index}
                    }),
                );
            }
        }

        match value {
            Value::Object(map) => map,
            _ => Record::new(),
        }
    }

    pub fn generate_many(&self, count: usize) -> Vec<Record> {
        (0..count).map(|i| self.generate_one(i)).collect()
    }
}

/// Proptest strategies over raw alert records.
#[cfg(feature = "test-utils")]
pub mod proptest_strategies {
    use super::*;
    use proptest::prelude::*;

    /// Valid raw alert records with a random subset of optional fields.
    pub fn alert_record_strategy() -> impl Strategy<Value = Record> {
        (
            "[A-Z0-9]{1,14}",
            proptest::option::of("[ -~]{0,40}"),
            proptest::option::of(proptest::sample::select(STATUSES)),
            proptest::option::of("[a-z_]{1,20}"),
            any::<bool>(),
            proptest::option::of(0i64..4_000_000_000i64),
            proptest::option::of("[A-Z0-9]{1,10}"),
        )
            .prop_map(|(id, summary, status, class, use_klass, created, incident)| {
                let mut record = Record::new();
                record.insert("id".to_string(), Value::String(id));
                if let Some(summary) = summary {
                    record.insert("summary".to_string(), Value::String(summary));
                }
                if let Some(status) = status {
                    record.insert("status".to_string(), Value::String(status.to_string()));
                }
                if let Some(class) = class {
                    let key = if use_klass { "klass" } else { "class" };
                    record.insert(key.to_string(), Value::String(class));
                }
                if let Some(ts) = created.and_then(|secs| chrono::DateTime::from_timestamp(secs, 0))
                {
                    record.insert("created_at".to_string(), Value::String(ts.to_rfc3339()));
                }
                if let Some(incident) = incident {
                    record.insert("incident".to_string(), json!({"id": incident, "type": "incident"}));
                }
                record
            })
    }

    /// Page batch sizes for pagination properties.
    pub fn page_sizes_strategy() -> impl Strategy<Value = Vec<usize>> {
        proptest::collection::vec(1usize..20, 0..8)
    }
}
