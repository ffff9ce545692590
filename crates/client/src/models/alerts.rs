//! Alert models for PagerDuty incidents.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::record::{FieldKind, FieldSpec, Resource, TypeTag, WireType};
use super::references::{IncidentReference, ServiceReference};
use crate::serde_helpers::non_empty_string_from_number_or_string;

/// One alert raised against an incident.
///
/// `klass` is the alert's "class" attribute, written to the wire under the
/// key `"class"`. The `type` discriminator is always `"alert"` and cannot be
/// set.
///
/// Raw API records go through [`Resource::from_record`], which also accepts
/// `"klass"` (preferred over `"class"` when both are set) and coerces numeric
/// ids. The plain serde `Deserialize` impl only reads the normalized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    #[serde(deserialize_with = "non_empty_string_from_number_or_string")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incident: Option<IncidentReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<ServiceReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_key: Option<String>,
    #[serde(rename = "class", default, skip_serializing_if = "Option::is_none")]
    pub klass: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integration: Option<Map<String, Value>>,
    #[serde(rename = "type", skip_deserializing)]
    resource_type: TypeTag<Alert>,
}

impl WireType for Alert {
    const TYPE: &'static str = "alert";
}

impl Resource for Alert {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("id", FieldKind::Id),
        FieldSpec::new("summary", FieldKind::String),
        FieldSpec::new("status", FieldKind::String),
        FieldSpec::new("severity", FieldKind::String),
        FieldSpec::new("created_at", FieldKind::Timestamp),
        FieldSpec::new("updated_at", FieldKind::Timestamp),
        FieldSpec::new("incident", FieldKind::Reference),
        FieldSpec::new("service", FieldKind::Reference),
        FieldSpec::new("html_url", FieldKind::String),
        FieldSpec::new("alert_key", FieldKind::String),
        FieldSpec::new("class", FieldKind::String).with_aliases(&["klass"]),
        FieldSpec::new("source", FieldKind::String),
        FieldSpec::new("component", FieldKind::String),
        FieldSpec::new("group", FieldKind::String),
        FieldSpec::new("body", FieldKind::Object),
        FieldSpec::new("details", FieldKind::Object),
        FieldSpec::new("integration", FieldKind::Object),
    ];
}

impl Alert {
    /// An alert with only its identifier set.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            summary: None,
            status: None,
            severity: None,
            created_at: None,
            updated_at: None,
            incident: None,
            service: None,
            html_url: None,
            alert_key: None,
            klass: None,
            source: None,
            component: None,
            group: None,
            body: None,
            details: None,
            integration: None,
            resource_type: TypeTag::new(),
        }
    }

    /// Always `"alert"`.
    pub fn resource_type(&self) -> &'static str {
        Self::TYPE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> super::super::record::Record {
        match value {
            Value::Object(map) => map,
            _ => panic!("test record must be an object"),
        }
    }

    fn sample() -> Value {
        json!({
            "id": "A1",
            "summary": "CPU above 90%",
            "status": "triggered",
            "severity": "critical",
            "created_at": "2024-01-15T10:30:00Z",
            "updated_at": "2024-01-15T10:35:00+02:00",
            "class": "threshold_breach",
            "incident": {"id": "I123", "type": "incident_reference"},
            "service": {"id": "S456", "type": "service_reference"},
            "body": {"contexts": [], "details": {"cpu": 93.5}},
            "alert_key": "host-1/cpu",
            "html_url": "https://example.pagerduty.com/alerts/A1"
        })
    }

    #[test]
    fn test_full_record_normalizes() {
        let alert = Alert::from_record(record(sample())).unwrap();
        assert_eq!(alert.id, "A1");
        assert_eq!(alert.klass.as_deref(), Some("threshold_breach"));
        assert_eq!(alert.incident.as_ref().map(|r| r.id.as_str()), Some("I123"));
        assert_eq!(alert.service.as_ref().map(|r| r.id.as_str()), Some("S456"));
        assert_eq!(
            alert.created_at.map(|t| t.to_rfc3339()),
            Some("2024-01-15T10:30:00+00:00".to_string())
        );
        assert_eq!(alert.resource_type(), "alert");
    }

    #[test]
    fn test_id_only_record_is_valid() {
        let alert = Alert::from_record(record(json!({"id": "A1"}))).unwrap();
        assert_eq!(alert, Alert::new("A1"));
        assert!(alert.created_at.is_none());
        assert!(alert.klass.is_none());
    }

    #[test]
    fn test_missing_id_fails_on_id() {
        let err = Alert::from_record(record(json!({"summary": "no id"}))).unwrap_err();
        assert_eq!(err.field, "id");
    }

    #[test]
    fn test_empty_id_fails_on_id() {
        let err = Alert::from_record(record(json!({"id": ""}))).unwrap_err();
        assert_eq!(err.field, "id");
    }

    #[test]
    fn test_numeric_id_is_coerced() {
        let alert = Alert::from_record(record(json!({"id": 42}))).unwrap();
        assert_eq!(alert.id, "42");
    }

    #[test]
    fn test_wrong_timestamp_type_names_field() {
        let err = Alert::from_record(record(json!({"id": "A1", "created_at": true}))).unwrap_err();
        assert_eq!(err.field, "created_at");
    }

    #[test]
    fn test_unix_seconds_created_at_is_utc() {
        let alert =
            Alert::from_record(record(json!({"id": "A1", "created_at": 1_705_314_600}))).unwrap();
        assert_eq!(
            alert.created_at.map(|t| t.to_rfc3339()),
            Some("2024-01-15T10:30:00+00:00".to_string())
        );
    }

    #[test]
    fn test_numeric_reference_id_is_coerced() {
        let alert = Alert::from_record(record(json!({
            "id": "A1",
            "incident": {"id": 123, "type": "incident_reference"}
        })))
        .unwrap();
        assert_eq!(alert.incident.map(|r| r.id), Some("123".to_string()));
    }

    #[test]
    fn test_wrong_body_type_names_field() {
        let err = Alert::from_record(record(json!({"id": "A1", "body": "text"}))).unwrap_err();
        assert_eq!(err.field, "body");
    }

    #[test]
    fn test_class_round_trip_never_emits_klass() {
        let alert = Alert::from_record(record(json!({"id": "A1", "class": "network"}))).unwrap();
        let wire = alert.to_record().unwrap();
        assert_eq!(wire["class"], json!("network"));
        assert!(!wire.contains_key("klass"));
    }

    #[test]
    fn test_klass_input_is_accepted() {
        let alert = Alert::from_record(record(json!({"id": "A1", "klass": "disk"}))).unwrap();
        assert_eq!(alert.klass.as_deref(), Some("disk"));
        assert_eq!(alert.to_record().unwrap()["class"], json!("disk"));
    }

    #[test]
    fn test_klass_wins_over_class() {
        let alert = Alert::from_record(record(
            json!({"id": "A1", "class": "network", "klass": "disk"}),
        ))
        .unwrap();
        assert_eq!(alert.klass.as_deref(), Some("disk"));
        assert_eq!(alert.to_record().unwrap()["class"], json!("disk"));
    }

    #[test]
    fn test_null_class_does_not_discard_klass() {
        let alert =
            Alert::from_record(record(json!({"id": "A1", "class": null, "klass": "disk"})))
                .unwrap();
        assert_eq!(alert.klass.as_deref(), Some("disk"));
    }

    #[test]
    fn test_serde_decode_reads_normalized_form_only() {
        let alert: Alert =
            serde_json::from_value(json!({"id": "A1", "class": "network", "klass": "disk"}))
                .unwrap();
        assert_eq!(alert.klass.as_deref(), Some("network"));
    }

    #[test]
    fn test_type_is_always_alert() {
        let alert =
            Alert::from_record(record(json!({"id": "A1", "type": "incident"}))).unwrap();
        assert_eq!(alert.resource_type(), "alert");
        assert_eq!(alert.to_record().unwrap()["type"], json!("alert"));
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let alert = Alert::from_record(record(json!({
            "id": "A1",
            "suppressed": false,
            "first_trigger_log_entry": {"id": "L1"},
            "resolved_at": null
        })))
        .unwrap();
        assert_eq!(alert.id, "A1");
    }

    #[test]
    fn test_none_fields_are_omitted_but_empty_string_kept() {
        let mut alert = Alert::new("A1");
        alert.summary = Some(String::new());
        let wire = alert.to_record().unwrap();
        assert_eq!(wire["summary"], json!(""));
        assert!(!wire.contains_key("status"));
        assert!(!wire.contains_key("class"));
    }

    #[test]
    fn test_body_is_passed_through_unchanged() {
        let body = json!({"cef_details": {"nested": [1, {"a": null}]}, "type": "alert_body"});
        let alert =
            Alert::from_record(record(json!({"id": "A1", "body": body.clone()}))).unwrap();
        assert_eq!(Value::Object(alert.body.clone().unwrap()), body);
        assert_eq!(alert.to_record().unwrap()["body"], body);
    }

    #[test]
    fn test_serialize_normalize_serialize_is_idempotent() {
        let alert = Alert::from_record(record(sample())).unwrap();
        let first = alert.to_record().unwrap();
        let again = Alert::from_record(first.clone()).unwrap();
        let second = again.to_record().unwrap();
        assert_eq!(first, second);
        assert_eq!(alert, again);
    }

    #[test]
    fn test_references_serialize_with_kind_type() {
        let alert = Alert::from_record(record(json!({
            "id": "A1",
            "incident": {"id": "I9", "type": "incident"}
        })))
        .unwrap();
        assert_eq!(
            alert.to_record().unwrap()["incident"],
            json!({"id": "I9", "type": "incident_reference"})
        );
    }
}
