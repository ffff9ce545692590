//! Alert endpoints for PagerDuty incidents.
//!
//! # What this module handles:
//! - Building the list request for `incidents/{id}/alerts`
//! - Normalizing the fetched records into [`Alert`]s
//!
//! # What this module does NOT handle:
//! - HTTP transport (any [`PageSource`] works, see [`crate::client`])
//! - Page walking (see [`crate::pagination`])

use pagerduty_config::constants::DEFAULT_MAX_RESULTS;
use tracing::debug;

use crate::endpoints::encode_path_segment;
use crate::error::Result;
use crate::models::{Alert, ListResponseModel, normalize_all};
use crate::pagination::{LIMIT_PARAM, ListRequest, PageSource, QueryParams};

impl ListRequest {
    /// Request for the alerts of one incident.
    ///
    /// A positive `limit` is sent as the page size and caps the result.
    /// `None` or `Some(0)` sends no `limit` and caps the result at
    /// [`DEFAULT_MAX_RESULTS`].
    pub fn for_incident_alerts(incident_id: &str, limit: Option<usize>) -> Self {
        let entity = format!("incidents/{}/alerts", encode_path_segment(incident_id));
        match limit.filter(|&n| n > 0) {
            Some(n) => Self {
                entity,
                params: QueryParams::new().with(LIMIT_PARAM, n.to_string()),
                maximum_records: n,
            },
            None => Self {
                entity,
                params: QueryParams::new(),
                maximum_records: DEFAULT_MAX_RESULTS,
            },
        }
    }
}

/// List the alerts of an incident, in server order.
///
/// A nonexistent incident surfaces as the transport's not-found error.
/// The first record that fails normalization aborts the call.
pub async fn list_alerts<S: PageSource>(
    source: &S,
    incident_id: &str,
    limit: Option<usize>,
) -> Result<ListResponseModel<Alert>> {
    debug!(incident_id, ?limit, "Listing incident alerts");

    let records = ListRequest::for_incident_alerts(incident_id, limit)
        .execute(source)
        .await?;
    let alerts = normalize_all::<Alert>(records)?;

    Ok(ListResponseModel::new(alerts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::pagination::Page;
    use crate::testing::{AlertRecordGenerator, ScriptedPageSource, numbered_records};
    use serde_json::json;

    #[test]
    fn test_request_without_limit() {
        let request = ListRequest::for_incident_alerts("PINC1", None);
        assert_eq!(request.entity, "incidents/PINC1/alerts");
        assert!(request.params.is_empty());
        assert_eq!(request.maximum_records, 1000);
    }

    #[test]
    fn test_request_with_limit() {
        let request = ListRequest::for_incident_alerts("PINC1", Some(25));
        assert_eq!(request.params.as_pairs(), &[("limit".to_string(), "25".to_string())]);
        assert_eq!(request.maximum_records, 25);
    }

    #[test]
    fn test_zero_limit_is_unset() {
        assert_eq!(
            ListRequest::for_incident_alerts("PINC1", Some(0)),
            ListRequest::for_incident_alerts("PINC1", None)
        );
    }

    #[test]
    fn test_incident_id_is_encoded() {
        let request = ListRequest::for_incident_alerts("P1/../users", None);
        assert_eq!(request.entity, "incidents/P1%2F..%2Fusers/alerts");
    }

    #[tokio::test]
    async fn test_list_alerts_normalizes_in_order() {
        let records = AlertRecordGenerator::new().with_incident("PINC1").generate_many(5);
        let source = ScriptedPageSource::from_batches(vec![
            records[..3].to_vec(),
            records[3..].to_vec(),
        ]);

        let alerts = list_alerts(&source, "PINC1", None).await.unwrap();
        let ids: Vec<_> = alerts.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["A0", "A1", "A2", "A3", "A4"]);
        assert!(alerts.iter().all(|a| a.resource_type() == "alert"));
        assert_eq!(source.calls()[0].0, "incidents/PINC1/alerts");
    }

    #[tokio::test]
    async fn test_list_alerts_respects_limit() {
        let source = ScriptedPageSource::from_batches(vec![
            numbered_records(0..25),
            numbered_records(25..50),
        ]);
        let alerts = list_alerts(&source, "PINC1", Some(25)).await.unwrap();
        assert_eq!(alerts.len(), 25);
        assert_eq!(source.call_count(), 1);
        assert_eq!(source.calls()[0].1.get("limit"), Some("25"));
    }

    #[tokio::test]
    async fn test_invalid_record_aborts_with_position() {
        let mut records = numbered_records(0..3);
        records[1].insert("created_at".to_string(), json!("yesterday"));
        let source = ScriptedPageSource::new(vec![Page::new(records, false)]);

        let err = list_alerts(&source, "PINC1", None).await.unwrap_err();
        match err {
            ClientError::InvalidRecord { index, source } => {
                assert_eq!(index, 1);
                assert_eq!(source.field, "created_at");
            }
            other => panic!("expected InvalidRecord, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let source = ScriptedPageSource::from_batches(vec![numbered_records(0..2)]).fail_on(0);
        let err = list_alerts(&source, "PINC1", None).await.unwrap_err();
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_empty_collection() {
        let source = ScriptedPageSource::new(vec![Page::new(Vec::new(), false)]);
        let alerts = list_alerts(&source, "PINC1", None).await.unwrap();
        assert!(alerts.is_empty());
    }
}
