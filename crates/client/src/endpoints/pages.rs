//! Page endpoint for PagerDuty collection listings.
//!
//! # What this module handles:
//! - One `GET {base_url}/{entity}` request with pagination parameters
//! - Decoding PagerDuty's list envelope into a [`Page`]
//!
//! # What this module does NOT handle:
//! - Walking multiple pages (see [`crate::pagination`])
//! - Typed decoding of the records (see [`crate::models::record`])

use std::time::Duration;

use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::auth::AuthStrategy;
use crate::endpoints::send_request_with_retry;
use crate::error::{ClientError, Result};
use crate::models::Record;
use crate::pagination::{Page, QueryParams};
use crate::serde_helpers::{json_type_name, opt_usize_from_string_or_number};

/// Media type selecting REST API v2.
pub const PAGERDUTY_ACCEPT: &str = "application/vnd.pagerduty+json;version=2";

/// `{"<collection>": [...], "limit", "offset", "more", "total", "next_cursor"}`
#[derive(Debug, Deserialize)]
struct PageEnvelope {
    #[serde(default)]
    more: Option<bool>,
    #[serde(default)]
    next_cursor: Option<String>,
    #[serde(default, deserialize_with = "opt_usize_from_string_or_number")]
    limit: Option<usize>,
    #[serde(default, deserialize_with = "opt_usize_from_string_or_number")]
    offset: Option<usize>,
    #[serde(default, deserialize_with = "opt_usize_from_string_or_number")]
    total: Option<usize>,
    #[serde(flatten)]
    rest: Map<String, Value>,
}

/// Key holding the records: the last path segment of `entity`.
pub(crate) fn collection_key(entity: &str) -> &str {
    entity
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(entity)
}

/// Decode one list envelope.
pub(crate) fn parse_page(body: &str, collection: &str) -> Result<Page> {
    let mut envelope: PageEnvelope = serde_json::from_str(body).map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse {collection} page: {e}"))
    })?;

    let items = match envelope.rest.remove(collection) {
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(ClientError::InvalidResponse(format!(
                "Expected `{collection}` to be an array, found {}",
                json_type_name(&other)
            )));
        }
        None => {
            return Err(ClientError::InvalidResponse(format!(
                "Response is missing the `{collection}` collection"
            )));
        }
    };

    let records = items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::Object(record) => Ok(record),
            other => Err(ClientError::InvalidResponse(format!(
                "Item {i} of `{collection}` is {}, expected an object",
                json_type_name(&other)
            ))),
        })
        .collect::<Result<Vec<Record>>>()?;

    if envelope.more.is_none() {
        warn!(collection, "List envelope has no `more` flag, treating as last page");
    }
    debug!(
        collection,
        limit = envelope.limit,
        offset = envelope.offset,
        total = envelope.total,
        "Decoded page envelope"
    );

    Ok(Page {
        records,
        more: envelope.more.unwrap_or(false),
        next_cursor: envelope.next_cursor.filter(|c| !c.is_empty()),
    })
}

/// Fetch one page of `entity`.
pub async fn fetch_page(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    entity: &str,
    params: &QueryParams,
    max_retries: usize,
    timeout: Duration,
) -> Result<Page> {
    let url = format!("{}/{}", base_url, entity.trim_start_matches('/'));
    debug!(url = %url, params = ?params.as_pairs(), "Fetching page");

    let builder = client
        .get(&url)
        .header(ACCEPT, PAGERDUTY_ACCEPT)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, auth.authorization_header())
        .query(params.as_pairs());

    let response = send_request_with_retry(builder, &url, max_retries, timeout).await?;
    let body = response
        .text()
        .await
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to read page body: {e}")))?;

    parse_page(&body, collection_key(entity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_key_is_last_segment() {
        assert_eq!(collection_key("incidents/P1/alerts"), "alerts");
        assert_eq!(collection_key("incidents/P1/alerts/"), "alerts");
        assert_eq!(collection_key("services"), "services");
    }

    #[test]
    fn test_parse_page_reads_envelope() {
        let body = r#"{
            "alerts": [{"id": "A1"}, {"id": "A2"}],
            "limit": 2, "offset": 0, "more": true, "total": null
        }"#;
        let page = parse_page(body, "alerts").unwrap();
        assert_eq!(page.records.len(), 2);
        assert!(page.more);
        assert_eq!(page.next_cursor, None);
    }

    #[test]
    fn test_parse_page_keeps_cursor() {
        let body = r#"{"alerts": [], "more": false, "next_cursor": "abc"}"#;
        let page = parse_page(body, "alerts").unwrap();
        assert_eq!(page.next_cursor.as_deref(), Some("abc"));
    }

    #[test]
    fn test_parse_page_ignores_empty_cursor() {
        let body = r#"{"alerts": [], "more": false, "next_cursor": ""}"#;
        assert_eq!(parse_page(body, "alerts").unwrap().next_cursor, None);
    }

    #[test]
    fn test_parse_page_missing_more_means_last_page() {
        let page = parse_page(r#"{"alerts": [{"id": "A1"}]}"#, "alerts").unwrap();
        assert!(!page.more);
    }

    #[test]
    fn test_parse_page_missing_collection() {
        let err = parse_page(r#"{"incidents": []}"#, "alerts").unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse(_)));
    }

    #[test]
    fn test_parse_page_rejects_non_object_items() {
        let err = parse_page(r#"{"alerts": [{"id": "A1"}, 7]}"#, "alerts").unwrap_err();
        assert!(err.to_string().contains("Item 1"));
    }

    #[test]
    fn test_parse_page_rejects_non_array_collection() {
        let err = parse_page(r#"{"alerts": {"id": "A1"}}"#, "alerts").unwrap_err();
        assert!(err.to_string().contains("found object"));
    }
}
