//! Generic pagination over PagerDuty collection endpoints.
//!
//! Responsibilities:
//! - Define the page-fetch seam ([`PageSource`]) between the engine and a transport.
//! - Walk a collection page by page with offset or cursor continuation.
//! - Enforce a maximum record budget and preserve server order.
//!
//! Does NOT handle:
//! - HTTP, authentication, or retries (see [`crate::client`] and [`crate::endpoints`]).
//! - Normalizing raw records into typed models (see [`crate::models::record`]).
//!
//! Invariants:
//! - Pages are requested strictly one after another.
//! - The result never holds more than `maximum_records` records.
//! - Any page failure aborts the walk; records gathered so far are dropped.

use std::future::Future;

use pagerduty_config::constants::DEFAULT_PAGE_SIZE;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::models::Record;

/// Query parameter carrying the page size.
pub const LIMIT_PARAM: &str = "limit";
/// Query parameter carrying the offset of the first record on a page.
pub const OFFSET_PARAM: &str = "offset";
/// Query parameter carrying an opaque continuation token.
pub const CURSOR_PARAM: &str = "cursor";

/// Ordered query parameters sent with every page request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, replacing any existing value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    /// Builder form of [`QueryParams::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let pos = self.0.iter().position(|(k, _)| k == key)?;
        Some(self.0.remove(pos).1)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_pairs(&self) -> &[(String, String)] {
        &self.0
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

/// One page of raw records returned by a [`PageSource`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub records: Vec<Record>,
    /// Server reports more records after this page.
    pub more: bool,
    /// Continuation token for cursor-paginated endpoints.
    pub next_cursor: Option<String>,
}

impl Page {
    pub fn new(records: Vec<Record>, more: bool) -> Self {
        Self {
            records,
            more,
            next_cursor: None,
        }
    }

    pub fn with_next_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.next_cursor = Some(cursor.into());
        self
    }
}

/// Where the next page starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageCursor {
    Offset(usize),
    Cursor(String),
}

impl PageCursor {
    /// Write this position into `params`, clearing the other continuation key.
    pub fn apply(&self, params: &mut QueryParams) {
        match self {
            Self::Offset(offset) => {
                params.remove(CURSOR_PARAM);
                params.insert(OFFSET_PARAM, offset.to_string());
            }
            Self::Cursor(cursor) => {
                params.remove(OFFSET_PARAM);
                params.insert(CURSOR_PARAM, cursor.clone());
            }
        }
    }
}

/// Fetches one page of a collection.
///
/// Implemented by [`crate::PagerDutyClient`] over HTTP and by scripted fakes in tests.
pub trait PageSource {
    fn fetch_page(
        &self,
        entity: &str,
        params: &QueryParams,
    ) -> impl Future<Output = Result<Page>> + Send;
}

/// A fully described list call: which collection, which filters, how many records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub entity: String,
    pub params: QueryParams,
    pub maximum_records: usize,
}

impl ListRequest {
    /// Run the request through [`paginate`].
    pub async fn execute<S: PageSource>(self, source: &S) -> Result<Vec<Record>> {
        paginate(source, &self.entity, self.params, self.maximum_records).await
    }
}

/// Collect up to `maximum_records` raw records from `entity`.
///
/// Sends `limit` (defaulting to the configured page size when the caller gave
/// none) and an `offset`, switching to `cursor` as soon as the server returns a
/// `next_cursor`. Stops when the server reports no more data, a page comes back
/// empty, or the budget is reached.
pub async fn paginate<S: PageSource>(
    source: &S,
    entity: &str,
    mut params: QueryParams,
    maximum_records: usize,
) -> Result<Vec<Record>> {
    if maximum_records == 0 {
        debug!(entity, "Zero record budget, skipping fetch");
        return Ok(Vec::new());
    }

    if params.get(LIMIT_PARAM).is_none() {
        params.insert(LIMIT_PARAM, DEFAULT_PAGE_SIZE.to_string());
    }

    let mut records: Vec<Record> = Vec::new();
    let mut position = PageCursor::Offset(0);
    let mut pages = 0usize;

    loop {
        position.apply(&mut params);
        let page = source.fetch_page(entity, &params).await?;
        pages += 1;

        let received = page.records.len();
        debug!(
            entity,
            page = pages,
            received,
            more = page.more,
            has_cursor = page.next_cursor.is_some(),
            "Fetched page"
        );

        if received == 0 {
            if page.more {
                warn!(entity, page = pages, "Server reported more records but sent an empty page");
            }
            break;
        }

        records.extend(page.records);
        if records.len() >= maximum_records {
            records.truncate(maximum_records);
            break;
        }
        if !page.more {
            break;
        }

        position = match (page.next_cursor, position) {
            (Some(next), _) => PageCursor::Cursor(next),
            (None, PageCursor::Offset(offset)) => PageCursor::Offset(offset + received),
            (None, PageCursor::Cursor(_)) => {
                warn!(entity, page = pages, "Cursor pagination ended without a next_cursor");
                break;
            }
        };
    }

    info!(entity, pages, records = records.len(), maximum_records, "Pagination complete");
    Ok(records)
}
