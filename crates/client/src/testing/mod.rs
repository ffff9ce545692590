//! Testing utilities for PagerDuty client tests.
//!
//! This module provides helper functions for loading test fixtures,
//! generating alert records, and a scripted [`PageSource`] that serves canned
//! pages without HTTP.
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use pagerduty_client::testing::{ScriptedPageSource, load_fixture, numbered_records};
//!
//! let fixture = load_fixture("alerts/list_alerts_page1.json");
//! let source = ScriptedPageSource::from_batches(vec![numbered_records(0..2)]);
//! ```

#[cfg(any(feature = "test-utils", test))]
pub mod generators;

pub use generators::{AlertRecordGenerator, numbered_records};

use std::future::Future;
use std::path::Path;
use std::sync::Mutex;

use crate::error::{ClientError, Result};
use crate::pagination::{Page, PageSource, QueryParams};

/// Load a JSON fixture file from the fixtures directory.
///
/// # Arguments
/// * `fixture_path` - Relative path within the fixtures directory (e.g., "alerts/list_alerts_page1.json")
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let full_path = manifest_dir.join("fixtures").join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// A [`PageSource`] that replays a fixed list of pages in call order.
///
/// Every request is recorded. Calls past the last scripted page get an empty,
/// final page.
#[derive(Debug, Default)]
pub struct ScriptedPageSource {
    pages: Vec<Page>,
    fail_on: Option<usize>,
    calls: Mutex<Vec<(String, QueryParams)>>,
}

impl ScriptedPageSource {
    pub fn new(pages: Vec<Page>) -> Self {
        Self {
            pages,
            ..Self::default()
        }
    }

    /// One page per batch; every page except the last reports `more`.
    pub fn from_batches(batches: Vec<Vec<crate::models::Record>>) -> Self {
        let last = batches.len().saturating_sub(1);
        let pages = batches
            .into_iter()
            .enumerate()
            .map(|(i, records)| Page::new(records, i < last))
            .collect();
        Self::new(pages)
    }

    /// Give every page that reports `more` a `next_cursor` of `cursor-<n>`,
    /// where `n` is the index of the following page.
    pub fn with_cursors(mut self) -> Self {
        for (i, page) in self.pages.iter_mut().enumerate() {
            if page.more {
                page.next_cursor = Some(format!("cursor-{}", i + 1));
            }
        }
        self
    }

    /// Fail the zero-based `page_index`-th request with a 500 API error.
    pub fn fail_on(mut self, page_index: usize) -> Self {
        self.fail_on = Some(page_index);
        self
    }

    /// Recorded `(entity, params)` of every request, in order.
    pub fn calls(&self) -> Vec<(String, QueryParams)> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}

impl PageSource for ScriptedPageSource {
    fn fetch_page(
        &self,
        entity: &str,
        params: &QueryParams,
    ) -> impl Future<Output = Result<Page>> + Send {
        let index = {
            let mut calls = self
                .calls
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            calls.push((entity.to_string(), params.clone()));
            calls.len() - 1
        };

        let result = if self.fail_on == Some(index) {
            Err(ClientError::ApiError {
                status: 500,
                url: entity.to_string(),
                message: "scripted failure".to_string(),
            })
        } else {
            Ok(self.pages.get(index).cloned().unwrap_or_default())
        };
        std::future::ready(result)
    }
}
