//! Property-based tests for the pagination engine and alert normalization.
//!
//! This module uses proptest to verify:
//! - The result length is `min(total records, budget)` for any page layout
//! - Records come back in server order
//! - No request is issued once the budget is met
//! - Normalizing then serializing alerts is stable and never emits `klass`

use pagerduty_client::models::{Alert, Resource};
use pagerduty_client::testing::generators::proptest_strategies::{
    alert_record_strategy, page_sizes_strategy,
};
use pagerduty_client::testing::{ScriptedPageSource, numbered_records};
use pagerduty_client::{QueryParams, paginate};
use proptest::prelude::*;
use serde_json::json;

/// Split `0..sum(sizes)` into consecutive batches of the given sizes.
fn batches(sizes: &[usize]) -> Vec<Vec<pagerduty_client::Record>> {
    let mut start = 0;
    sizes
        .iter()
        .map(|&size| {
            let batch = numbered_records(start..start + size);
            start += size;
            batch
        })
        .collect()
}

fn run<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime")
        .block_on(future)
}

proptest! {
    #[test]
    fn prop_length_is_min_of_total_and_budget(
        sizes in page_sizes_strategy(),
        budget in 0usize..120,
    ) {
        let total: usize = sizes.iter().sum();
        let source = ScriptedPageSource::from_batches(batches(&sizes));

        let records = run(paginate(&source, "incidents/P1/alerts", QueryParams::new(), budget))
            .unwrap();

        prop_assert_eq!(records.len(), total.min(budget));
    }

    #[test]
    fn prop_order_is_preserved(sizes in page_sizes_strategy()) {
        let source = ScriptedPageSource::from_batches(batches(&sizes));

        let records = run(paginate(&source, "incidents/P1/alerts", QueryParams::new(), 1000))
            .unwrap();

        for (i, record) in records.iter().enumerate() {
            prop_assert_eq!(&record["id"], &json!(format!("A{i}")));
        }
    }

    #[test]
    fn prop_no_request_after_budget_is_met(
        sizes in page_sizes_strategy(),
        budget in 1usize..60,
    ) {
        let source = ScriptedPageSource::from_batches(batches(&sizes));
        run(paginate(&source, "incidents/P1/alerts", QueryParams::new(), budget)).unwrap();

        // Pages needed to reach the budget, or every page when the data runs out first.
        let mut seen = 0;
        let mut needed = 0;
        for size in &sizes {
            needed += 1;
            seen += size;
            if seen >= budget {
                break;
            }
        }
        prop_assert_eq!(source.call_count(), needed.max(1));
    }

    #[test]
    fn prop_alert_wire_form_is_stable(record in alert_record_strategy()) {
        let alert = Alert::from_record(record).unwrap();
        let first = alert.to_record().unwrap();
        let second = Alert::from_record(first.clone()).unwrap().to_record().unwrap();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&first["type"], &json!("alert"));
        prop_assert!(!first.contains_key("klass"));
    }
}
