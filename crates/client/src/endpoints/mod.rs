//! REST API endpoint implementations.

mod alerts;
mod pages;
mod request;
pub mod url_encoding;

pub use alerts::list_alerts;
pub use pages::{PAGERDUTY_ACCEPT, fetch_page};
pub use request::send_request_with_retry;
pub use url_encoding::encode_path_segment;
