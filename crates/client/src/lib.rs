//! PagerDuty REST API client.
//!
//! This crate provides a typed client for listing PagerDuty incident alerts.
//! It is built from three layers:
//! - [`pagination`]: a generic engine that walks a paginated collection until
//!   the server runs out of records or a record budget is reached.
//! - [`models`]: normalization of loosely typed JSON records into typed
//!   resources such as [`Alert`].
//! - [`PagerDutyClient`]: the HTTP transport, authenticated with a REST API
//!   key or an OAuth token.

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod pagination;
mod serde_helpers;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use auth::AuthStrategy;
pub use client::PagerDutyClient;
pub use client::builder::PagerDutyClientBuilder;
pub use endpoints::list_alerts;
pub use error::{ClientError, Result, ValidationError};
pub use models::{
    Alert, IncidentReference, ListResponseModel, Record, Resource, ServiceReference, WireType,
};
pub use pagination::{ListRequest, Page, PageCursor, PageSource, QueryParams, paginate};
