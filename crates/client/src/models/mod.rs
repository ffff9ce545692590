//! Data models for PagerDuty API responses.
//!
//! Types are organized by resource in submodules and re-exported here
//! for convenient access. Normalization of raw records lives in [`record`].

pub mod alerts;
pub mod common;
pub mod record;
pub mod references;

pub use alerts::Alert;
pub use common::ListResponseModel;
pub use record::{
    FieldKind, FieldSpec, Record, Resource, TypeTag, WireType, normalize_all, normalize_record,
};
pub use references::{IncidentKind, IncidentReference, Reference, ServiceKind, ServiceReference};
