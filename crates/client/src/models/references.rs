//! Reference stubs pointing at other PagerDuty resources.
//!
//! A reference carries only the target's identifier plus a `type`
//! discriminator naming the kind of target. The discriminator is derived from
//! the reference kind, so an input `type` is accepted but never trusted.

use std::fmt;
use std::marker::PhantomData;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::record::WireType;
use crate::serde_helpers::non_empty_string_from_number_or_string;

/// Marker for references to incidents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncidentKind {}

impl WireType for IncidentKind {
    const TYPE: &'static str = "incident_reference";
}

/// Marker for references to services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {}

impl WireType for ServiceKind {
    const TYPE: &'static str = "service_reference";
}

/// `{ "id": ..., "type": K::TYPE }`
pub struct Reference<K> {
    pub id: String,
    kind: PhantomData<K>,
}

pub type IncidentReference = Reference<IncidentKind>;
pub type ServiceReference = Reference<ServiceKind>;

impl<K: WireType> Reference<K> {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: PhantomData,
        }
    }

    /// The `type` this reference serializes with.
    pub fn reference_type(&self) -> &'static str {
        K::TYPE
    }
}

impl<K> Clone for Reference<K> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            kind: PhantomData,
        }
    }
}

impl<K> PartialEq for Reference<K> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<K> Eq for Reference<K> {}

impl<K: WireType> fmt::Debug for Reference<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reference")
            .field("id", &self.id)
            .field("type", &K::TYPE)
            .finish()
    }
}

impl<K: WireType> Serialize for Reference<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Reference", 2)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("type", K::TYPE)?;
        state.end()
    }
}

#[derive(Deserialize)]
struct RawReference {
    #[serde(deserialize_with = "non_empty_string_from_number_or_string")]
    id: String,
}

impl<'de, K: WireType> Deserialize<'de> for Reference<K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawReference::deserialize(deserializer)?;
        Ok(Self::new(raw.id))
    }
}
