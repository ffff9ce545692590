//! Record normalization shared by every resource model.
//!
//! Responsibilities:
//! - Define the raw [`Record`] shape produced by the pagination engine.
//! - Describe each resource's wire fields in a [`FieldSpec`] table: canonical
//!   key, accepted input aliases, and expected JSON kind.
//! - Validate and rename a raw record against that table before typed decoding,
//!   so failures name the offending field.
//!
//! Does NOT handle:
//! - Fetching records (see [`crate::pagination`]).
//! - Resource-specific field semantics (see the resource modules).
//!
//! Invariants:
//! - Unknown keys are preserved in the record and ignored by typed decoding.
//! - Aliases are looked up before the canonical key. The first non-null value
//!   wins and every other spelling is dropped.
//! - `null` is equivalent to an absent optional field.

use std::fmt;
use std::marker::PhantomData;

use chrono::DateTime;
use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::serde_helpers::json_type_name;

/// One raw JSON object as returned by the API.
pub type Record = Map<String, Value>;

/// Expected JSON shape of a declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Required identifier: non-empty string, numbers are coerced.
    Id,
    /// Optional opaque string.
    String,
    /// Optional RFC 3339 timestamp with offset. Integer Unix seconds are
    /// converted to a UTC timestamp.
    Timestamp,
    /// Optional free-form JSON object, passed through untouched.
    Object,
    /// Optional `{ "id": ..., "type": ... }` reference stub. A numeric `id` is
    /// coerced to a string.
    Reference,
}

/// One row of a resource's wire rename table.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Canonical wire key, used for input and output.
    pub key: &'static str,
    /// Additional keys accepted on input only, looked up in order before `key`.
    pub aliases: &'static [&'static str],
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(key: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            aliases: &[],
            kind,
        }
    }

    pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }
}

/// Types carrying a fixed `type` discriminator on the wire.
pub trait WireType {
    /// The literal emitted under the `type` key.
    const TYPE: &'static str;
}

/// Serialize-only marker that emits `T::TYPE`.
///
/// Used as a `skip_deserializing` field so the discriminator appears in output
/// but can never be set from input.
pub struct TypeTag<T>(PhantomData<T>);

impl<T> TypeTag<T> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for TypeTag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for TypeTag<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TypeTag<T> {}

impl<T> PartialEq for TypeTag<T> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T> Eq for TypeTag<T> {}

impl<T: WireType> fmt::Debug for TypeTag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", T::TYPE)
    }
}

impl<T: WireType> Serialize for TypeTag<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(T::TYPE)
    }
}

/// A typed resource that can be normalized from a raw [`Record`].
pub trait Resource: WireType + Serialize + DeserializeOwned {
    /// Wire rename table for this resource.
    const FIELDS: &'static [FieldSpec];

    /// Validate and decode one raw record.
    fn from_record(record: Record) -> Result<Self, ValidationError> {
        let record = normalize_record(record, Self::FIELDS)?;
        serde_json::from_value(Value::Object(record))
            .map_err(|e| ValidationError::new(Self::TYPE, e.to_string()))
    }

    /// Wire representation of this resource.
    fn to_record(&self) -> serde_json::Result<Record> {
        match serde_json::to_value(self)? {
            Value::Object(record) => Ok(record),
            other => Err(serde::ser::Error::custom(format!(
                "{} serialized to {} instead of an object",
                Self::TYPE,
                json_type_name(&other)
            ))),
        }
    }
}

/// Normalize a batch, failing on the first invalid record.
///
/// The error carries the zero-based position of the failing record.
pub fn normalize_all<T: Resource>(records: Vec<Record>) -> crate::error::Result<Vec<T>> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            T::from_record(record)
                .map_err(|source| crate::error::ClientError::InvalidRecord { index, source })
        })
        .collect()
}

/// Apply the rename table and check every declared field's JSON kind.
pub fn normalize_record(
    mut record: Record,
    fields: &[FieldSpec],
) -> Result<Record, ValidationError> {
    for field in fields {
        let mut value = None;
        for key in field.aliases.iter().copied().chain([field.key]) {
            match record.remove(key) {
                Some(found) if value.is_none() && !found.is_null() => value = Some(found),
                _ => {}
            }
        }

        if let Some(value) = check_field(field, value)? {
            record.insert(field.key.to_string(), value);
        }
    }
    Ok(record)
}

fn check_field(field: &FieldSpec, value: Option<Value>) -> Result<Option<Value>, ValidationError> {
    let value = match value {
        None | Some(Value::Null) => {
            return if field.kind == FieldKind::Id {
                Err(ValidationError::new(field.key, "field is required"))
            } else {
                Ok(None)
            };
        }
        Some(value) => value,
    };

    let mismatch = |expected: &str, found: &Value| {
        ValidationError::new(
            field.key,
            format!("expected {expected}, found {}", json_type_name(found)),
        )
    };

    match field.kind {
        FieldKind::Id => match value {
            Value::String(s) if s.is_empty() => {
                Err(ValidationError::new(field.key, "must not be empty"))
            }
            Value::String(s) => Ok(Some(Value::String(s))),
            Value::Number(n) => Ok(Some(Value::String(n.to_string()))),
            other => Err(mismatch("a string", &other)),
        },
        FieldKind::String => match value {
            Value::String(_) => Ok(Some(value)),
            other => Err(mismatch("a string", &other)),
        },
        FieldKind::Timestamp => match value {
            Value::String(s) => {
                DateTime::parse_from_rfc3339(&s).map_err(|e| {
                    ValidationError::new(field.key, format!("invalid RFC 3339 timestamp: {e}"))
                })?;
                Ok(Some(Value::String(s)))
            }
            Value::Number(n) => {
                let at = n
                    .as_i64()
                    .and_then(|secs| DateTime::from_timestamp(secs, 0))
                    .ok_or_else(|| {
                        ValidationError::new(
                            field.key,
                            format!("{n} is not a valid Unix timestamp in whole seconds"),
                        )
                    })?;
                Ok(Some(Value::String(at.to_rfc3339())))
            }
            other => Err(mismatch("an RFC 3339 timestamp string", &other)),
        },
        FieldKind::Object => match value {
            Value::Object(_) => Ok(Some(value)),
            other => Err(mismatch("an object", &other)),
        },
        FieldKind::Reference => {
            let mut obj = match value {
                Value::Object(obj) => obj,
                other => return Err(mismatch("a reference object", &other)),
            };
            let id = match obj.remove("id") {
                Some(Value::String(id)) if !id.is_empty() => id,
                Some(Value::String(_)) => {
                    return Err(ValidationError::new(
                        field.key,
                        "reference `id` must not be empty",
                    ));
                }
                Some(Value::Number(n)) => n.to_string(),
                Some(other) => {
                    return Err(ValidationError::new(
                        field.key,
                        format!(
                            "reference `id` must be a string, found {}",
                            json_type_name(&other)
                        ),
                    ));
                }
                None => return Err(ValidationError::new(field.key, "reference is missing `id`")),
            };
            obj.insert("id".to_string(), Value::String(id));
            Ok(Some(Value::Object(obj)))
        }
    }
}
