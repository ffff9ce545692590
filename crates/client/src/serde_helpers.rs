//! Serde helpers for PagerDuty's loosely typed JSON.
//!
//! Responsibilities:
//! - Accept either JSON numbers or strings for identifier and counter fields.
//! - Describe JSON value types for validation messages.
//!
//! Explicitly does NOT handle:
//! - Field aliasing or per-resource validation (see `models::record`).
//!
//! Invariants / assumptions:
//! - Identifiers are opaque strings; numeric identifiers are rendered with `to_string`.
//! - These helpers must not log or print payload contents.

use serde::Deserialize;
use serde::de::Error as _;
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum U64OrString {
    U64(u64),
    I64(i64),
    String(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    U64(u64),
    I64(i64),
    F64(f64),
}

pub fn opt_usize_from_string_or_number<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<U64OrString>::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(U64OrString::U64(v)) => usize::try_from(v).map(Some).map_err(D::Error::custom),
        Some(U64OrString::I64(v)) => usize::try_from(v).map(Some).map_err(D::Error::custom),
        Some(U64OrString::String(s)) => s.parse::<usize>().map(Some).map_err(D::Error::custom),
    }
}

/// Deserialize a required identifier, coercing numbers and rejecting empty strings.
pub fn non_empty_string_from_number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::U64(v) => v.to_string(),
        StringOrNumber::I64(v) => v.to_string(),
        StringOrNumber::F64(v) => v.to_string(),
    };
    if value.is_empty() {
        return Err(D::Error::custom("must not be empty"));
    }
    Ok(value)
}

/// Human readable JSON type name used in validation messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
