//! Lenient field readers for backend JSON.
//!
//! The backend is not strict about nulls or id types: identifiers arrive as
//! strings or numbers and optional text arrives as `null` or `""`.
//! The id readers are public so the console's own API types read ids the
//! same way as the content records.

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A string or numeric id as text; anything else is no id.
pub fn value_to_id(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Read a required identifier given as a string or a number.
pub(crate) fn id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    value_to_id(value).ok_or_else(|| D::Error::custom("expected a string or numeric id"))
}

/// Read an optional identifier given as a string, a number, or `null`.
pub fn optional_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(value_to_id))
}

/// Read a value, mapping `null` to the type's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Read optional text, treating `""` the same as `null`.
pub(crate) fn blank_as_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.trim().is_empty()))
}

/// Coalesce raw form input into an optional value.
pub(crate) fn coalesce(raw: String) -> Option<String> {
    if raw.trim().is_empty() { None } else { Some(raw) }
}
