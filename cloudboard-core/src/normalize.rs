//! Response normalization helpers.
//!
//! Upstream list endpoints are inconsistent: some return a bare array, some
//! an object with a named array property, some an envelope with several
//! arrays. These helpers turn any of those shapes into a flat sequence and
//! never fail; the worst case is an empty result.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

/// Coerces a JSON value into a flat sequence.
///
/// - an array is returned item for item;
/// - an object yields the concatenation of its array-valued properties, in
///   insertion order;
/// - anything else yields an empty sequence.
pub fn to_sequence(value: &Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items.clone(),
        Value::Object(map) => map
            .values()
            .filter_map(Value::as_array)
            .flatten()
            .cloned()
            .collect(),
        _ => Vec::new(),
    }
}

/// Applies [`to_sequence`] to `container[key]` when that property is present
/// and non-null, otherwise to the whole container.
pub fn extract(container: &Value, key: &str) -> Vec<Value> {
    match container.get(key) {
        Some(value) if !value.is_null() => to_sequence(value),
        _ => to_sequence(container),
    }
}

/// Deserializes each item into `T`, skipping items that don't fit.
pub fn decode_items<T: DeserializeOwned>(items: Vec<Value>) -> Vec<T> {
    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<T>(item) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                debug!(error = %e, "Skipping list item with unexpected shape");
                None
            }
        })
        .collect()
}

/// Returns the first non-empty string among `keys` on a JSON object.
pub fn first_string<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter_map(|key| value.get(*key).and_then(Value::as_str))
        .find(|s| !s.trim().is_empty())
}

// ============================================================================
// Tests
// ============================================================================
