//! Purpose: Deterministic reshaping of JSON objects before serialization.
//! Exports: `sort_fields`, `sort_fields_dropping_nulls`, `drop_null_values_deep`,
//! Exports: `replace_field`.
//! Role: Normalization used to make emitted JSON stable and diffable.
//! Invariants: Inputs are never mutated; every operation returns a new value.
//! Invariants: Key ordering uses ordinal (code-point) comparison, not locale.

use serde_json::Value;

use crate::JsonObject;

/// New object with top-level entries ordered by key. Not recursive: nested
/// objects and arrays pass through untouched.
pub fn sort_fields(obj: &JsonObject) -> JsonObject {
    let mut entries: Vec<(&String, &Value)> = obj.iter().collect();
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));
    entries
        .into_iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// As `sort_fields`, but entries whose value is exactly JSON null are removed
/// first. A pure top-level filter: nulls nested inside arrays or sub-objects
/// are left alone (see `drop_null_values_deep` for the recursive variant).
pub fn sort_fields_dropping_nulls(obj: &JsonObject) -> JsonObject {
    let mut entries: Vec<(&String, &Value)> = obj
        .iter()
        .filter(|(_, value)| !value.is_null())
        .collect();
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));
    entries
        .into_iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Recursively remove null-valued object fields at every nesting level,
/// descending through arrays as well. Field order is otherwise preserved.
pub fn drop_null_values_deep(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .filter(|(_, entry)| !entry.is_null())
                .map(|(key, entry)| (key.clone(), drop_null_values_deep(entry)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(drop_null_values_deep).collect()),
        other => other.clone(),
    }
}

/// New object with `name` rebound to `new_value`. Implemented as removal plus
/// re-insertion, so a replaced field moves to the end of iteration order.
pub fn replace_field(name: &str, obj: &JsonObject, new_value: Value) -> JsonObject {
    let mut out: JsonObject = obj
        .iter()
        .filter(|(key, _)| key.as_str() != name)
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    out.insert(name.to_string(), new_value);
    out
}
