//! Purpose: Shape-checked access to parsed JSON values and objects.
//! Exports: `as_object`, `as_array`, `as_str`, field lookup/extraction, `entries`.
//! Role: The pure leaf layer every decode and normalization path builds on.
//! Invariants: Failures surface as typed `Error` values, never panics or sentinels.
//! Invariants: "Absent field" and "field present but null" stay distinguishable.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::codec;
use crate::error::{Error, ErrorKind, JsonResult};
use crate::JsonObject;

fn shape_mismatch(value: &Value, expected: &'static str) -> Error {
    Error::new(ErrorKind::ShapeMismatch)
        .with_message(format!("not {}: got {}", article(expected), kind_name(value)))
        .with_expected(expected)
}

fn article(expected: &'static str) -> String {
    match expected {
        "object" | "array" => format!("an {expected}"),
        _ => format!("a {expected}"),
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Require `value` to be an object.
pub fn as_object(value: &Value) -> JsonResult<&JsonObject> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(shape_mismatch(other, "object")),
    }
}

/// Require `value` to be an array.
pub fn as_array(value: &Value) -> JsonResult<&[Value]> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(shape_mismatch(other, "array")),
    }
}

/// Require `value` to be a string.
pub fn as_str(value: &Value) -> JsonResult<&str> {
    match value {
        Value::String(text) => Ok(text),
        other => Err(shape_mismatch(other, "string")),
    }
}

/// Pure lookup; absence is `None`, a found JSON null is `Some(Value::Null)`.
pub fn find_field<'a>(obj: &'a JsonObject, name: &str) -> Option<&'a Value> {
    obj.get(name)
}

/// Lookup through a value. Fails only when `value` is not an object,
/// never because the field is absent.
pub fn find_field_in<'a>(value: &'a Value, name: &str) -> JsonResult<Option<&'a Value>> {
    Ok(find_field(as_object(value)?, name))
}

/// Strict lookup: absence becomes a `FieldNotFound` failure naming the field.
pub fn extract_field<'a>(obj: &'a JsonObject, name: &str) -> JsonResult<&'a Value> {
    find_field(obj, name).ok_or_else(|| {
        Error::new(ErrorKind::FieldNotFound)
            .with_message(format!("field '{name}' not found"))
            .with_field(name)
    })
}

/// Strict lookup through a value. Fails on not-an-object or on an absent
/// field, with distinguishable kinds for the two causes.
pub fn extract_field_in<'a>(value: &'a Value, name: &str) -> JsonResult<&'a Value> {
    extract_field(as_object(value)?, name)
}

/// Extraction followed by typed decode. The three failure causes keep their
/// own kinds: `ShapeMismatch` (container not an object), `FieldNotFound`,
/// and `Decode` (field present but `T` rejected it).
pub fn extract_field_as<T: DeserializeOwned>(value: &Value, name: &str) -> JsonResult<T> {
    let field = extract_field_in(value, name)?;
    codec::decode(field.clone()).map_err(|err| err.with_field(name))
}

/// Pure predicate; never fails.
pub fn has_field(obj: &JsonObject, name: &str) -> bool {
    obj.contains_key(name)
}

/// Pure predicate over a value; a non-object simply has no fields.
pub fn has_field_in(value: &Value, name: &str) -> bool {
    value.as_object().is_some_and(|obj| obj.contains_key(name))
}

/// Key/value listing in the object's current iteration order.
pub fn entries(value: &Value) -> JsonResult<Vec<(&str, &Value)>> {
    Ok(as_object(value)?
        .iter()
        .map(|(key, val)| (key.as_str(), val))
        .collect())
}
