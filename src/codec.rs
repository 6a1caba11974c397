//! Purpose: Bridge between JSON values and strongly-typed application values.
//! Exports: `decode`, `encode`, `parse_and_decode`.
//! Role: Thin seam over serde's type-indexed codecs; conversion logic lives
//! Role: in the target types' derives, never here.
//! Invariants: The failing stage (parse vs decode) is identified by `ErrorKind`.
//! Invariants: Underlying serde causes are preserved for diagnostics.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, ErrorKind, JsonResult};
use crate::parse;

/// Interpret a JSON value as a `T`, wrapping the serde cause on failure.
pub fn decode<T: DeserializeOwned>(value: Value) -> JsonResult<T> {
    let rendered = value.to_string();
    serde_json::from_value(value).map_err(|err| {
        Error::new(ErrorKind::Decode)
            .with_message(format!(
                "cannot decode value as {}",
                std::any::type_name::<T>()
            ))
            .with_excerpt(parse::excerpt(&rendered))
            .with_source(err)
    })
}

/// Turn a typed value into a JSON value. Fails only when the serializer
/// itself fails (e.g. a map with non-string keys).
pub fn encode<T: Serialize>(value: &T) -> JsonResult<Value> {
    serde_json::to_value(value).map_err(|err| {
        Error::new(ErrorKind::Decode)
            .with_message(format!(
                "cannot encode {} as JSON",
                std::any::type_name::<T>()
            ))
            .with_source(err)
    })
}

/// Parse text and decode the result in one step. A `Parse` failure means the
/// text was not JSON at all; a `Decode` failure means it was JSON but not a `T`.
pub fn parse_and_decode<T: DeserializeOwned>(text: &str) -> JsonResult<T> {
    decode(parse::parse_text(text)?)
}
