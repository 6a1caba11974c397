//! Purpose: Single parser boundary turning raw text into JSON values.
//! Exports: `parse_text`.
//! Role: Centralizes serde_json parsing so callsites avoid ad hoc decode logic.
//! Invariants: Malformed input yields a `Parse` error carrying a bounded
//! Invariants: excerpt of the text plus the parser's line/column cause.
//! Notes: Numeric literals keep arbitrary precision (no overflow into f64).

use serde_json::Value;

use crate::error::{Error, ErrorKind, JsonResult};

/// Cap on how much offending input an error may carry.
const EXCERPT_BYTES: usize = 120;

pub fn parse_text(text: &str) -> JsonResult<Value> {
    serde_json::from_str(text).map_err(|err| {
        Error::new(ErrorKind::Parse)
            .with_message("invalid JSON text")
            .with_excerpt(excerpt(text))
            .with_source(err)
    })
}

/// First `EXCERPT_BYTES` of `text`, truncated on a char boundary.
pub(crate) fn excerpt(text: &str) -> String {
    if text.len() <= EXCERPT_BYTES {
        return text.to_string();
    }
    let mut end = EXCERPT_BYTES;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}
