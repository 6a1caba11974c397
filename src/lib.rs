//! Purpose: Utility layer for tree-structured JSON documents.
//! Exports: `access`, `codec`, `parse`, `io`, `normalize`, `format`, `error`.
//! Role: Library surface for safe field access, typed decode/encode,
//! Role: normalization, and scoped load/store of JSON.
//! Invariants: Values are immutable; "modification" operations return new values.
//! Invariants: Every fallible operation reports through `error::Error`, never panics.

pub mod access;
pub mod codec;
pub mod error;
pub mod format;
pub mod io;
pub mod normalize;
pub mod parse;

/// The object payload of a JSON value. Keys are unique; iteration follows
/// insertion order unless explicitly normalized.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

pub use error::{Error, ErrorKind, JsonResult};
pub use serde_json::Value;
