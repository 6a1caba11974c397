//! Purpose: Scoped loading and storing of JSON documents.
//! Exports: `load_from_file`, `load_from_url`, `load_from_resource`,
//! Exports: `ResourceCatalog`, `write_json`.
//! Role: The only layer that touches files, the network, or embedded data.
//! Invariants: Every call is one acquire -> parse -> release cycle; handles
//! Invariants: are released on every exit path, including parse failure.
//! Invariants: Writes serialize fully in memory first, so a torn file needs
//! Invariants: a hard I/O fault, never a logic fault.

use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::{Error, ErrorKind, JsonResult};
use crate::parse::parse_text;

/// Read a file fully into text and parse it. The handle is scoped to the
/// read and dropped before parsing begins.
pub fn load_from_file(path: impl AsRef<Path>) -> JsonResult<Value> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|err| {
        Error::new(ErrorKind::Io)
            .with_message("failed to read JSON file")
            .with_path(path)
            .with_source(err)
    })?;
    debug!(path = %path.display(), bytes = text.len(), "loaded JSON file");
    parse_text(&text)
}

/// Fetch a URL and parse the body. `http`/`https` go over the network;
/// `file` URLs resolve onto the local filesystem.
pub fn load_from_url(raw: &str) -> JsonResult<Value> {
    let url = Url::parse(raw).map_err(|err| {
        Error::new(ErrorKind::Io)
            .with_message(format!("invalid url '{raw}'"))
            .with_source(err)
    })?;
    match url.scheme() {
        "file" => {
            let path = url.to_file_path().map_err(|_| {
                Error::new(ErrorKind::Io)
                    .with_message(format!("file url '{raw}' has no local path"))
            })?;
            load_from_file(path)
        }
        "http" | "https" => {
            let response = match ureq::get(url.as_str()).call() {
                Ok(response) => response,
                Err(ureq::Error::Status(code, _)) => {
                    return Err(Error::new(ErrorKind::Io)
                        .with_message(format!("'{url}' answered HTTP {code}")));
                }
                Err(ureq::Error::Transport(err)) => {
                    return Err(Error::new(ErrorKind::Io)
                        .with_message(format!("failed to fetch '{url}'"))
                        .with_source(err));
                }
            };
            let mut text = String::new();
            response
                .into_reader()
                .read_to_string(&mut text)
                .map_err(|err| {
                    Error::new(ErrorKind::Io)
                        .with_message(format!("failed to read body of '{url}'"))
                        .with_source(err)
                })?;
            debug!(url = %url, bytes = text.len(), "fetched JSON url");
            parse_text(&text)
        }
        other => Err(Error::new(ErrorKind::Io)
            .with_message(format!("unsupported url scheme '{other}'"))),
    }
}

/// Named embedded resources, registered at construction (typically from
/// `include_str!`). Injected by the embedder; there is no global catalog.
#[derive(Clone, Debug, Default)]
pub struct ResourceCatalog {
    entries: HashMap<String, String>,
}

impl ResourceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resource(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.entries.insert(name.into(), text.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }
}

/// Parse a named resource from the catalog. Unknown names are `Io` failures
/// naming the resource.
pub fn load_from_resource(catalog: &ResourceCatalog, name: &str) -> JsonResult<Value> {
    let text = catalog.get(name).ok_or_else(|| {
        Error::new(ErrorKind::Io).with_message(format!("resource '{name}' not found"))
    })?;
    debug!(resource = name, bytes = text.len(), "loaded JSON resource");
    parse_text(text)
}

/// Serialize `value` with 4-space indentation and write it to `path`,
/// overwriting any existing file. Serialization happens entirely in memory
/// before the file is touched.
pub fn write_json(value: &Value, path: impl AsRef<Path>) -> JsonResult<()> {
    let path = path.as_ref();
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer).map_err(|err| {
        Error::new(ErrorKind::Io)
            .with_message("failed to serialize JSON for writing")
            .with_path(path)
            .with_source(err)
    })?;
    buf.push(b'\n');
    fs::write(path, &buf).map_err(|err| {
        Error::new(ErrorKind::Io)
            .with_message("failed to write JSON file")
            .with_path(path)
            .with_source(err)
    })?;
    debug!(path = %path.display(), bytes = buf.len(), "wrote JSON file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{load_from_file, load_from_resource, load_from_url, write_json, ResourceCatalog};
    use crate::error::ErrorKind;
    use serde_json::json;
    use url::Url;

    #[test]
    fn file_round_trip_preserves_value() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("doc.json");
        let value = json!({"a": [1, 2], "b": {"c": "x"}});
        write_json(&value, &path).expect("write");
        assert_eq!(load_from_file(&path).expect("load"), value);
    }

    #[test]
    fn written_files_use_four_space_indent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("doc.json");
        write_json(&json!({"a": 1}), &path).expect("write");
        let text = std::fs::read_to_string(&path).expect("read");
        assert_eq!(text, "{\n    \"a\": 1\n}\n");
    }

    #[test]
    fn write_overwrites_instead_of_appending() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("doc.json");
        write_json(&json!({"a": [1, 2, 3, 4, 5]}), &path).expect("first write");
        write_json(&json!({"b": 1}), &path).expect("second write");
        assert_eq!(load_from_file(&path).expect("load"), json!({"b": 1}));
    }

    #[test]
    fn missing_file_is_an_io_failure_with_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("absent.json");
        let err = load_from_file(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn malformed_file_is_a_parse_failure() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{broken").expect("write");
        let err = load_from_file(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert_eq!(err.excerpt(), Some("{broken"));
    }

    #[test]
    fn file_urls_resolve_to_local_loads() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("doc.json");
        write_json(&json!({"via": "url"}), &path).expect("write");
        let url = Url::from_file_path(&path).expect("file url");
        assert_eq!(load_from_url(url.as_str()).expect("load"), json!({"via": "url"}));
    }

    #[test]
    fn unsupported_schemes_are_rejected() {
        let err = load_from_url("ftp://example.com/doc.json").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.to_string().contains("ftp"));

        let err = load_from_url("not a url").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn resource_catalog_serves_registered_names() {
        let catalog = ResourceCatalog::new()
            .with_resource("defaults", r#"{"retries": 3}"#)
            .with_resource("empty", "{}");
        assert_eq!(
            load_from_resource(&catalog, "defaults").expect("load"),
            json!({"retries": 3})
        );
        let err = load_from_resource(&catalog, "unknown").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.to_string().contains("'unknown'"));
    }
}
