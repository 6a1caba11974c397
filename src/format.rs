//! Purpose: Render JSON values as configurable pretty text.
//! Exports: `FormatOptions`, `print`, `print_object`, `print_with`.
//! Role: Small, pure formatter producing stable, diffable output.
//! Invariants: With `drop_nulls`, null-valued fields are omitted at every level.
//! Invariants: With `sort_keys`, keys sort by code point at every level.

use serde_json::Value;

use crate::JsonObject;

/// Formatting configuration for `print_with`.
#[derive(Clone, Copy, Debug)]
pub struct FormatOptions {
    /// Spaces per indentation level.
    pub indent_width: usize,
    /// Order object keys by ordinal comparison while writing.
    pub sort_keys: bool,
    /// Omit object fields whose value is JSON null.
    pub drop_nulls: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent_width: 4,
            sort_keys: false,
            drop_nulls: true,
        }
    }
}

/// Serialize with the default options (4-space indent, nulls dropped).
pub fn print(value: &Value) -> String {
    print_with(value, &FormatOptions::default())
}

/// Serialize an object with the default options.
pub fn print_object(obj: &JsonObject) -> String {
    let mut out = String::new();
    write_object(obj, 0, &FormatOptions::default(), &mut out);
    out
}

pub fn print_with(value: &Value, options: &FormatOptions) -> String {
    let mut out = String::new();
    write_value(value, 0, options, &mut out);
    out
}

fn write_value(value: &Value, indent: usize, options: &FormatOptions, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(val) => out.push_str(if *val { "true" } else { "false" }),
        Value::Number(num) => out.push_str(&num.to_string()),
        Value::String(text) => {
            let encoded = serde_json::to_string(text).unwrap_or_else(|_| "\"\"".to_string());
            out.push_str(&encoded);
        }
        Value::Array(items) => write_array(items, indent, options, out),
        Value::Object(map) => write_object(map, indent, options, out),
    }
}

fn write_array(items: &[Value], indent: usize, options: &FormatOptions, out: &mut String) {
    if items.is_empty() {
        out.push_str("[]");
        return;
    }
    out.push('[');
    out.push('\n');
    for (idx, item) in items.iter().enumerate() {
        push_indent(indent + 1, options, out);
        write_value(item, indent + 1, options, out);
        if idx + 1 < items.len() {
            out.push(',');
        }
        out.push('\n');
    }
    push_indent(indent, options, out);
    out.push(']');
}

fn write_object(map: &JsonObject, indent: usize, options: &FormatOptions, out: &mut String) {
    let mut fields: Vec<(&String, &Value)> = map
        .iter()
        .filter(|(_, value)| !(options.drop_nulls && value.is_null()))
        .collect();
    if options.sort_keys {
        fields.sort_by(|(a, _), (b, _)| a.cmp(b));
    }
    if fields.is_empty() {
        out.push_str("{}");
        return;
    }
    out.push('{');
    out.push('\n');
    let len = fields.len();
    for (idx, (key, value)) in fields.into_iter().enumerate() {
        push_indent(indent + 1, options, out);
        let encoded = serde_json::to_string(key).unwrap_or_else(|_| "\"\"".to_string());
        out.push_str(&encoded);
        out.push(':');
        out.push(' ');
        write_value(value, indent + 1, options, out);
        if idx + 1 < len {
            out.push(',');
        }
        out.push('\n');
    }
    push_indent(indent, options, out);
    out.push('}');
}

fn push_indent(level: usize, options: &FormatOptions, out: &mut String) {
    for _ in 0..level * options.indent_width {
        out.push(' ');
    }
}

#[cfg(test)]
mod tests {
    use super::{print, print_object, print_with, FormatOptions};
    use crate::access::as_object;
    use crate::parse::parse_text;
    use serde_json::json;

    #[test]
    fn print_drops_nulls_by_default() {
        let text = print(&json!({"keep": 1, "gone": null}));
        assert!(text.contains("\"keep\""));
        assert!(!text.contains("gone"));
    }

    #[test]
    fn print_uses_four_space_indent() {
        let text = print(&json!({"a": 1}));
        assert_eq!(text, "{\n    \"a\": 1\n}");
    }

    #[test]
    fn sort_keys_applies_at_every_level() {
        let options = FormatOptions {
            indent_width: 0,
            sort_keys: true,
            drop_nulls: false,
        };
        let text = print_with(&json!({"b": {"d": 1, "c": 2}, "a": 3}), &options);
        let a = text.find("\"a\"").unwrap();
        let b = text.find("\"b\"").unwrap();
        let c = text.find("\"c\"").unwrap();
        let d = text.find("\"d\"").unwrap();
        assert!(a < b && c < d);
    }

    #[test]
    fn drop_nulls_applies_while_descending() {
        let text = print(&json!({"x": {"y": null, "z": 1}}));
        assert!(!text.contains("\"y\""));
        assert!(text.contains("\"z\""));
    }

    #[test]
    fn empty_containers_stay_compact() {
        assert_eq!(print(&json!({})), "{}");
        assert_eq!(print(&json!([])), "[]");
        // An all-null object collapses to empty when nulls are dropped.
        assert_eq!(print(&json!({"a": null})), "{}");
    }

    #[test]
    fn print_object_matches_print_on_objects() {
        let value = json!({"a": [1, true], "b": "x"});
        let obj = as_object(&value).unwrap();
        assert_eq!(print_object(obj), print(&value));
    }

    #[test]
    fn printed_text_round_trips_for_null_free_values() {
        let value = json!({"s": "héllo \"q\"", "n": 12345678901234567890u64, "a": [1, {"k": false}]});
        let back = parse_text(&print(&value)).unwrap();
        assert_eq!(back, value);
    }
}
