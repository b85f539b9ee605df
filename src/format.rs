// Author: Dustin Pilgrim
// License: MIT

use crate::ast::{JsonArray, JsonDict, Value};

const INDENT_WIDTH: usize = 4;

/// Render a document tree to its human-readable indented form.
///
/// The indent level is threaded through every recursive call, so concurrent
/// and nested formatting calls cannot interfere with each other. Scalars
/// render bare; each container opens on the current line and closes at its
/// own indent level.
///
/// Note the output is the crate's own subset grammar, not fully standard
/// JSON: null renders as `Null`, doubles use fixed 6-decimal precision, and
/// string content is emitted verbatim with no escape re-encoding. For
/// escape-correct interop output, see [`crate::export`].
pub fn format_value(value: &Value) -> String {
    render(value, 0)
}

fn indent(level: usize) -> String {
    " ".repeat(level * INDENT_WIDTH)
}

/// One array element line: indent, rendered value, comma unless last.
fn format_line(value: &str, level: usize, last: bool) -> String {
    let mut line = indent(level);
    line.push_str(value);
    if !last {
        line.push(',');
    }
    line.push('\n');
    line
}

/// One dictionary entry line: indent, quoted key, rendered value, comma
/// unless last.
fn format_pair_line(key: &str, value: &str, level: usize, last: bool) -> String {
    let mut line = indent(level);
    line.push('"');
    line.push_str(key);
    line.push_str("\": ");
    line.push_str(value);
    if !last {
        line.push(',');
    }
    line.push('\n');
    line
}

fn render(value: &Value, level: usize) -> String {
    match value {
        Value::Null => "Null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Int(n) => n.to_string(),
        Value::Double(n) => format!("{:.6}", n),
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(items) => render_array(items, level),
        Value::Dict(entries) => render_dict(entries, level),
    }
}

fn render_array(items: &JsonArray, level: usize) -> String {
    let mut out = String::from("[\n");
    let child = level + 1;

    for (i, item) in items.iter().enumerate() {
        let last = i + 1 == items.len();
        out.push_str(&format_line(&render(item, child), child, last));
    }

    out.push_str(&indent(level));
    out.push(']');
    out
}

fn render_dict(entries: &JsonDict, level: usize) -> String {
    let mut out = String::from("{\n");
    let child = level + 1;

    // BTreeMap iteration, so entries come out key-sorted.
    for (i, (key, value)) in entries.iter().enumerate() {
        let last = i + 1 == entries.len();
        // A nested container starts on a fresh line at the child's indent
        // instead of directly after the colon.
        let rendered = if value.is_array() || value.is_dict() {
            format!("\n{}{}", indent(child), render(value, child))
        } else {
            render(value, child)
        };
        out.push_str(&format_pair_line(key, &rendered, child, last));
    }

    out.push_str(&indent(level));
    out.push('}');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;

    #[test]
    fn test_scalar_rendering() {
        assert_eq!(format_value(&Value::Null), "Null");
        assert_eq!(format_value(&Value::Bool(true)), "true");
        assert_eq!(format_value(&Value::Bool(false)), "false");
        assert_eq!(format_value(&Value::Int(-7)), "-7");
        assert_eq!(format_value(&Value::Double(3.14)), "3.140000");
        assert_eq!(format_value(&Value::String("hi".into())), "\"hi\"");
    }

    #[test]
    fn test_array_layout() {
        let doc = Value::Array(vec![Value::Int(1), Value::Int(2)]);

        assert_eq!(format_value(&doc), "[\n    1,\n    2\n]");
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(format_value(&Value::Array(vec![])), "[\n]");
        assert_eq!(format_value(&Value::Dict(JsonDict::new())), "{\n}");
    }

    #[test]
    fn test_dict_layout_and_key_order() {
        let doc = Parser::parse_str(r#"{"b": 2, "a": 1}"#).unwrap();

        assert_eq!(format_value(&doc), "{\n    \"a\": 1,\n    \"b\": 2\n}");
    }

    #[test]
    fn test_nested_container_starts_on_fresh_line() {
        let doc = Parser::parse_str(r#"{"a": 1, "b": {"c": 2}}"#).unwrap();

        let expected = concat!(
            "{\n",
            "    \"a\": 1,\n",
            "    \"b\": \n",
            "    {\n",
            "        \"c\": 2\n",
            "    }\n",
            "}",
        );
        assert_eq!(format_value(&doc), expected);
    }

    #[test]
    fn test_array_nested_in_array() {
        let doc = Parser::parse_str("[[1], 2]").unwrap();

        let expected = concat!(
            "[\n",
            "    [\n",
            "        1\n",
            "    ],\n",
            "    2\n",
            "]",
        );
        assert_eq!(format_value(&doc), expected);
    }

    #[test]
    fn test_constructor_round_trip() {
        let mut entries = JsonDict::new();
        entries.insert("flag".into(), Value::Bool(true));
        entries.insert("count".into(), Value::Int(3));
        entries.insert("name".into(), Value::from("jot json"));
        entries.insert("none".into(), Value::Null);
        entries.insert(
            "items".into(),
            Value::Array(vec![Value::Int(1), Value::Double(2.5)]),
        );
        let doc = Value::Dict(entries);

        let reparsed = Parser::parse_str(&format_value(&doc)).unwrap();
        assert_eq!(reparsed, doc);
    }

    #[test]
    fn test_double_precision_round_trip() {
        // Doubles only survive to the formatter's fixed precision.
        let doc = Value::Double(1.5);
        let reparsed = Parser::parse_str(&format_value(&doc)).unwrap();

        let got = reparsed.as_double().unwrap();
        assert!((got - 1.5).abs() < 1e-6);
    }
}
