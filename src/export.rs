// Author: Dustin Pilgrim
// License: MIT

//! Interop rendering through `serde_json`.
//!
//! The crate's own formatter ([`crate::format`]) reproduces the subset
//! grammar (no escapes, `Null` literal, fixed-precision doubles). This
//! module is the bridge out of that subset: documents exported here come
//! back as standard, escape-correct JSON, with dictionary entries in the
//! crate's key-sorted order.

use std::fs;

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::ast::{JsonDict, Value};
use crate::document::JsonDocument;
use crate::JsonError;

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Double(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Dict(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

/// Convert a document node into a `serde_json` tree.
pub fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Int(n) => serde_json::json!(n),
        Value::Double(n) => serde_json::json!(n),
        Value::String(s) => serde_json::json!(s),
        Value::Array(items) => {
            serde_json::Value::Array(items.iter().map(value_to_json).collect())
        }
        Value::Dict(entries) => {
            let map = entries
                .iter()
                .map(|(k, v)| (k.clone(), value_to_json(v)))
                .collect::<serde_json::Map<_, _>>();
            serde_json::Value::Object(map)
        }
    }
}

/// Convert a `serde_json` tree into a document node.
///
/// Numbers that are representable as i64 become Int, everything else
/// becomes Double; object entries land in key-sorted order.
pub fn json_to_value(json: &serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => Value::Int(i),
            None => Value::Double(n.as_f64().unwrap_or(0.0)),
        },
        serde_json::Value::String(s) => Value::String(s.clone()),
        serde_json::Value::Array(items) => {
            Value::Array(items.iter().map(json_to_value).collect())
        }
        serde_json::Value::Object(map) => {
            let entries = map
                .iter()
                .map(|(k, v)| (k.clone(), json_to_value(v)))
                .collect::<JsonDict>();
            Value::Dict(entries)
        }
    }
}

/// Export a document as standard pretty-printed JSON.
pub fn export_document(doc: &JsonDocument) -> String {
    serde_json::to_string_pretty(&value_to_json(doc.root())).unwrap()
}

/// Export a .json file directly: read, parse, re-emit as standard JSON.
///
/// # Errors
/// Returns an error if the file cannot be read or contains invalid syntax.
pub fn export_file(path: &str) -> Result<String, JsonError> {
    let input = fs::read_to_string(path).map_err(|e| JsonError::FileError {
        message: format!("Failed to read file: {}", e),
        path: path.to_string(),
        hint: None,
        code: Some(500),
    })?;

    let doc = JsonDocument::parse(&input)?;
    Ok(export_document(&doc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_sorted_dictionary() {
        let doc = JsonDocument::parse(r#"{"b": 1, "a": [true, null]}"#).unwrap();
        let exported = export_document(&doc);

        let reparsed: serde_json::Value = serde_json::from_str(&exported).unwrap();
        assert_eq!(reparsed["b"], 1);
        assert_eq!(reparsed["a"][0], true);
        assert!(reparsed["a"][1].is_null());

        // Key-sorted order survives into the exported text.
        assert!(exported.find("\"a\"").unwrap() < exported.find("\"b\"").unwrap());
    }

    #[test]
    fn test_export_escapes_strings() {
        // The subset formatter emits embedded quotes verbatim; the export
        // path produces escape-correct standard JSON.
        let doc = JsonDocument::from_root(Value::String("say \"hi\"".into()));
        let exported = export_document(&doc);

        assert_eq!(exported, r#""say \"hi\"""#);
    }

    #[test]
    fn test_json_to_value_number_split() {
        let json: serde_json::Value = serde_json::from_str(r#"[7, 7.5]"#).unwrap();
        let value = json_to_value(&json);

        assert_eq!(
            value,
            Value::Array(vec![Value::Int(7), Value::Double(7.5)])
        );
    }

    #[test]
    fn test_bridge_round_trip() {
        let doc = JsonDocument::parse(r#"{"n": 1, "s": "x", "d": 2.5}"#).unwrap();
        let bridged = json_to_value(&value_to_json(doc.root()));

        assert_eq!(&bridged, doc.root());
    }

    #[test]
    fn test_serialize_impl_matches_bridge() {
        let doc = JsonDocument::parse(r#"{"k": [1, {"z": false}]}"#).unwrap();

        let direct = serde_json::to_string(doc.root()).unwrap();
        let bridged = serde_json::to_string(&value_to_json(doc.root())).unwrap();
        assert_eq!(direct, bridged);
    }
}
