// Author: Dustin Pilgrim
// License: MIT

#[cfg(test)]
use super::*;

use std::io::Write;

use crate::ast::{JsonDict, ValueKind};
use crate::JsonError;

#[test]
fn test_document_from_string() {
    let content = r#"
{
    "app": {
        "name": "TestApp",
        "debug": true,
        "server": {
            "host": "localhost",
            "port": 8080
        },
        "features": ["auth", "logging"]
    }
}
"#;
    let doc = JsonDocument::parse(content).expect("Failed to parse document");

    let app_name: String = doc.get("app.name").expect("Failed to get app.name");
    assert_eq!(app_name, "TestApp");

    let host: String = doc.get("app.server.host").expect("Failed to get host");
    assert_eq!(host, "localhost");

    let port: u16 = doc.get("app.server.port").expect("Failed to get port");
    assert_eq!(port, 8080);

    let debug: bool = doc.get("app.debug").expect("Failed to get debug");
    assert_eq!(debug, true);

    let features: Vec<String> = doc.get("app.features").expect("Failed to get features");
    assert_eq!(features, vec!["auth", "logging"]);

    assert!(doc.has("app.name"));
    assert!(!doc.has("app.nonexistent"));

    let server_keys = doc.keys("app.server").expect("Failed to get server keys");
    assert_eq!(server_keys, vec!["host", "port"]);
}

#[test]
fn test_numeric_path_segments_index_arrays() {
    let doc = JsonDocument::parse(r#"{"users": [{"name": "ada"}, {"name": "bob"}]}"#).unwrap();

    let second: String = doc.get("users.1.name").unwrap();
    assert_eq!(second, "bob");

    assert!(matches!(
        doc.get_value("users.2.name"),
        Err(JsonError::PathError { .. })
    ));
}

#[test]
fn test_get_optional_and_get_or() {
    let doc = JsonDocument::parse(r#"{"timeout": 30}"#).unwrap();

    let timeout: Option<i64> = doc.get_optional("timeout").unwrap();
    assert_eq!(timeout, Some(30));

    let missing: Option<i64> = doc.get_optional("retries").unwrap();
    assert_eq!(missing, None);

    // A path that resolves to the wrong type stays an error.
    let wrong: Result<Option<bool>, JsonError> = doc.get_optional("timeout");
    assert!(wrong.is_err());

    assert_eq!(doc.get_or("retries", 3i64), 3);
    assert_eq!(doc.get_or("timeout", 0i64), 30);
}

#[test]
fn test_root_path_is_whole_document() {
    let doc = JsonDocument::parse("[1, 2]").unwrap();

    assert_eq!(doc.get_value("").unwrap(), *doc.root());
}

// ===== Value Access Tests =====

#[test]
fn test_kind_exclusivity() {
    let nodes = vec![
        Value::Null,
        Value::Bool(true),
        Value::Int(1),
        Value::Double(1.0),
        Value::String("s".into()),
        Value::Array(vec![]),
        Value::Dict(JsonDict::new()),
    ];

    for node in &nodes {
        let successes = [
            node.as_bool().is_ok(),
            node.as_int().is_ok(),
            node.as_double().is_ok(),
            node.as_str().is_ok(),
            node.as_array().is_ok(),
            node.as_dict().is_ok(),
        ]
        .iter()
        .filter(|ok| **ok)
        .count();

        // Null satisfies no typed getter; every other kind exactly one.
        if node.is_null() {
            assert_eq!(successes, 0);
        } else {
            assert_eq!(successes, 1, "kind {:?}", node.kind());
        }
    }
}

#[test]
fn test_type_mismatch_carries_kinds() {
    let err = Value::Int(1).as_bool().unwrap_err();

    assert_eq!(
        err,
        JsonError::TypeMismatch {
            expected: ValueKind::Bool,
            found: ValueKind::Int,
            hint: Some("Check kind() before calling as_bool".into()),
            code: Some(401),
        }
    );
}

#[test]
fn test_array_bounds() {
    let doc = Value::Array(vec![Value::Int(0), Value::Int(1), Value::Int(2)]);

    assert_eq!(doc.at(2).unwrap(), &Value::Int(2));
    assert!(matches!(
        doc.at(3),
        Err(JsonError::IndexOutOfRange { index: 3, len: 3, .. })
    ));
}

#[test]
fn test_indexing_wrong_kind() {
    assert!(matches!(
        Value::Int(1).at(0),
        Err(JsonError::WrongKind { expected: ValueKind::Array, .. })
    ));
    assert!(matches!(
        Value::Int(1).get("k"),
        Err(JsonError::WrongKind { expected: ValueKind::Dictionary, .. })
    ));
}

#[test]
fn test_get_does_not_vivify() {
    let doc = Value::Dict(JsonDict::new());

    assert_eq!(doc.get("absent").unwrap(), None);
    assert!(doc.as_dict().unwrap().is_empty());
}

#[test]
fn test_get_or_insert_vivifies_null() {
    let mut doc = Value::Dict(JsonDict::new());

    {
        let entry = doc.get_or_insert("fresh").unwrap();
        assert!(entry.is_null());
        *entry = Value::Int(9);
    }

    assert_eq!(doc.get("fresh").unwrap(), Some(&Value::Int(9)));
}

#[test]
fn test_clone_is_a_deep_copy() {
    let original = JsonDocument::parse(r#"{"a": [1]}"#).unwrap();
    let mut copy = original.clone();

    *copy
        .root_mut()
        .get_or_insert("a")
        .unwrap()
        .at_mut(0)
        .unwrap() = Value::Int(99);

    assert_eq!(original.get_value("a.0").unwrap(), Value::Int(1));
    assert_eq!(copy.get_value("a.0").unwrap(), Value::Int(99));
}

// ===== Conversion Tests =====

#[test]
fn test_string_conversion_error() {
    let value = Value::Int(42);
    let result: Result<String, JsonError> = value.try_into();
    assert!(result.is_err());
}

#[test]
fn test_narrowing_conversions_check_range() {
    let ok: Result<u8, JsonError> = Value::Int(255).try_into();
    assert_eq!(ok.unwrap(), 255);

    let too_big: Result<u8, JsonError> = Value::Int(256).try_into();
    assert!(matches!(too_big, Err(JsonError::OutOfRange { .. })));

    let negative: Result<u64, JsonError> = Value::Int(-1).try_into();
    assert!(matches!(negative, Err(JsonError::OutOfRange { .. })));
}

#[test]
fn test_float_conversion_takes_either_numeric_kind() {
    let from_double: f64 = Value::Double(3.14).try_into().unwrap();
    assert_eq!(from_double, 3.14);

    let from_int: f64 = Value::Int(7).try_into().unwrap();
    assert_eq!(from_int, 7.0);

    // The reverse coercion is not offered.
    let truncating: Result<i64, JsonError> = Value::Double(3.14).try_into();
    assert!(truncating.is_err());
}

// ===== File Loading Tests =====

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    write!(file, r#"{{"loaded": true}}"#).expect("Failed to write temp file");

    let doc = JsonDocument::from_file(file.path()).expect("Failed to load file");
    assert_eq!(doc.get("loaded"), Ok(true));
}

#[test]
fn test_from_file_missing() {
    let result = JsonDocument::from_file("/nonexistent/nothing.json");

    assert!(matches!(result, Err(JsonError::FileError { .. })));
}

#[test]
fn test_from_file_with_fallback() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    write!(file, r#"{{"source": "fallback"}}"#).expect("Failed to write temp file");

    let doc = JsonDocument::from_file_with_fallback(
        std::path::Path::new("/nonexistent/primary.json"),
        file.path(),
    )
    .expect("Fallback should load");

    let source: String = doc.get("source").unwrap();
    assert_eq!(source, "fallback");

    let neither = JsonDocument::from_file_with_fallback(
        std::path::Path::new("/nonexistent/a.json"),
        std::path::Path::new("/nonexistent/b.json"),
    );
    assert!(matches!(neither, Err(JsonError::FileError { .. })));
}

#[test]
fn test_parse_errors_pass_through_fallback() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    write!(file, r#"{{"broken": }}"#).expect("Failed to write temp file");

    // The primary exists but is malformed; that error is not swallowed by
    // the fallback path.
    let result = JsonDocument::from_file_with_fallback(file.path(), file.path());
    assert!(matches!(result, Err(JsonError::UnparsableToken { .. })));
}

#[test]
fn test_format_round_trip_through_facade() {
    let doc = JsonDocument::parse(r#"{"b": [1, 2], "a": "x"}"#).unwrap();
    let rendered = doc.format();

    let reparsed = JsonDocument::parse(&rendered).unwrap();
    assert_eq!(reparsed, doc);
}
