use std::collections::BTreeMap;
use std::fmt;

use crate::JsonError;

/// An ordered sequence of document nodes.
pub type JsonArray = Vec<Value>;

/// A string-keyed mapping of document nodes.
///
/// Backed by a `BTreeMap`, so iteration is key-sorted. That ordering is a
/// documented contract of this crate (the formatter and export paths rely on
/// it), not an implementation detail.
pub type JsonDict = BTreeMap<String, Value>;

/// The discriminant selecting which payload and accessors are valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Double,
    String,
    Array,
    Dictionary,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "Null",
            ValueKind::Bool => "Bool",
            ValueKind::Int => "Int",
            ValueKind::Double => "Double",
            ValueKind::String => "String",
            ValueKind::Array => "Array",
            ValueKind::Dictionary => "Dictionary",
        };
        write!(f, "{}", name)
    }
}

/// One JSON value. Exactly one variant is active per node, and each node
/// exclusively owns its children; `clone` is a deep copy of the subtree.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    /// Integer literal, no decimal point in the source.
    Int(i64),
    /// Literal carrying a decimal point.
    Double(f64),
    /// Unescaped text, surrounding quotes not stored.
    String(String),
    Array(JsonArray),
    Dict(JsonDict),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Double(_) => ValueKind::Double,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Dict(_) => ValueKind::Dictionary,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_dict(&self) -> bool {
        matches!(self, Value::Dict(_))
    }

    /// Get the boolean payload, or `TypeMismatch` for any other kind.
    pub fn as_bool(&self) -> Result<bool, JsonError> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(type_mismatch(ValueKind::Bool, other.kind())),
        }
    }

    /// Get the integer payload, or `TypeMismatch` for any other kind.
    ///
    /// Doubles do not coerce: `42.0` parsed from `"42.0"` is a Double and
    /// this accessor rejects it.
    pub fn as_int(&self) -> Result<i64, JsonError> {
        match self {
            Value::Int(n) => Ok(*n),
            other => Err(type_mismatch(ValueKind::Int, other.kind())),
        }
    }

    /// Get the floating-point payload, or `TypeMismatch` for any other kind.
    pub fn as_double(&self) -> Result<f64, JsonError> {
        match self {
            Value::Double(n) => Ok(*n),
            other => Err(type_mismatch(ValueKind::Double, other.kind())),
        }
    }

    /// Get the string payload, or `TypeMismatch` for any other kind.
    pub fn as_str(&self) -> Result<&str, JsonError> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(type_mismatch(ValueKind::String, other.kind())),
        }
    }

    /// Get the array payload, or `TypeMismatch` for any other kind.
    pub fn as_array(&self) -> Result<&JsonArray, JsonError> {
        match self {
            Value::Array(items) => Ok(items),
            other => Err(type_mismatch(ValueKind::Array, other.kind())),
        }
    }

    pub fn as_array_mut(&mut self) -> Result<&mut JsonArray, JsonError> {
        match self {
            Value::Array(items) => Ok(items),
            other => Err(type_mismatch(ValueKind::Array, other.kind())),
        }
    }

    /// Get the dictionary payload, or `TypeMismatch` for any other kind.
    pub fn as_dict(&self) -> Result<&JsonDict, JsonError> {
        match self {
            Value::Dict(entries) => Ok(entries),
            other => Err(type_mismatch(ValueKind::Dictionary, other.kind())),
        }
    }

    pub fn as_dict_mut(&mut self) -> Result<&mut JsonDict, JsonError> {
        match self {
            Value::Dict(entries) => Ok(entries),
            other => Err(type_mismatch(ValueKind::Dictionary, other.kind())),
        }
    }

    /// Index into an array node.
    ///
    /// Fails with `WrongKind` on a non-array node and `IndexOutOfRange`
    /// when `index >= len`.
    pub fn at(&self, index: usize) -> Result<&Value, JsonError> {
        let items = self.indexable()?;
        items.get(index).ok_or(JsonError::IndexOutOfRange {
            index,
            len: items.len(),
            hint: None,
            code: Some(403),
        })
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut Value, JsonError> {
        let items = match self {
            Value::Array(items) => items,
            other => return Err(wrong_kind(ValueKind::Array, other.kind())),
        };
        let len = items.len();
        items.get_mut(index).ok_or(JsonError::IndexOutOfRange {
            index,
            len,
            hint: None,
            code: Some(403),
        })
    }

    /// Look up a dictionary key without mutating.
    ///
    /// `Ok(None)` means the key is absent; `WrongKind` means the node is not
    /// a dictionary at all.
    pub fn get(&self, key: &str) -> Result<Option<&Value>, JsonError> {
        match self {
            Value::Dict(entries) => Ok(entries.get(key)),
            other => Err(wrong_kind(ValueKind::Dictionary, other.kind())),
        }
    }

    /// Look up a dictionary key, inserting a Null entry when absent.
    ///
    /// The mutating counterpart of [`Value::get`]; the only operation that
    /// auto-vivifies, and it says so in its name.
    pub fn get_or_insert(&mut self, key: &str) -> Result<&mut Value, JsonError> {
        match self {
            Value::Dict(entries) => Ok(entries.entry(key.to_string()).or_default()),
            other => Err(wrong_kind(ValueKind::Dictionary, other.kind())),
        }
    }

    fn indexable(&self) -> Result<&JsonArray, JsonError> {
        match self {
            Value::Array(items) => Ok(items),
            other => Err(wrong_kind(ValueKind::Array, other.kind())),
        }
    }
}

fn type_mismatch(expected: ValueKind, found: ValueKind) -> JsonError {
    JsonError::TypeMismatch {
        expected,
        found,
        hint: Some(format!("Check kind() before calling as_{}", accessor_name(expected))),
        code: Some(401),
    }
}

fn wrong_kind(expected: ValueKind, found: ValueKind) -> JsonError {
    JsonError::WrongKind {
        expected,
        found,
        hint: None,
        code: Some(402),
    }
}

fn accessor_name(kind: ValueKind) -> &'static str {
    match kind {
        ValueKind::Null => "null",
        ValueKind::Bool => "bool",
        ValueKind::Int => "int",
        ValueKind::Double => "double",
        ValueKind::String => "str",
        ValueKind::Array => "array",
        ValueKind::Dictionary => "dict",
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Double(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<JsonArray> for Value {
    fn from(value: JsonArray) -> Self {
        Value::Array(value)
    }
}

impl From<JsonDict> for Value {
    fn from(value: JsonDict) -> Self {
        Value::Dict(value)
    }
}
