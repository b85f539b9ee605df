// Author: Dustin Pilgrim
// License: MIT

use crate::ast::{JsonArray, JsonDict, ValueKind};
use crate::{JsonError, Value};

fn expected(kind: ValueKind, value: &Value) -> JsonError {
    JsonError::TypeMismatch {
        expected: kind,
        found: value.kind(),
        hint: Some(format!("Use a {} value in your document", kind)),
        code: Some(401),
    }
}

fn out_of_range(n: i64, target: &str) -> JsonError {
    JsonError::OutOfRange {
        message: format!("Number {} out of range for {}", n, target),
        hint: Some(format!("Use a number that fits in {}", target)),
        code: Some(407),
    }
}

impl TryFrom<Value> for String {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(expected(ValueKind::String, &other)),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(expected(ValueKind::Bool, &other)),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(n) => Ok(n),
            other => Err(expected(ValueKind::Int, &other)),
        }
    }
}

impl TryFrom<Value> for i32 {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(n) => {
                if n >= i32::MIN as i64 && n <= i32::MAX as i64 {
                    Ok(n as i32)
                } else {
                    Err(out_of_range(n, "i32"))
                }
            }
            other => Err(expected(ValueKind::Int, &other)),
        }
    }
}

impl TryFrom<Value> for u64 {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(n) => {
                if n >= 0 {
                    Ok(n as u64)
                } else {
                    Err(out_of_range(n, "u64"))
                }
            }
            other => Err(expected(ValueKind::Int, &other)),
        }
    }
}

impl TryFrom<Value> for u32 {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(n) => {
                if n >= 0 && n <= u32::MAX as i64 {
                    Ok(n as u32)
                } else {
                    Err(out_of_range(n, "u32"))
                }
            }
            other => Err(expected(ValueKind::Int, &other)),
        }
    }
}

impl TryFrom<Value> for u16 {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(n) => {
                if n >= 0 && n <= u16::MAX as i64 {
                    Ok(n as u16)
                } else {
                    Err(out_of_range(n, "u16"))
                }
            }
            other => Err(expected(ValueKind::Int, &other)),
        }
    }
}

impl TryFrom<Value> for u8 {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(n) => {
                if n >= 0 && n <= u8::MAX as i64 {
                    Ok(n as u8)
                } else {
                    Err(out_of_range(n, "u8"))
                }
            }
            other => Err(expected(ValueKind::Int, &other)),
        }
    }
}

// The floating-point targets take either numeric kind; integer targets stay
// strict so a Double never silently truncates.
impl TryFrom<Value> for f64 {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Double(n) => Ok(n),
            Value::Int(n) => Ok(n as f64),
            other => Err(expected(ValueKind::Double, &other)),
        }
    }
}

impl TryFrom<Value> for f32 {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Double(n) => Ok(n as f32),
            Value::Int(n) => Ok(n as f32),
            other => Err(expected(ValueKind::Double, &other)),
        }
    }
}

impl TryFrom<Value> for JsonArray {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(items) => Ok(items),
            other => Err(expected(ValueKind::Array, &other)),
        }
    }
}

impl TryFrom<Value> for JsonDict {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Dict(entries) => Ok(entries),
            other => Err(expected(ValueKind::Dictionary, &other)),
        }
    }
}

impl TryFrom<Value> for Vec<String> {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let items = JsonArray::try_from(value)?;
        items.into_iter().map(String::try_from).collect()
    }
}

impl TryFrom<Value> for Vec<i64> {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let items = JsonArray::try_from(value)?;
        items.into_iter().map(i64::try_from).collect()
    }
}

impl TryFrom<Value> for Vec<f64> {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let items = JsonArray::try_from(value)?;
        items.into_iter().map(f64::try_from).collect()
    }
}
