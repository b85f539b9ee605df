use super::*;
use crate::ast::ValueKind;

impl JsonDocument {
    /// Get a typed value from the document using dot notation.
    ///
    /// Numeric segments index into arrays, other segments look up
    /// dictionary keys.
    ///
    /// # Examples
    /// ```no_run
    /// # use jot_json::JsonDocument;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let doc = JsonDocument::from_file("config.json")?;
    /// let host: String = doc.get("server.host")?;
    /// let port: u16 = doc.get("server.port")?;
    /// let first: i64 = doc.get("replicas.0")?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// Returns an error if the path doesn't exist or the value can't be
    /// converted to type T.
    pub fn get<T>(&self, path: &str) -> Result<T, JsonError>
    where
        T: TryFrom<Value, Error = JsonError>,
    {
        let value = self.get_value(path)?;
        T::try_from(value)
    }

    /// Get an optional typed value - returns `None` if the path doesn't
    /// resolve. Type mismatches on a path that does resolve stay errors.
    pub fn get_optional<T>(&self, path: &str) -> Result<Option<T>, JsonError>
    where
        T: TryFrom<Value, Error = JsonError>,
    {
        match self.get_value(path) {
            Ok(value) => Ok(Some(T::try_from(value)?)),
            Err(JsonError::PathError { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get a value with a fallback default.
    ///
    /// # Examples
    /// ```no_run
    /// # use jot_json::JsonDocument;
    /// # let doc = JsonDocument::from_file("config.json").unwrap();
    /// let timeout = doc.get_or("server.timeout", 30u64);
    /// let debug = doc.get_or("debug", false);
    /// ```
    pub fn get_or<T>(&self, path: &str, default: T) -> T
    where
        T: TryFrom<Value, Error = JsonError>,
    {
        self.get(path).unwrap_or(default)
    }

    /// Get a raw `Value` at a dot path. The empty path is the root.
    pub fn get_value(&self, path: &str) -> Result<Value, JsonError> {
        if path.trim().is_empty() {
            return Ok(self.root.clone());
        }

        let mut current = &self.root;
        for segment in path.split('.') {
            current = lookup_segment(current, segment, path)?;
        }
        Ok(current.clone())
    }

    /// Check if a path exists.
    pub fn has(&self, path: &str) -> bool {
        self.get_value(path).is_ok()
    }

    /// Get all keys of the dictionary at a path, in sorted order.
    pub fn keys(&self, path: &str) -> Result<Vec<String>, JsonError> {
        let value = self.get_value(path)?;
        match value {
            Value::Dict(entries) => Ok(entries.keys().cloned().collect()),
            other => Err(JsonError::TypeMismatch {
                expected: ValueKind::Dictionary,
                found: other.kind(),
                hint: Some("Only dictionaries have keys".into()),
                code: Some(401),
            }),
        }
    }
}

/// One dot-path step: a dictionary key, or an array index when the segment
/// parses as one.
fn lookup_segment<'a>(
    current: &'a Value,
    segment: &str,
    full_path: &str,
) -> Result<&'a Value, JsonError> {
    match current {
        Value::Dict(entries) => entries
            .get(segment)
            .ok_or_else(|| path_error(full_path, format!("Key '{}' not found", segment))),
        Value::Array(items) => {
            let index: usize = segment.parse().map_err(|_| {
                path_error(
                    full_path,
                    format!("Segment '{}' is not an array index", segment),
                )
            })?;
            items.get(index).ok_or_else(|| {
                path_error(
                    full_path,
                    format!("Index {} out of range for array of length {}", index, items.len()),
                )
            })
        }
        other => Err(path_error(
            full_path,
            format!("Cannot descend into a {} node", other.kind()),
        )),
    }
}

fn path_error(path: &str, message: String) -> JsonError {
    JsonError::PathError {
        message,
        path: path.to_string(),
        hint: Some("Check that the path exists in your document".into()),
        code: Some(304),
    }
}
