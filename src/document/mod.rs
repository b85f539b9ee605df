// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::{Path, PathBuf};

use crate::ast::Value;
use crate::format;
use crate::parser::Parser;
use crate::JsonError;

mod access;
mod conversion;

/// User-facing handle around a parsed document tree.
///
/// Wraps the root [`Value`] and adds the boundary operations: text and file
/// loading on the way in, formatting on the way out, and dot-path typed
/// access in between. `clone` deep-copies the whole tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JsonDocument {
    root: Value,
}

impl JsonDocument {
    /// Parse a document from text: sanitize, tokenize, parse.
    ///
    /// # Example
    /// ```
    /// # use jot_json::JsonDocument;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let doc = JsonDocument::parse(r#"{"port": 8080}"#)?;
    /// let port: u16 = doc.get("port")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn parse(input: &str) -> Result<Self, JsonError> {
        Ok(JsonDocument {
            root: Parser::parse_str(input)?,
        })
    }

    /// Wrap an already-built tree.
    pub fn from_root(root: Value) -> Self {
        JsonDocument { root }
    }

    /// Load a .json file. A leading `~/` expands to the home directory.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, JsonError> {
        let resolved = expand_home(path.as_ref())?;

        let content = fs::read_to_string(&resolved).map_err(|e| JsonError::FileError {
            message: format!("Failed to read file: {}", e),
            path: resolved.to_string_lossy().to_string(),
            hint: Some("Check that the file exists and is readable".into()),
            code: Some(301),
        })?;

        Self::parse(&content)
    }

    /// Load a document with fallback support.
    ///
    /// Tries the primary path first. If that fails (file not found),
    /// attempts to load from the fallback path.
    pub fn from_file_with_fallback<P: AsRef<Path>>(
        primary: P,
        fallback: P,
    ) -> Result<Self, JsonError> {
        match Self::from_file(&primary) {
            Ok(doc) => Ok(doc),
            Err(JsonError::FileError { .. }) => {
                // Primary file not found, try fallback
                Self::from_file(&fallback).map_err(|e| match e {
                    JsonError::FileError { message, .. } => JsonError::FileError {
                        message: format!(
                            "Failed to load document from primary path '{}' or fallback path '{}': {}",
                            primary.as_ref().display(),
                            fallback.as_ref().display(),
                            message
                        ),
                        path: format!(
                            "{} (fallback: {})",
                            primary.as_ref().display(),
                            fallback.as_ref().display()
                        ),
                        hint: Some("Check that at least one of the files exists".into()),
                        code: Some(301),
                    },
                    other => other,
                })
            }
            Err(other) => Err(other), // Pass through non-file errors
        }
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Value {
        &mut self.root
    }

    pub fn into_root(self) -> Value {
        self.root
    }

    /// Render the document with the indented subset formatter.
    pub fn format(&self) -> String {
        format::format_value(&self.root)
    }
}

/// Expand a leading "~/" against the home directory.
fn expand_home(path: &Path) -> Result<PathBuf, JsonError> {
    let raw = path.to_string_lossy();
    if let Some(rest) = raw.strip_prefix("~/") {
        let home = dirs::home_dir().ok_or_else(|| JsonError::FileError {
            message: "Could not determine home directory for ~ expansion".into(),
            path: raw.to_string(),
            hint: Some("Set HOME or use an absolute path".into()),
            code: Some(300),
        })?;
        Ok(home.join(rest))
    } else {
        Ok(path.to_path_buf())
    }
}

#[cfg(test)]
mod tests;
