pub mod ast;
pub mod document;
pub mod error;
pub mod export;
pub mod format;
pub mod lexer;
pub mod parser;

pub use ast::{JsonArray, JsonDict, Value, ValueKind};
pub use document::JsonDocument;
pub use error::JsonError;

/// Parse a document from text: the full sanitize, tokenize, parse pipeline.
pub fn parse(input: &str) -> Result<JsonDocument, JsonError> {
    JsonDocument::parse(input)
}

/// Render a document to its indented textual form.
pub fn format(doc: &JsonDocument) -> String {
    doc.format()
}
