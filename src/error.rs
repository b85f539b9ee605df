use std::fmt;

use crate::ast::ValueKind;

/// The main error type for JSON lexing, parsing, and document access.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonError {
    /// Raised when the lexer meets a character no token can start with.
    InvalidCharacter {
        character: char,
        offset: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when input ends inside a string literal or mid-production.
    UnexpectedEof {
        message: String,
        offset: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a dictionary key is not a string token.
    ExpectedKey {
        token: String,
        position: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a dictionary key is not followed by a colon.
    ExpectedColon {
        token: String,
        position: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when no value production starts with the current token.
    UnparsableToken {
        token: String,
        position: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when containers nest deeper than the parser's limit.
    DepthLimitExceeded {
        limit: usize,
        position: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised by typed getters invoked on a node of another kind.
    TypeMismatch {
        expected: ValueKind,
        found: ValueKind,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised by indexing operations on a node that is not indexable that way.
    WrongKind {
        expected: ValueKind,
        found: ValueKind,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised by integer indexing at or past the end of an array.
    IndexOutOfRange {
        index: usize,
        len: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a numeric conversion would not fit the target type.
    OutOfRange {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a dot-path lookup cannot be resolved.
    PathError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
}

impl fmt::Display for JsonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonError::InvalidCharacter { character, offset, hint, code } =>
                write!(f, "[JOT] Invalid character '{}' at offset {}{}{}",
                    character, offset,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            JsonError::UnexpectedEof { message, offset, hint, code } =>
                write!(f, "[JOT] Unexpected end of input at offset {}: {}{}{}",
                    offset, message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            JsonError::ExpectedKey { token, position, hint, code } =>
                write!(f, "[JOT] Expected string key, got {} at token {}{}{}",
                    token, position,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            JsonError::ExpectedColon { token, position, hint, code } =>
                write!(f, "[JOT] Expected colon after key, got {} at token {}{}{}",
                    token, position,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            JsonError::UnparsableToken { token, position, hint, code } =>
                write!(f, "[JOT] Unparsable token {} at token {}{}{}",
                    token, position,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            JsonError::DepthLimitExceeded { limit, position, hint, code } =>
                write!(f, "[JOT] Nesting deeper than {} levels at token {}{}{}",
                    limit, position,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            JsonError::TypeMismatch { expected, found, hint, code } =>
                write!(f, "[JOT] Type mismatch: wanted {}, node is {}{}{}",
                    expected, found,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            JsonError::WrongKind { expected, found, hint, code } =>
                write!(f, "[JOT] Wrong kind for indexing: wanted {}, node is {}{}{}",
                    expected, found,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            JsonError::IndexOutOfRange { index, len, hint, code } =>
                write!(f, "[JOT] Index {} out of range for array of length {}{}{}",
                    index, len,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            JsonError::OutOfRange { message, hint, code } =>
                write!(f, "[JOT] Out of range: {}{}{}",
                    message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            JsonError::FileError { message, path, hint, code } =>
                write!(f, "[JOT] File Error '{}': {}{}{}",
                    path, message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            JsonError::PathError { message, path, hint, code } =>
                write!(f, "[JOT] Path Error '{}': {}{}{}",
                    path, message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
        }
    }
}

impl std::error::Error for JsonError {}
