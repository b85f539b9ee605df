// Author: Dustin Pilgrim
// License: MIT

use crate::ast::Value;
use crate::lexer::{Lexer, Token};
use crate::JsonError;

mod value;

/// Containers nested deeper than this are rejected with
/// `DepthLimitExceeded` instead of risking the call stack.
pub const MAX_DEPTH: usize = 128;

/// Recursive-descent parser over a token sequence.
///
/// The cursor only moves forward; there is no backtracking. Trailing tokens
/// after the first complete value production are left unconsumed.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, pos: 0 }
    }

    /// Full text front half: sanitize, tokenize, parse one value.
    pub fn parse_str(input: &str) -> Result<Value, JsonError> {
        let tokens = Lexer::tokenize(input)?;
        Parser::new(tokens).parse()
    }

    /// Parse the value production starting at the cursor.
    pub fn parse(&mut self) -> Result<Value, JsonError> {
        value::parse_value(self, 0)
    }

    pub(crate) fn bump(&mut self) -> Result<Token, JsonError> {
        let curr = self
            .tokens
            .get(self.pos)
            .cloned()
            .ok_or(JsonError::UnexpectedEof {
                message: "Ran out of tokens mid-production".into(),
                offset: self.pos,
                hint: None,
                code: Some(201),
            })?;
        self.pos += 1;
        Ok(curr)
    }

    pub(crate) fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }
}
