use super::*;
use crate::ast::{JsonArray, JsonDict};

pub(super) fn parse_value(parser: &mut Parser, depth: usize) -> Result<Value, JsonError> {
    match parser.peek() {
        Some(Token::Null) => parse_null_value(parser),
        Some(Token::Bool(_)) => parse_bool_value(parser),
        Some(Token::Number(_)) => parse_number_value(parser),
        Some(Token::String(_)) => parse_string_value(parser),
        Some(Token::LBracket) => parse_array_value(parser, depth),
        Some(Token::LBrace) => parse_dict_value(parser, depth),
        Some(tok) => Err(JsonError::UnparsableToken {
            token: tok.describe(),
            position: parser.position(),
            hint: Some("Expected a value here".into()),
            code: Some(210),
        }),
        None => Err(JsonError::UnexpectedEof {
            message: "Expected a value".into(),
            offset: parser.position(),
            hint: None,
            code: Some(201),
        }),
    }
}

fn parse_null_value(parser: &mut Parser) -> Result<Value, JsonError> {
    parser.bump()?; // consume null
    Ok(Value::Null)
}

fn parse_bool_value(parser: &mut Parser) -> Result<Value, JsonError> {
    if let Token::Bool(b) = parser.bump()? {
        Ok(Value::Bool(b))
    } else {
        unreachable!()
    }
}

fn parse_string_value(parser: &mut Parser) -> Result<Value, JsonError> {
    if let Token::String(s) = parser.bump()? {
        Ok(Value::String(s))
    } else {
        unreachable!()
    }
}

/// Numeric disambiguation is purely lexical: a '.' in the lexeme selects
/// Double, anything else is Int. A lexeme the native parse rejects
/// (e.g. "1.2.3" or a bare ".") is an unparsable token.
fn parse_number_value(parser: &mut Parser) -> Result<Value, JsonError> {
    let position = parser.position();
    if let Token::Number(raw) = parser.bump()? {
        let parsed = if raw.contains('.') {
            raw.parse::<f64>().map(Value::Double).ok()
        } else {
            raw.parse::<i64>().map(Value::Int).ok()
        };

        parsed.ok_or(JsonError::UnparsableToken {
            token: format!("number '{}'", raw),
            position,
            hint: Some("Not a valid numeric literal".into()),
            code: Some(210),
        })
    } else {
        unreachable!()
    }
}

fn parse_array_value(parser: &mut Parser, depth: usize) -> Result<Value, JsonError> {
    let position = parser.position();
    check_depth(depth, position)?;
    parser.bump()?; // consume [

    let mut items = JsonArray::new();
    loop {
        match parser.peek() {
            Some(Token::RBracket) => {
                parser.bump()?; // consume ]
                break;
            }
            Some(Token::Comma) => {
                // Commas are skipped wherever they appear, so trailing and
                // leading commas are tolerated.
                parser.bump()?;
            }
            Some(_) => {
                items.push(parse_value(parser, depth + 1)?);
            }
            None => {
                return Err(JsonError::UnexpectedEof {
                    message: "Array not closed".into(),
                    offset: parser.position(),
                    hint: Some("Add a closing ']'".into()),
                    code: Some(201),
                });
            }
        }
    }

    Ok(Value::Array(items))
}

fn parse_dict_value(parser: &mut Parser, depth: usize) -> Result<Value, JsonError> {
    let position = parser.position();
    check_depth(depth, position)?;
    parser.bump()?; // consume {

    let mut entries = JsonDict::new();
    loop {
        match parser.peek() {
            Some(Token::RBrace) => {
                parser.bump()?; // consume }
                break;
            }
            Some(Token::Comma) => {
                parser.bump()?;
            }
            Some(_) => {
                let (key, value) = parse_pair(parser, depth)?;
                // Duplicate keys: the last assignment wins.
                entries.insert(key, value);
            }
            None => {
                return Err(JsonError::UnexpectedEof {
                    message: "Dictionary not closed".into(),
                    offset: parser.position(),
                    hint: Some("Add a closing '}'".into()),
                    code: Some(201),
                });
            }
        }
    }

    Ok(Value::Dict(entries))
}

fn parse_pair(parser: &mut Parser, depth: usize) -> Result<(String, Value), JsonError> {
    let key_position = parser.position();
    let key = match parser.bump()? {
        Token::String(key) => key,
        other => {
            return Err(JsonError::ExpectedKey {
                token: other.describe(),
                position: key_position,
                hint: Some("Dictionary keys are double-quoted strings".into()),
                code: Some(207),
            });
        }
    };

    let colon_position = parser.position();
    match parser.bump()? {
        Token::Colon => {}
        other => {
            return Err(JsonError::ExpectedColon {
                token: other.describe(),
                position: colon_position,
                hint: None,
                code: Some(202),
            });
        }
    }

    let value = parse_value(parser, depth + 1)?;
    Ok((key, value))
}

fn check_depth(depth: usize, position: usize) -> Result<(), JsonError> {
    if depth >= MAX_DEPTH {
        return Err(JsonError::DepthLimitExceeded {
            limit: MAX_DEPTH,
            position,
            hint: Some("Flatten the document or raise MAX_DEPTH".into()),
            code: Some(211),
        });
    }
    Ok(())
}
