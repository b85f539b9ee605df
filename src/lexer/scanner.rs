use super::Lexer;

/// Strip structurally-insignificant characters before tokenization.
///
/// Newlines, carriage returns, and NULs go everywhere; spaces go only
/// outside of double-quoted strings. The grammar has no escape sequences,
/// so every quote toggles the in-string flag. Quotes themselves are kept
/// as delimiters for the tokenizer.
pub(super) fn sanitize(input: &str) -> Vec<char> {
    let mut output = Vec::with_capacity(input.len());
    let mut in_string = false;

    for c in input.chars() {
        if c == '\n' || c == '\r' || c == '\0' {
            continue;
        }
        if c == ' ' && !in_string {
            continue;
        }
        if c == '"' {
            in_string = !in_string;
        }
        output.push(c);
    }

    output
}

/// Peek at the current character without consuming it.
pub(super) fn peek_char(lexer: &Lexer) -> Option<char> {
    lexer.chars.get(lexer.offset).copied()
}

/// Advance the offset and return the character it was on.
pub(super) fn bump(lexer: &mut Lexer) -> Option<char> {
    let curr = peek_char(lexer);
    if curr.is_some() {
        lexer.offset += 1;
    }
    curr
}

/// Whether the buffer at the current offset starts with `literal`.
pub(super) fn at_literal(lexer: &Lexer, literal: &str) -> bool {
    let rest = &lexer.chars[lexer.offset..];
    literal.len() <= rest.len() && literal.chars().zip(rest).all(|(a, &b)| a == b)
}

/// Skip `n` characters, for consuming a matched literal.
pub(super) fn advance(lexer: &mut Lexer, n: usize) {
    lexer.offset += n;
}
