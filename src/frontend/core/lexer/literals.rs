//! Literal scanning implementations
//! Handles number, string, and character literals

use super::tokenizer::Lexer;
use super::tokens::TokenKind;
use crate::util::diagnostic::{Diagnostic, ErrorCodeDefinition};
use crate::util::span::Location;

/// Scan a number literal (decimal, or hex after a zero prefix)
///
/// Hex mode is entered when the value read so far is zero and the next
/// character is `x`/`X`, so `0x1F` and `00x1F` both read as 31. A bare `0x`
/// reads as zero.
pub fn scan_number(
    lexer: &mut Lexer,
    first_char: char,
    start: Location,
) -> Result<TokenKind, Diagnostic> {
    let mut text = String::from(first_char);
    let mut value = Some(digit_value(first_char));

    while let Some(c) = lexer.peek().filter(char::is_ascii_digit) {
        lexer.advance();
        text.push(c);
        value = value
            .and_then(|v| v.checked_mul(10))
            .and_then(|v| v.checked_add(digit_value(c)));
    }

    if value == Some(0) && matches!(lexer.peek(), Some('x' | 'X')) {
        if let Some(x) = lexer.advance() {
            text.push(x);
        }
        while let Some(c) = lexer.peek().filter(char::is_ascii_hexdigit) {
            lexer.advance();
            text.push(c);
            value = value
                .and_then(|v| v.checked_mul(16))
                .and_then(|v| v.checked_add(digit_value(c)));
        }
    }

    match value {
        Some(n) => Ok(TokenKind::Number(n)),
        None => Err(ErrorCodeDefinition::number_out_of_range(&text)
            .at(start)
            .build()),
    }
}

/// Scan a character literal; the opening quote is already consumed
pub fn scan_char(
    lexer: &mut Lexer,
    start: Location,
) -> Result<TokenKind, Diagnostic> {
    let unterminated = || {
        ErrorCodeDefinition::unterminated_char_literal()
            .at(start)
            .build()
    };

    let value = match lexer.advance() {
        None => return Err(unterminated()),
        Some('\'') => {
            return Err(ErrorCodeDefinition::empty_char_literal()
                .at(start)
                .build())
        }
        Some('\\') => escape_value(lexer.advance().ok_or_else(unterminated)?),
        Some(c) => c as i64,
    };

    match lexer.advance() {
        Some('\'') => Ok(TokenKind::Number(value)),
        None => Err(unterminated()),
        Some(_) => {
            // skip to the closing quote so only one error is reported
            loop {
                match lexer.advance() {
                    Some('\'') => {
                        return Err(ErrorCodeDefinition::multi_char_literal()
                            .at(start)
                            .build())
                    }
                    Some(_) => {}
                    None => return Err(unterminated()),
                }
            }
        }
    }
}

/// Scan a string literal; no escapes are recognized
pub fn scan_string(
    lexer: &mut Lexer,
    start: Location,
) -> Result<TokenKind, Diagnostic> {
    let mut value = String::new();
    loop {
        match lexer.advance() {
            Some('"') => return Ok(TokenKind::Str(value)),
            Some(c) => value.push(c),
            None => {
                return Err(ErrorCodeDefinition::unterminated_string()
                    .at(start)
                    .build())
            }
        }
    }
}

fn escape_value(c: char) -> i64 {
    match c {
        'a' => 7,
        'b' => 8,
        'f' => 12,
        'n' => 10,
        'r' => 13,
        't' => 9,
        'v' => 11,
        '1'..='7' => digit_value(c),
        c => c as i64,
    }
}

#[inline]
fn digit_value(c: char) -> i64 {
    c.to_digit(16).map(i64::from).unwrap_or(0)
}
