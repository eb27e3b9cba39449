//! Lexer state management
//! Handles keyword recognition and the rollback checkpoint

use super::tokens::{Keyword, Token};
use std::collections::VecDeque;

/// Convert string to keyword
///
/// Anything that is not a keyword is an identifier, never an error.
pub fn keyword_from_str(s: &str) -> Option<Keyword> {
    match s {
        "include" => Some(Keyword::Include),
        "define" => Some(Keyword::Define),
        "enddef" => Some(Keyword::EndDefine),
        "if" => Some(Keyword::If),
        "else" => Some(Keyword::Else),
        "for" => Some(Keyword::For),
        "while" => Some(Keyword::While),
        "do" => Some(Keyword::Do),
        _ => None,
    }
}

/// Raw character cursor (offset into the source plus line/column)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cursor {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Cursor {
    pub fn start() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 1,
        }
    }
}

/// Saved lexer state, restored with [`Lexer::reset`](super::Lexer::reset)
///
/// Holds copies of the current token and of the pushback buffer, so restoring
/// never observes tokens produced after the mark was taken.
#[derive(Debug, Clone)]
pub struct LexerMark {
    pub(crate) cursor: Cursor,
    pub(crate) current: Token,
    pub(crate) pending: VecDeque<Token>,
    pub(crate) exhausted: bool,
}
