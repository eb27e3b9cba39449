//! Token types

use super::operators::Operator;
use crate::util::span::Location;
use serde::Serialize;
use std::fmt;

/// Keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Keyword {
    Include,
    Define,
    EndDefine,
    If,
    Else,
    For,
    While,
    Do,
}

impl Keyword {
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Include => "include",
            Keyword::Define => "define",
            Keyword::EndDefine => "enddef",
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::For => "for",
            Keyword::While => "while",
            Keyword::Do => "do",
        }
    }
}

/// Token kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    Eof,
    Keyword(Keyword),
    /// Decimal, hex and character literals
    Number(i64),
    Identifier(String),
    /// Only used for include file names
    Str(String),
    Operator(Operator),
    /// Any other single character, e.g. `( ) { } ; : ?`
    Punct(char),
}

impl TokenKind {
    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self, TokenKind::Eof)
    }

    #[inline]
    pub fn is_punct(
        &self,
        c: char,
    ) -> bool {
        matches!(self, TokenKind::Punct(p) if *p == c)
    }

    #[inline]
    pub fn is_keyword(
        &self,
        kw: Keyword,
    ) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == kw)
    }

    pub fn identifier(&self) -> Option<&str> {
        match self {
            TokenKind::Identifier(name) => Some(name),
            _ => None,
        }
    }

    /// Human readable description for diagnostics
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Eof => "end of file".to_string(),
            TokenKind::Keyword(kw) => format!("keyword '{}'", kw.as_str()),
            TokenKind::Number(n) => format!("number {}", n),
            TokenKind::Identifier(name) => format!("identifier '{}'", name),
            TokenKind::Str(s) => format!("string \"{}\"", s),
            TokenKind::Operator(op) => format!("operator '{}'", op),
            TokenKind::Punct(c) => format!("'{}'", c),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            TokenKind::Eof => write!(f, "EOF"),
            TokenKind::Keyword(kw) => write!(f, "{}", kw.as_str()),
            TokenKind::Number(n) => write!(f, "N:{}", n),
            TokenKind::Identifier(name) => write!(f, "ID:{}", name),
            TokenKind::Str(s) => write!(f, "\"{}\"", s),
            TokenKind::Operator(op) => write!(f, "{}", op),
            TokenKind::Punct(c) => write!(f, "{}", c),
        }
    }
}

/// Token
///
/// Immutable once produced; rollback buffers hold copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub location: Location,
}

impl Token {
    #[inline]
    pub fn new(
        kind: TokenKind,
        location: Location,
    ) -> Self {
        Self { kind, location }
    }

    #[inline]
    pub fn eof(location: Location) -> Self {
        Self::new(TokenKind::Eof, location)
    }
}

impl From<TokenKind> for Token {
    fn from(kind: TokenKind) -> Self {
        Token {
            kind,
            location: Location::dummy(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}
