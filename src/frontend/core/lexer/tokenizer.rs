//! Tokenizer implementation
//! Main lexer structure and on-demand token generation

use super::literals::{scan_char, scan_number, scan_string};
use super::operators::Operator;
use super::state::{keyword_from_str, Cursor, LexerMark};
use super::tokens::{Token, TokenKind};
use crate::util::diagnostic::{Diagnostic, ErrorCodeDefinition};
use crate::util::span::Location;
use std::collections::VecDeque;

/// Main lexer structure
///
/// Produces tokens one at a time. Tokens pushed back with
/// [`Lexer::replace_current`] are handed out before scanning resumes.
pub struct Lexer {
    chars: Vec<char>,
    cursor: Cursor,
    current: Token,
    pending: VecDeque<Token>,
    exhausted: bool,
}

impl Lexer {
    /// Create a new lexer for the given source
    ///
    /// Carriage returns are dropped up front so CRLF input lexes like LF.
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().filter(|&c| c != '\r').collect(),
            cursor: Cursor::start(),
            current: Token::eof(Location::start()),
            pending: VecDeque::new(),
            exhausted: false,
        }
    }

    /// Location of the next unread character
    #[inline]
    pub fn location(&self) -> Location {
        Location::new(self.cursor.line, self.cursor.column)
    }

    /// Last produced token
    #[inline]
    pub fn current(&self) -> &Token {
        &self.current
    }

    /// True until the end-of-file token has been produced
    #[inline]
    pub fn source_good(&self) -> bool {
        !self.exhausted
    }

    /// Snapshot for backtracking
    pub fn mark(&self) -> LexerMark {
        LexerMark {
            cursor: self.cursor,
            current: self.current.clone(),
            pending: self.pending.clone(),
            exhausted: self.exhausted,
        }
    }

    /// Rewind to a snapshot taken with [`Lexer::mark`]
    pub fn reset(
        &mut self,
        mark: LexerMark,
    ) {
        self.cursor = mark.cursor;
        self.current = mark.current;
        self.pending = mark.pending;
        self.exhausted = mark.exhausted;
    }

    /// Replace the current token with `tokens`
    ///
    /// The first replacement becomes current, the rest are returned by the
    /// following calls to [`Lexer::next_token`] before the source is read
    /// again. An empty replacement simply advances.
    ///
    /// Spliced tokens take the location of the token they replace, so
    /// diagnostics point at the use site in this source.
    pub fn replace_current(
        &mut self,
        tokens: &[Token],
    ) -> Result<(), Diagnostic> {
        let at = self.current.location;
        match tokens.split_first() {
            Some((first, rest)) => {
                for token in rest.iter().rev() {
                    self.pending.push_front(Token::new(token.kind.clone(), at));
                }
                self.current = Token::new(first.kind.clone(), at);
            }
            None => {
                self.next_token()?;
            }
        }
        Ok(())
    }

    /// Generate next token
    pub fn next_token(&mut self) -> Result<Token, Diagnostic> {
        let token = match self.pending.pop_front() {
            Some(token) => token,
            None => self.scan()?,
        };
        tracing::trace!("token {} at {}", token.kind, token.location);
        self.current = token.clone();
        Ok(token)
    }

    /// Advance to next character
    pub(super) fn advance(&mut self) -> Option<char> {
        let c = *self.chars.get(self.cursor.offset)?;
        self.cursor.offset += 1;
        if c == '\n' {
            self.cursor.line += 1;
            self.cursor.column = 1;
        } else {
            self.cursor.column += 1;
        }
        Some(c)
    }

    /// Peek at next character
    #[inline]
    pub(super) fn peek(&self) -> Option<char> {
        self.chars.get(self.cursor.offset).copied()
    }

    #[inline]
    fn peek_next(&self) -> Option<char> {
        self.chars.get(self.cursor.offset + 1).copied()
    }

    fn eat(
        &mut self,
        expected: char,
    ) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Skip whitespace and comments
    fn skip_trivia(&mut self) -> Result<(), Diagnostic> {
        while let Some(c) = self.peek() {
            match c {
                c if c.is_whitespace() => {
                    self.advance();
                }
                '/' if self.peek_next() == Some('/') => {
                    while let Some(c) = self.advance() {
                        if c == '\n' {
                            break;
                        }
                    }
                }
                '/' if self.peek_next() == Some('*') => {
                    let start = self.location();
                    self.advance();
                    self.advance();
                    loop {
                        match self.advance() {
                            Some('*') if self.peek() == Some('/') => {
                                self.advance();
                                break;
                            }
                            Some(_) => {}
                            None => {
                                return Err(ErrorCodeDefinition::unterminated_comment()
                                    .at(start)
                                    .build());
                            }
                        }
                    }
                }
                _ => break,
            }
        }
        Ok(())
    }

    fn scan(&mut self) -> Result<Token, Diagnostic> {
        self.skip_trivia()?;

        let start = self.location();
        let Some(c) = self.advance() else {
            self.exhausted = true;
            return Ok(Token::eof(start));
        };

        let kind = match c {
            c if c.is_alphabetic() => self.scan_identifier(c),
            c if c.is_ascii_digit() => scan_number(self, c, start)?,
            '\'' => scan_char(self, start)?,
            '"' => scan_string(self, start)?,
            c => match self.scan_operator(c) {
                Some(op) => TokenKind::Operator(op),
                None => TokenKind::Punct(c),
            },
        };
        Ok(Token::new(kind, start))
    }

    fn scan_identifier(
        &mut self,
        first: char,
    ) -> TokenKind {
        let mut name = String::from(first);
        while let Some(c) = self.peek() {
            if !c.is_alphanumeric() {
                break;
            }
            name.push(c);
            self.advance();
        }
        match keyword_from_str(&name) {
            Some(kw) => TokenKind::Keyword(kw),
            None => TokenKind::Identifier(name),
        }
    }

    /// Operator starting with the already consumed `c`
    fn scan_operator(
        &mut self,
        c: char,
    ) -> Option<Operator> {
        let op = match c {
            '.' => Operator::Print,
            ',' => Operator::Read,
            '+' => Operator::Add,
            '-' => Operator::Sub,
            '*' => Operator::Mul,
            '/' => Operator::Div,
            '#' => Operator::PtrStore,
            '=' if self.eat('=') => Operator::Eq,
            '=' => Operator::Assign,
            '<' if self.eat('=') => Operator::Le,
            '<' => Operator::Lt,
            '>' if self.eat('=') => Operator::Ge,
            '>' => Operator::Gt,
            '!' if self.eat('=') => Operator::Ne,
            '!' if self.eat('!') => Operator::BoolNot,
            '!' => Operator::BitNot,
            '&' if self.eat('&') => Operator::BoolAnd,
            '&' => Operator::BitAnd,
            '|' if self.eat('|') => Operator::BoolOr,
            '|' => Operator::BitOr,
            '^' if self.eat('^') => Operator::BoolXor,
            '^' => Operator::BitXor,
            '@' => self.scan_pointer_operator(),
            _ => return None,
        };
        Some(op)
    }

    /// `@` followed by an operator that has a pointer variant, else plain `@`
    ///
    /// The character after `@` is scanned speculatively and rewound when it
    /// does not form a pointer operator.
    fn scan_pointer_operator(&mut self) -> Operator {
        // `@//` and `@/*` open a comment, not `@/`
        if self.peek() == Some('/') && matches!(self.peek_next(), Some('/' | '*')) {
            return Operator::PtrLookup;
        }
        let checkpoint = self.cursor;
        if let Some(next) = self.advance() {
            // nothing starting with '@' has a pointer variant
            if next != '@' {
                if let Some(ptr) = self.scan_operator(next).and_then(Operator::pointer_variant) {
                    if ptr == Operator::PtrLookupRelUp && self.eat('#') {
                        return Operator::PtrLookupRelDown;
                    }
                    return ptr;
                }
            }
        }
        self.cursor = checkpoint;
        Operator::PtrLookup
    }
}
