//! Statement parsing modules
//! Statement sequences live here; control constructs and top-level
//! declarations have their own modules

pub mod control_flow;
pub mod declarations;

pub use control_flow::*;

use crate::frontend::core::lexer::TokenKind;
use crate::frontend::core::parser::ast::Node;
use crate::frontend::core::parser::pratt::BP_LOWEST;
use crate::frontend::core::parser::ParserState;
use crate::util::diagnostic::Diagnostic;

/// Statement-level rules
pub trait StatementParser {
    /// One statement, a braced block, or `None` at a terminator
    fn parse_statement(&mut self) -> Result<Option<Node>, Diagnostic>;

    /// Without `force_multi` a `{` opens a block and anything else is a
    /// single statement; with it, statements are read until `;`, `)`, `}`
    /// or end of file without requiring braces
    fn parse_multi_statement(
        &mut self,
        force_multi: bool,
    ) -> Result<Option<Node>, Diagnostic>;
}

impl StatementParser for ParserState<'_> {
    fn parse_statement(&mut self) -> Result<Option<Node>, Diagnostic> {
        self.expand_defines()?;
        match self.kind() {
            TokenKind::Eof | TokenKind::Punct(';' | ')' | '}') => Ok(None),
            TokenKind::Punct('{') => self.parse_block(),
            _ => self.parse_expression(BP_LOWEST).map(Some),
        }
    }

    fn parse_multi_statement(
        &mut self,
        force_multi: bool,
    ) -> Result<Option<Node>, Diagnostic> {
        self.expand_defines()?;
        let location = self.location();
        if force_multi {
            let statements = self.parse_statement_list(true)?;
            return Ok(Node::sequence(statements, location));
        }
        self.parse_statement()
    }
}

impl ParserState<'_> {
    /// Statements up to `)`, `}` or end of file
    ///
    /// `;` separates statements, or also ends the list when
    /// `stop_at_semicolon` is set.
    pub fn parse_statement_list(
        &mut self,
        stop_at_semicolon: bool,
    ) -> Result<Vec<Node>, Diagnostic> {
        let mut statements = Vec::new();
        loop {
            self.expand_defines()?;
            match self.kind() {
                TokenKind::Punct(';') if !stop_at_semicolon => {
                    self.bump()?;
                }
                TokenKind::Eof | TokenKind::Punct(';' | ')' | '}') => break,
                TokenKind::Punct('{') => statements.extend(self.parse_block()?),
                _ => statements.push(self.parse_expression(BP_LOWEST)?),
            }
        }
        Ok(statements)
    }

    /// `{ statements }`
    pub fn parse_block(&mut self) -> Result<Option<Node>, Diagnostic> {
        self.nested(Self::block)
    }

    fn block(&mut self) -> Result<Option<Node>, Diagnostic> {
        let location = self.expect_punct('{')?.location;
        let statements = self.parse_statement_list(false)?;
        if !self.at_punct('}') {
            return Err(self.expected("'}'"));
        }
        self.bump()?;
        Ok(Node::sequence(statements, location))
    }
}
