//! Expression parsing by precedence climbing
//!
//! `nud` holds the prefix rules (primaries and operator-led statements),
//! `led` the continuation of a value by a binary operator or `?`.

pub mod led;
pub mod nud;
pub mod precedence;

pub use precedence::*;

use crate::frontend::core::lexer::TokenKind;
use crate::frontend::core::parser::ast::Node;
use crate::frontend::core::parser::ParserState;
use crate::util::diagnostic::Diagnostic;

impl ParserState<'_> {
    /// Parse a primary and continue it with operators binding at least `min_bp`
    pub fn parse_expression(
        &mut self,
        min_bp: u8,
    ) -> Result<Node, Diagnostic> {
        let lhs = self.parse_primary()?;
        self.parse_multary(min_bp, lhs)
    }

    /// Precedence-climbing loop over an already parsed left operand
    ///
    /// Only a value may be continued, so `. + 5` stays two statements.
    pub fn parse_multary(
        &mut self,
        min_bp: u8,
        mut lhs: Node,
    ) -> Result<Node, Diagnostic> {
        while lhs.is_expression() {
            self.expand_defines()?;
            lhs = match *self.kind() {
                TokenKind::Punct('?') if min_bp == BP_LOWEST => self.parse_ternary(lhs)?,
                TokenKind::Operator(op) => match binding_power(op) {
                    Some(bp) if bp >= min_bp => self.parse_binary(op, bp, lhs)?,
                    _ => break,
                },
                _ => break,
            };
        }
        Ok(lhs)
    }

    /// Whether the current token can start an operand
    ///
    /// Defines are expanded first, so a define whose replacement starts
    /// with a number counts as one.
    pub fn starts_operand(&mut self) -> Result<bool, Diagnostic> {
        self.expand_defines()?;
        Ok(match self.kind() {
            TokenKind::Number(_) => true,
            TokenKind::Operator(op) => op.is_lookup(),
            TokenKind::Punct('(') => true,
            _ => false,
        })
    }

    /// Operand or a prefix comparison (right side of a boolean operator)
    pub fn starts_condition(&mut self) -> Result<bool, Diagnostic> {
        if self.starts_operand()? {
            return Ok(true);
        }
        Ok(matches!(self.kind(), TokenKind::Operator(op) if op.is_comparison()))
    }
}
