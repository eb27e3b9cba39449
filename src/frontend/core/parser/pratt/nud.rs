//! Prefix parsing (null denotation)

use super::precedence::{binding_power, BP_LOWEST, BP_PREFIX};
use crate::frontend::core::lexer::{Keyword, Operator, TokenKind};
use crate::frontend::core::parser::ast::{Node, NodeKind};
use crate::frontend::core::parser::statements::control_flow;
use crate::frontend::core::parser::ParserState;
use crate::util::diagnostic::{Diagnostic, ErrorCodeDefinition};
use crate::util::span::Location;

impl ParserState<'_> {
    /// Parse a primary: literal, call, parenthesized expression, control
    /// construct or operator-led statement
    pub fn parse_primary(&mut self) -> Result<Node, Diagnostic> {
        self.nested(Self::primary)
    }

    fn primary(&mut self) -> Result<Node, Diagnostic> {
        self.expand_defines()?;
        let location = self.location();

        match self.kind().clone() {
            TokenKind::Number(n) => {
                self.bump()?;
                Ok(Node::number(n, location))
            }
            TokenKind::Identifier(name) => {
                self.bump()?;
                Ok(Node::new(NodeKind::Call(name), location))
            }
            TokenKind::Keyword(Keyword::If) => control_flow::parse_if_stmt(self, location),
            TokenKind::Keyword(Keyword::For) => control_flow::parse_for_stmt(self, location),
            TokenKind::Keyword(Keyword::While) => control_flow::parse_while_stmt(self, location),
            TokenKind::Keyword(Keyword::Do) => control_flow::parse_do_while_stmt(self, location),
            TokenKind::Punct('(') => self.parse_parenthesized(),
            TokenKind::Operator(op) => {
                self.bump()?;
                self.parse_op(op, location)
            }
            _ => Err(self.unexpected()),
        }
    }

    /// `( expression )`
    pub fn parse_parenthesized(&mut self) -> Result<Node, Diagnostic> {
        self.expect_punct('(')?;
        let inner = self.parse_expression(BP_LOWEST)?;
        if !self.at_punct(')') {
            return Err(self.expected("')'"));
        }
        self.bump()?;
        Ok(inner)
    }

    /// Operator in prefix position; `op` is already consumed
    ///
    /// Comparisons need an explicit number-returning operand. Otherwise a
    /// missing operand defaults to the current pointer for lookups, to `0`
    /// for assignments and to `1` for everything else.
    pub fn parse_op(
        &mut self,
        op: Operator,
        location: Location,
    ) -> Result<Node, Diagnostic> {
        if op.is_nullary() {
            return Ok(Node::new(NodeKind::NullaryOperator(op), location));
        }

        let operand = if self.starts_operand()? {
            let operand = self.parse_expression(operand_bp(op))?;
            let valid = if op.is_comparison() {
                operand.returns_number()
            } else {
                operand.is_expression()
            };
            if !valid {
                return Err(ErrorCodeDefinition::not_number_returning(&format!(
                    "Operand of '{}'",
                    op
                ))
                .at(operand.location)
                .build());
            }
            Some(Box::new(operand))
        } else if op.is_comparison() {
            return Err(ErrorCodeDefinition::missing_operand(op.symbol())
                .at(location)
                .build());
        } else if op.is_lookup() {
            None
        } else if op.is_assignment() {
            Some(Box::new(Node::number(0, location)))
        } else {
            Some(Box::new(Node::number(1, location)))
        };

        Ok(Node::new(NodeKind::UnaryOperator { op, operand }, location))
    }
}

/// Binding power an operand of prefix `op` is parsed with
fn operand_bp(op: Operator) -> u8 {
    if op.is_lookup() {
        BP_PREFIX
    } else {
        match binding_power(op) {
            Some(bp) => bp + 1,
            None => BP_LOWEST,
        }
    }
}
