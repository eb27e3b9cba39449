//! Infix parsing (left denotation)

use crate::frontend::core::lexer::{Operator, OperatorFamily};
use crate::frontend::core::parser::ast::{Node, NodeKind};
use crate::frontend::core::parser::pratt::BP_LOWEST;
use crate::frontend::core::parser::ParserState;
use crate::util::diagnostic::{Diagnostic, ErrorCodeDefinition};

impl ParserState<'_> {
    /// `lhs op rhs`; the current token is `op`
    pub fn parse_binary(
        &mut self,
        op: Operator,
        bp: u8,
        lhs: Node,
    ) -> Result<Node, Diagnostic> {
        let op_location = self.bump()?.location;

        let has_rhs = if op.family() == OperatorFamily::Boolean {
            self.starts_condition()?
        } else {
            self.starts_operand()?
        };
        if !has_rhs {
            return Err(ErrorCodeDefinition::missing_operand(op.symbol())
                .at(op_location)
                .build());
        }

        // left associative
        let rhs = self.parse_expression(bp + 1)?;
        let valid = if op.is_comparison() {
            rhs.returns_number()
        } else {
            rhs.is_expression()
        };
        if !valid {
            return Err(ErrorCodeDefinition::not_number_returning(&format!(
                "Right operand of '{}'",
                op
            ))
            .at(rhs.location)
            .build());
        }

        let location = lhs.location;
        Ok(Node::new(
            NodeKind::BinaryOperator {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            },
            location,
        ))
    }

    /// `condition ? then : else`; the current token is `?`
    pub fn parse_ternary(
        &mut self,
        condition: Node,
    ) -> Result<Node, Diagnostic> {
        self.bump()?;
        let then_branch = self.parse_ternary_branch()?;
        self.expect_punct(':')?;
        let else_branch = self.parse_ternary_branch()?;

        let location = condition.location;
        Ok(Node::new(
            NodeKind::IfTernary {
                condition: Box::new(condition),
                then_branch: Some(Box::new(then_branch)),
                else_branch: Some(Box::new(else_branch)),
                is_ternary: true,
            },
            location,
        ))
    }

    fn parse_ternary_branch(&mut self) -> Result<Node, Diagnostic> {
        let branch = self.parse_expression(BP_LOWEST)?;
        if !branch.returns_number() {
            return Err(ErrorCodeDefinition::not_number_returning("Ternary branch")
                .at(branch.location)
                .build());
        }
        Ok(branch)
    }
}
