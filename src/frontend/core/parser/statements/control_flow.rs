//! Control flow statement parsing
//! Handles if/else, for, while and do-while

use super::StatementParser;
use crate::frontend::core::lexer::Keyword;
use crate::frontend::core::parser::ast::{Node, NodeKind};
use crate::frontend::core::parser::pratt::BP_LOWEST;
use crate::frontend::core::parser::ParserState;
use crate::util::diagnostic::Diagnostic;
use crate::util::span::Location;

/// Parse `if (cond) body [else body]`; `else if` chains nest in the else branch
pub fn parse_if_stmt(
    state: &mut ParserState<'_>,
    location: Location,
) -> Result<Node, Diagnostic> {
    state.bump()?; // consume 'if'
    let condition = parse_condition(state)?;
    let then_branch = state.parse_multi_statement(false)?;

    let else_branch = if state.kind().is_keyword(Keyword::Else) {
        state.bump()?;
        if state.kind().is_keyword(Keyword::If) {
            let else_if_location = state.location();
            Some(parse_if_stmt(state, else_if_location)?)
        } else {
            state.parse_multi_statement(false)?
        }
    } else {
        None
    };

    Ok(Node::new(
        NodeKind::IfTernary {
            condition: Box::new(condition),
            then_branch: then_branch.map(Box::new),
            else_branch: else_branch.map(Box::new),
            is_ternary: false,
        },
        location,
    ))
}

/// Parse `for (init; cond; step) body`
///
/// `init` and `step` may hold several statements without braces.
pub fn parse_for_stmt(
    state: &mut ParserState<'_>,
    location: Location,
) -> Result<Node, Diagnostic> {
    state.bump()?; // consume 'for'
    state.expect_punct('(')?;
    let init = state.parse_multi_statement(true)?;
    state.expect_punct(';')?;
    let condition = state.parse_expression(BP_LOWEST)?;
    state.expect_punct(';')?;
    let step = state.parse_multi_statement(true)?;
    state.expect_punct(')')?;
    let body = state.parse_multi_statement(false)?;

    Ok(Node::new(
        NodeKind::For {
            init: init.map(Box::new),
            condition: Box::new(condition),
            step: step.map(Box::new),
            body: body.map(Box::new),
        },
        location,
    ))
}

/// Parse `while (cond) body`
pub fn parse_while_stmt(
    state: &mut ParserState<'_>,
    location: Location,
) -> Result<Node, Diagnostic> {
    state.bump()?; // consume 'while'
    let condition = parse_condition(state)?;
    let body = state.parse_multi_statement(false)?;

    Ok(Node::new(
        NodeKind::DoWhile {
            condition: Box::new(condition),
            body: body.map(Box::new),
            is_while: true,
        },
        location,
    ))
}

/// Parse `do body while (cond)`
pub fn parse_do_while_stmt(
    state: &mut ParserState<'_>,
    location: Location,
) -> Result<Node, Diagnostic> {
    state.bump()?; // consume 'do'
    let body = state.parse_multi_statement(false)?;
    if !state.kind().is_keyword(Keyword::While) {
        return Err(state.expected("'while'"));
    }
    state.bump()?;
    let condition = parse_condition(state)?;

    Ok(Node::new(
        NodeKind::DoWhile {
            condition: Box::new(condition),
            body: body.map(Box::new),
            is_while: false,
        },
        location,
    ))
}

/// `( expression )` after a control keyword
fn parse_condition(state: &mut ParserState<'_>) -> Result<Node, Diagnostic> {
    state.expect_punct('(')?;
    let condition = state.parse_expression(BP_LOWEST)?;
    state.expect_punct(')')?;
    Ok(condition)
}
