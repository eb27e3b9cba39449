//! Parser tests module
//!
//! - expressions: 运算符、默认操作数、优先级、三元表达式
//! - statements: 语句序列、代码块、控制结构
//! - declarations: include / define / function 与回溯
//! - errors: 语法与形状错误


use crate::frontend::core::lexer::{Lexer, Operator};
use crate::frontend::core::macros::resolve_defines;
use crate::frontend::core::parser::{parse_code, Node, NodeKind, ParserState};
use crate::frontend::core::symbols::SymbolTable;
use crate::util::diagnostic::Diagnostic;
use crate::util::span::Location;
use std::path::Path;

pub(super) fn parse(source: &str) -> Option<Node> {
    parse_code(source, &SymbolTable::new()).unwrap()
}

pub(super) fn parse_one(source: &str) -> Node {
    parse(source).expect("expected a statement")
}

pub(super) fn parse_err(source: &str) -> Diagnostic {
    parse_code(source, &SymbolTable::new()).unwrap_err()
}

/// Collect the defines at the top of `source`, resolve them, then parse the rest as code
pub(super) fn parse_with_defines(source: &str) -> Result<Option<Node>, Diagnostic> {
    let mut symbols = SymbolTable::new();
    let mut lexer = Lexer::new(source);
    lexer.next_token()?;
    loop {
        let define = ParserState::new(&mut lexer, &symbols, Path::new("")).parse_define()?;
        let Some(define) = define else {
            break;
        };
        symbols.insert_define(define, Path::new("test.bp"));
    }
    resolve_defines(&mut symbols)?;
    ParserState::new(&mut lexer, &symbols, Path::new("")).parse_code()
}

pub(super) fn statements(node: Node) -> Vec<Node> {
    match node.kind {
        NodeKind::MultiStatement(statements) => statements,
        _ => vec![node],
    }
}

pub(super) fn num(n: i64) -> NodeKind {
    NodeKind::Number(n)
}

pub(super) fn unary(
    node: &Node,
) -> (Operator, Option<&Node>) {
    match &node.kind {
        NodeKind::UnaryOperator { op, operand } => (*op, operand.as_deref()),
        other => panic!("Expected unary operator, got {:?}", other),
    }
}

pub(super) fn binary(node: &Node) -> (Operator, &Node, &Node) {
    match &node.kind {
        NodeKind::BinaryOperator { op, lhs, rhs } => (*op, lhs, rhs),
        other => panic!("Expected binary operator, got {:?}", other),
    }
}

pub(super) fn at(
    line: usize,
    column: usize,
) -> Location {
    Location::new(line, column)
}
