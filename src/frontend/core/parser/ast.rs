//! Abstract Syntax Tree types

use crate::frontend::core::lexer::{Operator, Token};
use crate::util::span::Location;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Statement or expression node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub kind: NodeKind,
    pub location: Location,
}

/// Node variants
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum NodeKind {
    /// Two or more statements; see [`Node::sequence`]
    MultiStatement(Vec<Node>),
    Number(i64),
    /// Function reference, resolved after all files are collected
    Call(String),
    NullaryOperator(Operator),
    /// `None` operand means the current pointer (lookups only)
    UnaryOperator {
        op: Operator,
        operand: Option<Box<Node>>,
    },
    BinaryOperator {
        op: Operator,
        lhs: Box<Node>,
        rhs: Box<Node>,
    },
    DoWhile {
        condition: Box<Node>,
        body: Option<Box<Node>>,
        is_while: bool,
    },
    IfTernary {
        condition: Box<Node>,
        then_branch: Option<Box<Node>>,
        else_branch: Option<Box<Node>>,
        is_ternary: bool,
    },
    For {
        init: Option<Box<Node>>,
        condition: Box<Node>,
        step: Option<Box<Node>>,
        body: Option<Box<Node>>,
    },
}

impl Node {
    #[inline]
    pub fn new(
        kind: NodeKind,
        location: Location,
    ) -> Self {
        Self { kind, location }
    }

    #[inline]
    pub fn number(
        value: i64,
        location: Location,
    ) -> Self {
        Self::new(NodeKind::Number(value), location)
    }

    /// Collapse a statement list: nothing for an empty list, the bare
    /// statement for a singleton, a `MultiStatement` otherwise
    pub fn sequence(
        mut statements: Vec<Node>,
        location: Location,
    ) -> Option<Node> {
        match statements.len() {
            0 => None,
            1 => statements.pop(),
            _ => Some(Node::new(NodeKind::MultiStatement(statements), location)),
        }
    }

    /// Number literal, pointer lookup, ternary or arithmetic/bitwise combination
    pub fn returns_number(&self) -> bool {
        match &self.kind {
            NodeKind::Number(_) => true,
            NodeKind::UnaryOperator { op, .. } => op.is_lookup(),
            NodeKind::BinaryOperator { op, .. } => op.yields_number(),
            NodeKind::IfTernary { is_ternary, .. } => *is_ternary,
            _ => false,
        }
    }

    /// Produces a value that a binary operator or `?` may continue
    pub fn is_expression(&self) -> bool {
        match &self.kind {
            NodeKind::BinaryOperator { .. } => true,
            NodeKind::UnaryOperator { op, .. } if op.is_comparison() => true,
            _ => self.returns_number(),
        }
    }

    /// Pre-order traversal
    pub fn walk<'a>(
        &'a self,
        f: &mut dyn FnMut(&'a Node),
    ) {
        f(self);
        match &self.kind {
            NodeKind::MultiStatement(statements) => {
                for statement in statements {
                    statement.walk(f);
                }
            }
            NodeKind::UnaryOperator { operand, .. } => {
                if let Some(operand) = operand {
                    operand.walk(f);
                }
            }
            NodeKind::BinaryOperator { lhs, rhs, .. } => {
                lhs.walk(f);
                rhs.walk(f);
            }
            NodeKind::DoWhile {
                condition, body, ..
            } => {
                condition.walk(f);
                walk_opt(body, f);
            }
            NodeKind::IfTernary {
                condition,
                then_branch,
                else_branch,
                ..
            } => {
                condition.walk(f);
                walk_opt(then_branch, f);
                walk_opt(else_branch, f);
            }
            NodeKind::For {
                init,
                condition,
                step,
                body,
            } => {
                walk_opt(init, f);
                condition.walk(f);
                walk_opt(step, f);
                walk_opt(body, f);
            }
            NodeKind::Number(_) | NodeKind::Call(_) | NodeKind::NullaryOperator(_) => {}
        }
    }

    /// Every `Call` in this subtree, in source order
    pub fn calls(&self) -> Vec<(&str, Location)> {
        let mut calls = Vec::new();
        self.walk(&mut |node| {
            if let NodeKind::Call(name) = &node.kind {
                calls.push((name.as_str(), node.location));
            }
        });
        calls
    }
}

fn walk_opt<'a>(
    node: &'a Option<Box<Node>>,
    f: &mut dyn FnMut(&'a Node),
) {
    if let Some(node) = node {
        node.walk(f);
    }
}

/// `include "path"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Include {
    /// As written in the source
    pub target: String,
    /// Joined with the including file's directory
    pub path: PathBuf,
    pub location: Location,
}

/// `define NAME tokens... [enddef]`
///
/// The replacement stays a raw token run until it is spliced into a use site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Define {
    pub name: String,
    pub replacement: Vec<Token>,
    pub location: Location,
}

/// `NAME { statements }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Function {
    pub name: String,
    pub body: Option<Node>,
    pub location: Location,
}

fn parenthesize(node: &Node) -> String {
    format!("({})", node)
}

fn block(body: &Option<Box<Node>>) -> String {
    match body {
        Some(body) => format!("{{\n{}\n}}", body),
        None => "{}".to_string(),
    }
}

impl fmt::Display for Node {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match &self.kind {
            NodeKind::MultiStatement(statements) => {
                for (i, statement) in statements.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}", statement)?;
                }
                Ok(())
            }
            NodeKind::Number(n) => write!(f, "{}", n),
            NodeKind::Call(name) => write!(f, "{}", name),
            NodeKind::NullaryOperator(op) => write!(f, "{}", op),
            NodeKind::UnaryOperator { op, operand } => match operand {
                Some(operand) => write!(f, "{}{}", op, parenthesize(operand)),
                None => write!(f, "{}", op),
            },
            NodeKind::BinaryOperator { op, lhs, rhs } => {
                write!(f, "{}{}{}", parenthesize(lhs), op, parenthesize(rhs))
            }
            NodeKind::DoWhile {
                condition,
                body,
                is_while: true,
            } => write!(f, "while ({}) {}", condition, block(body)),
            NodeKind::DoWhile {
                condition,
                body,
                is_while: false,
            } => write!(f, "do {} while ({})", block(body), condition),
            NodeKind::IfTernary {
                condition,
                then_branch: Some(then_branch),
                else_branch: Some(else_branch),
                is_ternary: true,
            } => write!(
                f,
                "{}?{}:{}",
                parenthesize(condition),
                parenthesize(then_branch),
                parenthesize(else_branch)
            ),
            NodeKind::IfTernary {
                condition,
                then_branch,
                else_branch,
                ..
            } => {
                write!(f, "if ({}) {}", condition, block(then_branch))?;
                match else_branch.as_deref() {
                    Some(else_if)
                        if matches!(
                            else_if.kind,
                            NodeKind::IfTernary {
                                is_ternary: false,
                                ..
                            }
                        ) =>
                    {
                        write!(f, " else {}", else_if)
                    }
                    Some(_) => write!(f, " else {}", block(else_branch)),
                    None => Ok(()),
                }
            }
            NodeKind::For {
                init,
                condition,
                step,
                body,
            } => {
                let clause = |node: &Option<Box<Node>>| {
                    node.as_ref().map(|n| n.to_string()).unwrap_or_default()
                };
                write!(
                    f,
                    "for ({}; {}; {}) {}",
                    clause(init),
                    condition,
                    clause(step),
                    block(body)
                )
            }
        }
    }
}

impl fmt::Display for Include {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "include \"{}\"", self.target)
    }
}

impl fmt::Display for Define {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "define {}:", self.name)?;
        for token in &self.replacement {
            write!(f, " {}", token)?;
        }
        Ok(())
    }
}

impl fmt::Display for Function {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match &self.body {
            Some(body) => write!(f, "{} {{\n{}\n}}", self.name, body),
            None => write!(f, "{} {{}}", self.name),
        }
    }
}
