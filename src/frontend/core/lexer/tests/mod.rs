//! Lexer tests module
//!
//! - basic: 标识符、关键字、空白符、位置
//! - literals: 数字、字符、字符串字面量
//! - operators: 运算符与 `@` 指针运算符
//! - comments: 注释
//! - errors: 错误处理与回溯
//! - fuzz: 属性测试

mod errors;
mod fuzz;

use crate::frontend::core::lexer::{tokenize, TokenKind};

/// Token kinds of `source` without the trailing EOF
pub(super) fn kinds(source: &str) -> Vec<TokenKind> {
    let mut tokens = tokenize(source).unwrap();
    assert!(tokens.pop().is_some_and(|t| t.kind.is_eof()));
    tokens.into_iter().map(|t| t.kind).collect()
}
