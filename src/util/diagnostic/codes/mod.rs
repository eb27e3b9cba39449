//! 错误码注册表
//!
//! 提供所有编译器错误码的集中定义和管理

pub mod e0xxx;
pub mod e2xxx;
pub mod e7xxx;

pub mod builder;
pub use builder::DiagnosticBuilder;

use once_cell::sync::Lazy;

/// 错误类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Lexer,    // E000x: 词法分析
    Parser,   // E001x: 语法分析
    Semantic, // E2xxx: 定义与标识符
    Io,       // E7xxx: 源文件与环境
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            ErrorCategory::Lexer => write!(f, "Lexer"),
            ErrorCategory::Parser => write!(f, "Parser"),
            ErrorCategory::Semantic => write!(f, "Semantic"),
            ErrorCategory::Io => write!(f, "I/O"),
        }
    }
}

/// 错误码定义
#[derive(Debug, Clone, Copy)]
pub struct ErrorCodeDefinition {
    /// 错误码，如 "E2003"
    pub code: &'static str,
    /// 错误类别
    pub category: ErrorCategory,
    /// 消息模板，支持 {param} 占位符
    pub message_template: &'static str,
}

/// 完整的错误码注册表
static ERROR_CODES: Lazy<Vec<ErrorCodeDefinition>> = Lazy::new(|| {
    let mut codes: Vec<ErrorCodeDefinition> = Vec::new();

    // E0xxx: 词法和语法分析
    codes.extend_from_slice(e0xxx::E0XXX);
    // E2xxx: 定义与标识符
    codes.extend_from_slice(e2xxx::E2XXX);
    // E7xxx: 源文件与环境
    codes.extend_from_slice(e7xxx::E7XXX);

    codes
});

impl ErrorCodeDefinition {
    /// 根据代码查找错误码定义
    pub fn find(code: &str) -> Option<&'static Self> {
        ERROR_CODES.iter().find(|c| c.code == code)
    }

    /// 获取所有错误码
    pub fn all() -> &'static [Self] {
        &ERROR_CODES
    }

    /// 按类别获取错误码
    pub fn by_category(category: ErrorCategory) -> impl Iterator<Item = &'static Self> {
        ERROR_CODES.iter().filter(move |c| c.category == category)
    }

    /// 创建 DiagnosticBuilder
    pub fn builder(&self) -> DiagnosticBuilder {
        DiagnosticBuilder::new(self.code, self.category, self.message_template)
    }
}
