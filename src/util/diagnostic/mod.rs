//! 统一诊断系统
//!
//! 提供错误码注册表、诊断构建与纯文本输出
//!
//! # 模块结构
//!
//! - [`error`] - 诊断数据结构 (Diagnostic, Severity)
//! - [`codes`] - 错误码注册表与 DiagnosticBuilder
//!
//! 诊断只以纯文本写入错误通道，不做彩色或结构化渲染。

pub mod codes;
pub mod error;

// 重新导出
pub use codes::{DiagnosticBuilder, ErrorCategory, ErrorCodeDefinition};
pub use error::{Diagnostic, Severity};

/// 将诊断逐行写到 stderr
pub fn emit<'a>(diagnostics: impl IntoIterator<Item = &'a Diagnostic>) {
    for diagnostic in diagnostics {
        eprintln!("{}", diagnostic);
    }
}
