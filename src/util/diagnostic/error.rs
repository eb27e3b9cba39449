//! 诊断数据结构
//!
//! 提供统一的错误报告机制
//!
//! - `Diagnostic` 的 `message` 在构建时已渲染完成
//! - **只允许通过 `DiagnosticBuilder` 创建诊断**，所有错误码必须在注册表中注册
//!
//! ```ignore
//! ErrorCodeDefinition::unknown_identifier("loop")
//!     .at(location)
//!     .build();
//! ```

use super::codes::ErrorCategory;
use crate::util::span::Location;

/// 诊断严重级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// 检查是否为错误级别
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// 诊断信息（message 已渲染完成）
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// 严重级别
    pub severity: Severity,
    /// 错误码
    pub code: &'static str,
    /// 错误类别
    pub category: ErrorCategory,
    /// 完整消息
    pub message: String,
    /// 位置信息
    pub location: Option<Location>,
    /// 源文件
    pub file: Option<String>,
}

impl Diagnostic {
    /// `pub(crate)`: 仅由 `DiagnosticBuilder::build()` 调用
    pub(crate) fn new(
        severity: Severity,
        code: &'static str,
        category: ErrorCategory,
        message: String,
        location: Option<Location>,
    ) -> Self {
        Self {
            severity,
            code,
            category,
            message,
            location,
            file: None,
        }
    }

    /// Attach the source file the diagnostic points into, unless one is already set.
    pub fn in_file(
        mut self,
        file: impl Into<String>,
    ) -> Self {
        if self.file.is_none() {
            self.file = Some(file.into());
        }
        self
    }

    /// 检查是否为错误
    pub fn is_error(&self) -> bool {
        self.severity.is_error()
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)?;
        match (&self.file, self.location) {
            (Some(file), Some(loc)) if !loc.is_dummy() => write!(f, " ({}:{})", file, loc),
            (Some(file), _) => write!(f, " ({})", file),
            (None, Some(loc)) if !loc.is_dummy() => write!(f, " (at {})", loc),
            _ => Ok(()),
        }
    }
}

impl std::error::Error for Diagnostic {}
