//! 通用诊断构建器
//!
//! 支持模板参数化的错误消息构建器

use super::ErrorCategory;
use crate::util::diagnostic::{Diagnostic, Severity};
use crate::util::span::Location;

/// 诊断构建器（支持模板参数）
#[derive(Debug, Clone)]
pub struct DiagnosticBuilder {
    code: &'static str,
    category: ErrorCategory,
    message_template: &'static str,
    params: Vec<(&'static str, String)>,
    location: Option<Location>,
    severity: Severity,
}

impl DiagnosticBuilder {
    /// 创建新的诊断构建器
    pub fn new(
        code: &'static str,
        category: ErrorCategory,
        template: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            message_template: template,
            params: Vec::new(),
            location: None,
            severity: Severity::Error,
        }
    }

    /// 添加模板参数
    pub fn param(
        mut self,
        key: &'static str,
        value: impl Into<String>,
    ) -> Self {
        self.params.push((key, value.into()));
        self
    }

    /// 设置位置
    #[inline]
    pub fn at(
        mut self,
        location: Location,
    ) -> Self {
        self.location = Some(location);
        self
    }

    /// 降级为警告
    #[inline]
    pub fn warning(mut self) -> Self {
        self.severity = Severity::Warning;
        self
    }

    /// 构建 Diagnostic
    pub fn build(&self) -> Diagnostic {
        debug_assert!(
            self.missing_params().is_empty(),
            "missing parameter(s) {:?} for error code '{}'",
            self.missing_params(),
            self.code
        );

        Diagnostic::new(
            self.severity,
            self.code,
            self.category,
            self.render(),
            self.location,
        )
    }

    /// 用参数替换 `{key}` 占位符；未知占位符原样保留
    fn render(&self) -> String {
        let mut out = String::with_capacity(self.message_template.len());
        let mut rest = self.message_template;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            match after.find('}') {
                Some(close) => {
                    let key = &after[..close];
                    match self.params.iter().find(|(k, _)| *k == key) {
                        Some((_, value)) => out.push_str(value),
                        None => {
                            out.push('{');
                            out.push_str(key);
                            out.push('}');
                        }
                    }
                    rest = &after[close + 1..];
                }
                None => {
                    out.push_str(&rest[open..]);
                    rest = "";
                }
            }
        }
        out.push_str(rest);
        out
    }

    /// 模板中没有对应参数的占位符
    fn missing_params(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        let mut rest = self.message_template;
        while let Some(open) = rest.find('{') {
            let after = &rest[open + 1..];
            let Some(close) = after.find('}') else {
                break;
            };
            let key = &after[..close];
            if !key.is_empty() && !self.params.iter().any(|(k, _)| *k == key) {
                missing.push(key);
            }
            rest = &after[close + 1..];
        }
        missing
    }
}
