//! 错误码定义
//!
//! E7xxx: 源文件与环境错误

use super::{DiagnosticBuilder, ErrorCategory, ErrorCodeDefinition};

const CANNOT_OPEN_SOURCE: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E7001",
    category: ErrorCategory::Io,
    message_template: "Cannot open source file '{path}': {reason}",
};

const WRONG_EXTENSION: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E7002",
    category: ErrorCategory::Io,
    message_template: "Source file '{path}' must have the .{extension} extension",
};

/// E7xxx 错误码列表
pub static E7XXX: &[ErrorCodeDefinition] = &[CANNOT_OPEN_SOURCE, WRONG_EXTENSION];

impl ErrorCodeDefinition {
    /// E7001 源文件无法打开
    pub fn cannot_open_source(
        path: &str,
        reason: &str,
    ) -> DiagnosticBuilder {
        CANNOT_OPEN_SOURCE
            .builder()
            .param("path", path)
            .param("reason", reason)
    }

    /// E7002 扩展名错误
    pub fn wrong_extension(
        path: &str,
        extension: &str,
    ) -> DiagnosticBuilder {
        WRONG_EXTENSION
            .builder()
            .param("path", path)
            .param("extension", extension)
    }
}
