//! 错误码定义
//!
//! E2xxx: 定义冲突、宏循环与标识符解析

use super::{DiagnosticBuilder, ErrorCategory, ErrorCodeDefinition};

const MULTIPLE_DEFINITION: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E2001",
    category: ErrorCategory::Semantic,
    message_template: "{kind} \"{name}\" is already defined as a {existing}",
};

const RECURSIVE_DEFINE: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E2002",
    category: ErrorCategory::Semantic,
    message_template: "Define \"{name}\" expands to itself",
};

const UNKNOWN_IDENTIFIER: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E2003",
    category: ErrorCategory::Semantic,
    message_template: "Unknown identifier \"{name}\"",
};

const NOT_NUMBER_RETURNING: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E2004",
    category: ErrorCategory::Semantic,
    message_template: "{context} is not a number-returning expression",
};

/// E2xxx 错误码列表
pub static E2XXX: &[ErrorCodeDefinition] = &[
    MULTIPLE_DEFINITION,
    RECURSIVE_DEFINE,
    UNKNOWN_IDENTIFIER,
    NOT_NUMBER_RETURNING,
];

// E2xxx 快捷方法
impl ErrorCodeDefinition {
    /// E2001 重复定义（define 与 function 共享命名空间）
    pub fn multiple_definition(
        kind: &str,
        name: &str,
        existing: &str,
    ) -> DiagnosticBuilder {
        MULTIPLE_DEFINITION
            .builder()
            .param("kind", kind)
            .param("name", name)
            .param("existing", existing)
    }

    /// E2002 宏自引用
    pub fn recursive_define(name: &str) -> DiagnosticBuilder {
        RECURSIVE_DEFINE.builder().param("name", name)
    }

    /// E2003 未知标识符
    pub fn unknown_identifier(name: &str) -> DiagnosticBuilder {
        UNKNOWN_IDENTIFIER.builder().param("name", name)
    }

    /// E2004 操作数不是数值表达式
    pub fn not_number_returning(context: &str) -> DiagnosticBuilder {
        NOT_NUMBER_RETURNING.builder().param("context", context)
    }
}
