//! 错误码定义
//!
//! E0xxx: 词法和语法分析阶段的错误码

use super::{DiagnosticBuilder, ErrorCategory, ErrorCodeDefinition};

const EMPTY_CHAR_LITERAL: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E0001",
    category: ErrorCategory::Lexer,
    message_template: "Empty character constant",
};

const MULTI_CHAR_LITERAL: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E0002",
    category: ErrorCategory::Lexer,
    message_template: "Multi-char character constant",
};

const UNTERMINATED_CHAR: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E0003",
    category: ErrorCategory::Lexer,
    message_template: "Character constant not closed",
};

const UNTERMINATED_STRING: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E0004",
    category: ErrorCategory::Lexer,
    message_template: "String literal not closed",
};

const UNTERMINATED_COMMENT: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E0005",
    category: ErrorCategory::Lexer,
    message_template: "Multiline comment not closed",
};

const NUMBER_OUT_OF_RANGE: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E0006",
    category: ErrorCategory::Lexer,
    message_template: "Number literal '{literal}' does not fit in a signed 64-bit integer",
};

const EXPECTED_TOKEN: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E0010",
    category: ErrorCategory::Parser,
    message_template: "Expected {expected}, found {found}",
};

const UNEXPECTED_TOKEN: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E0011",
    category: ErrorCategory::Parser,
    message_template: "Unexpected {token}",
};

const MISSING_OPERAND: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E0012",
    category: ErrorCategory::Parser,
    message_template: "Missing operand after '{op}'",
};

const UNMATCHED_BRACKET: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E0013",
    category: ErrorCategory::Parser,
    message_template: "Unmatched '{bracket}'",
};

const NESTING_TOO_DEEP: ErrorCodeDefinition = ErrorCodeDefinition {
    code: "E0014",
    category: ErrorCategory::Parser,
    message_template: "Nesting deeper than {limit} levels",
};

/// E0xxx 错误码列表
pub static E0XXX: &[ErrorCodeDefinition] = &[
    EMPTY_CHAR_LITERAL,
    MULTI_CHAR_LITERAL,
    UNTERMINATED_CHAR,
    UNTERMINATED_STRING,
    UNTERMINATED_COMMENT,
    NUMBER_OUT_OF_RANGE,
    EXPECTED_TOKEN,
    UNEXPECTED_TOKEN,
    MISSING_OPERAND,
    UNMATCHED_BRACKET,
    NESTING_TOO_DEEP,
];

// E0xxx 快捷方法
impl ErrorCodeDefinition {
    /// E0001 空字符常量 `''`
    pub fn empty_char_literal() -> DiagnosticBuilder {
        EMPTY_CHAR_LITERAL.builder()
    }

    /// E0002 多字符常量 `'ab'`
    pub fn multi_char_literal() -> DiagnosticBuilder {
        MULTI_CHAR_LITERAL.builder()
    }

    /// E0003 未终止的字符常量
    pub fn unterminated_char_literal() -> DiagnosticBuilder {
        UNTERMINATED_CHAR.builder()
    }

    /// E0004 未终止的字符串
    pub fn unterminated_string() -> DiagnosticBuilder {
        UNTERMINATED_STRING.builder()
    }

    /// E0005 未终止的块注释
    pub fn unterminated_comment() -> DiagnosticBuilder {
        UNTERMINATED_COMMENT.builder()
    }

    /// E0006 数字字面量越界
    pub fn number_out_of_range(literal: &str) -> DiagnosticBuilder {
        NUMBER_OUT_OF_RANGE.builder().param("literal", literal)
    }

    /// E0010 期望的 token
    pub fn expected_token(
        expected: &str,
        found: &str,
    ) -> DiagnosticBuilder {
        EXPECTED_TOKEN
            .builder()
            .param("expected", expected)
            .param("found", found)
    }

    /// E0011 意外的 token
    pub fn unexpected_token(token: &str) -> DiagnosticBuilder {
        UNEXPECTED_TOKEN.builder().param("token", token)
    }

    /// E0012 运算符缺少操作数
    pub fn missing_operand(op: &str) -> DiagnosticBuilder {
        MISSING_OPERAND.builder().param("op", op)
    }

    /// E0013 括号不匹配
    pub fn unmatched_bracket(bracket: char) -> DiagnosticBuilder {
        UNMATCHED_BRACKET
            .builder()
            .param("bracket", bracket.to_string())
    }

    /// E0014 嵌套过深
    pub fn nesting_too_deep(limit: usize) -> DiagnosticBuilder {
        NESTING_TOO_DEEP.builder().param("limit", limit.to_string())
    }
}
