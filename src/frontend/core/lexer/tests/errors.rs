//! 错误处理测试

use crate::frontend::core::lexer::{tokenize, Lexer, Token, TokenKind};
use crate::util::span::Location;

#[cfg(test)]
mod lexer_error_tests {
    use super::*;

    fn error_code(source: &str) -> &'static str {
        tokenize(source).unwrap_err().code
    }

    #[test]
    fn test_empty_char() {
        assert_eq!(error_code("''"), "E0001");
    }

    #[test]
    fn test_multi_char() {
        assert_eq!(error_code("'ab'"), "E0002");
    }

    #[test]
    fn test_unterminated_char() {
        assert_eq!(error_code("'a"), "E0003");
        assert_eq!(error_code("'"), "E0003");
        assert_eq!(error_code("'ab"), "E0003");
    }

    #[test]
    fn test_unterminated_string() {
        let err = tokenize("  \"lib.bp").unwrap_err();
        assert_eq!(err.code, "E0004");
        assert_eq!(err.location, Some(Location::new(1, 3)));
    }

    #[test]
    fn test_unterminated_comment() {
        let err = tokenize(". /* open").unwrap_err();
        assert_eq!(err.code, "E0005");
        assert_eq!(err.location, Some(Location::new(1, 3)));
    }

    #[test]
    fn test_number_overflow() {
        assert_eq!(error_code("9223372036854775808"), "E0006");
        assert_eq!(error_code("0x8000000000000000"), "E0006");
    }

    #[test]
    fn test_mark_and_reset() {
        let mut lexer = Lexer::new("a b c");
        lexer.next_token().unwrap();
        let mark = lexer.mark();
        lexer.next_token().unwrap();
        lexer.next_token().unwrap();
        assert_eq!(lexer.current().kind, TokenKind::Identifier("c".to_string()));

        lexer.reset(mark);
        assert_eq!(lexer.current().kind, TokenKind::Identifier("a".to_string()));
        assert_eq!(
            lexer.next_token().unwrap().kind,
            TokenKind::Identifier("b".to_string())
        );
    }

    #[test]
    fn test_replace_current() {
        let mut lexer = Lexer::new("m .");
        lexer.next_token().unwrap();
        lexer
            .replace_current(&[
                Token::from(TokenKind::Number(1)),
                Token::from(TokenKind::Number(2)),
            ])
            .unwrap();
        assert_eq!(lexer.current().kind, TokenKind::Number(1));
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Number(2));
        assert!(matches!(
            lexer.next_token().unwrap().kind,
            TokenKind::Operator(_)
        ));
    }

    #[test]
    fn test_replaced_tokens_take_use_site_location() {
        let mut lexer = Lexer::new("\n  m .");
        lexer.next_token().unwrap();
        lexer
            .replace_current(&[
                Token::new(TokenKind::Number(1), Location::new(7, 3)),
                Token::new(TokenKind::Number(2), Location::new(7, 5)),
            ])
            .unwrap();
        assert_eq!(lexer.current().location, Location::new(2, 3));
        assert_eq!(lexer.next_token().unwrap().location, Location::new(2, 3));
        assert_eq!(lexer.next_token().unwrap().location, Location::new(2, 5));
    }

    #[test]
    fn test_replace_current_with_nothing_advances() {
        let mut lexer = Lexer::new("m .");
        lexer.next_token().unwrap();
        lexer.replace_current(&[]).unwrap();
        assert!(matches!(lexer.current().kind, TokenKind::Operator(_)));
    }

    #[test]
    fn test_reset_restores_pushback() {
        let mut lexer = Lexer::new("m");
        lexer.next_token().unwrap();
        lexer
            .replace_current(&[
                Token::from(TokenKind::Number(1)),
                Token::from(TokenKind::Number(2)),
            ])
            .unwrap();
        let mark = lexer.mark();
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Number(2));
        assert!(lexer.next_token().unwrap().kind.is_eof());
        lexer.reset(mark);
        assert!(lexer.source_good());
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Number(2));
    }
}
