//! Property tests for the lexer using proptest

use super::kinds;
use crate::frontend::core::lexer::{Operator, TokenKind};
use proptest::prelude::*;

/// Text after `@` that does not continue a pointer operator
fn non_pointer_suffix() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{1,6}",
        "[a-zA-Z][a-zA-Z0-9]{0,6}",
        Just(".".to_string()),
        Just(",".to_string()),
        Just("(".to_string()),
        Just(" 7".to_string()),
        Just(";".to_string()),
        "// [a-z ]{0,8}\n[0-9]{1,3}",
        "/\\* [a-z ]{0,8} \\*/[0-9]{1,3}",
    ]
}

proptest! {
    #[test]
    fn prop_decimal_literals(n in 0i64..=i64::MAX) {
        prop_assert_eq!(kinds(&n.to_string()), vec![TokenKind::Number(n)]);
    }

    #[test]
    fn prop_hex_literals(n in 0i64..=i64::MAX, upper in any::<bool>()) {
        let source = if upper { format!("0X{:X}", n) } else { format!("0x{:x}", n) };
        prop_assert_eq!(kinds(&source), vec![TokenKind::Number(n)]);
    }

    #[test]
    fn prop_x_after_nonzero_starts_identifier(n in 1i64..100_000, rest in "[0-9A-F]{1,4}") {
        let source = format!("{}x{}", n, rest);
        prop_assert_eq!(
            kinds(&source),
            vec![TokenKind::Number(n), TokenKind::Identifier(format!("x{}", rest))]
        );
    }

    #[test]
    fn prop_lookup_rewinds(suffix in non_pointer_suffix()) {
        let mut expected = vec![TokenKind::Operator(Operator::PtrLookup)];
        expected.extend(kinds(&suffix));
        prop_assert_eq!(kinds(&format!("@{}", suffix)), expected);
    }
}
