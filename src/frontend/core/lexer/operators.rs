//! Operator table
//!
//! Every operator belongs to one family and one arity class. Pointer-family
//! operators are the `@`-prefixed mirrors of a base operator.

use serde::Serialize;
use std::fmt;

/// Operator family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorFamily {
    Nullary,
    ValueArithmetic,
    PointerArithmetic,
    PointerAddressing,
    ValueComparison,
    PointerComparison,
    ValueBitwise,
    PointerBitwise,
    Boolean,
}

/// Arity class used by the parser
///
/// `Binary` operators take part in precedence climbing when they follow a
/// value; in prefix position they act on the current cell like `Unary` ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Nullary,
    Unary,
    Binary,
}

/// Operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Operator {
    // nullary
    Print, // .
    Read,  // ,

    // value arithmetic
    Add,    // +
    Sub,    // -
    Mul,    // *
    Div,    // /
    Assign, // =
    // pointer arithmetic
    PtrAdd,    // @+
    PtrSub,    // @-
    PtrMul,    // @*
    PtrDiv,    // @/
    PtrAssign, // @=

    // pointer addressing
    PtrStore,         // #
    PtrLookup,        // @
    PtrLookupRelUp,   // @#
    PtrLookupRelDown, // @##

    // value comparison
    Lt, // <
    Gt, // >
    Le, // <=
    Ge, // >=
    Eq, // ==
    Ne, // !=
    // pointer comparison
    PtrLt, // @<
    PtrGt, // @>
    PtrLe, // @<=
    PtrGe, // @>=
    PtrEq, // @==
    PtrNe, // @!=

    // value bitwise
    BitNot, // !
    BitAnd, // &
    BitOr,  // |
    BitXor, // ^
    // pointer bitwise
    PtrNot, // @!
    PtrAnd, // @&
    PtrOr,  // @|
    PtrXor, // @^

    // boolean
    BoolNot, // !!
    BoolAnd, // &&
    BoolOr,  // ||
    BoolXor, // ^^
}

impl Operator {
    /// Source spelling
    pub fn symbol(self) -> &'static str {
        use Operator::*;
        match self {
            Print => ".",
            Read => ",",
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Assign => "=",
            PtrAdd => "@+",
            PtrSub => "@-",
            PtrMul => "@*",
            PtrDiv => "@/",
            PtrAssign => "@=",
            PtrStore => "#",
            PtrLookup => "@",
            PtrLookupRelUp => "@#",
            PtrLookupRelDown => "@##",
            Lt => "<",
            Gt => ">",
            Le => "<=",
            Ge => ">=",
            Eq => "==",
            Ne => "!=",
            PtrLt => "@<",
            PtrGt => "@>",
            PtrLe => "@<=",
            PtrGe => "@>=",
            PtrEq => "@==",
            PtrNe => "@!=",
            BitNot => "!",
            BitAnd => "&",
            BitOr => "|",
            BitXor => "^",
            PtrNot => "@!",
            PtrAnd => "@&",
            PtrOr => "@|",
            PtrXor => "@^",
            BoolNot => "!!",
            BoolAnd => "&&",
            BoolOr => "||",
            BoolXor => "^^",
        }
    }

    pub fn family(self) -> OperatorFamily {
        use Operator::*;
        match self {
            Print | Read => OperatorFamily::Nullary,
            Add | Sub | Mul | Div | Assign => OperatorFamily::ValueArithmetic,
            PtrAdd | PtrSub | PtrMul | PtrDiv | PtrAssign => OperatorFamily::PointerArithmetic,
            PtrStore | PtrLookup | PtrLookupRelUp | PtrLookupRelDown => {
                OperatorFamily::PointerAddressing
            }
            Lt | Gt | Le | Ge | Eq | Ne => OperatorFamily::ValueComparison,
            PtrLt | PtrGt | PtrLe | PtrGe | PtrEq | PtrNe => OperatorFamily::PointerComparison,
            BitNot | BitAnd | BitOr | BitXor => OperatorFamily::ValueBitwise,
            PtrNot | PtrAnd | PtrOr | PtrXor => OperatorFamily::PointerBitwise,
            BoolNot | BoolAnd | BoolOr | BoolXor => OperatorFamily::Boolean,
        }
    }

    pub fn arity(self) -> Arity {
        use Operator::*;
        match self {
            Print | Read => Arity::Nullary,
            Add | Sub | Mul | Div => Arity::Binary,
            BitAnd | BitOr | BitXor | PtrAnd | PtrOr | PtrXor => Arity::Binary,
            BoolAnd | BoolOr | BoolXor => Arity::Binary,
            _ if self.is_comparison() => Arity::Binary,
            _ => Arity::Unary,
        }
    }

    /// Participates in precedence climbing
    #[inline]
    pub fn is_multary(self) -> bool {
        self.arity() == Arity::Binary
    }

    #[inline]
    pub fn is_nullary(self) -> bool {
        self.arity() == Arity::Nullary
    }

    #[inline]
    pub fn is_comparison(self) -> bool {
        matches!(
            self.family(),
            OperatorFamily::ValueComparison | OperatorFamily::PointerComparison
        )
    }

    /// `@`, `@#` and `@##`: without an operand they read the current pointer
    #[inline]
    pub fn is_lookup(self) -> bool {
        matches!(
            self,
            Operator::PtrLookup | Operator::PtrLookupRelUp | Operator::PtrLookupRelDown
        )
    }

    /// `=` and `@=`: without an operand they assign zero
    #[inline]
    pub fn is_assignment(self) -> bool {
        matches!(self, Operator::Assign | Operator::PtrAssign)
    }

    /// Produces a number when applied (used for the number-returning shape check)
    pub fn yields_number(self) -> bool {
        use Operator::*;
        matches!(
            self,
            Add | Sub | Mul | Div | BitAnd | BitOr | BitXor | PtrAnd | PtrOr | PtrXor
        )
    }

    /// The `@`-prefixed mirror of a base operator, if it has one
    pub fn pointer_variant(self) -> Option<Operator> {
        use Operator::*;
        let ptr = match self {
            Add => PtrAdd,
            Sub => PtrSub,
            Mul => PtrMul,
            Div => PtrDiv,
            Assign => PtrAssign,
            PtrStore => PtrLookupRelUp,
            Lt => PtrLt,
            Gt => PtrGt,
            Le => PtrLe,
            Ge => PtrGe,
            Eq => PtrEq,
            Ne => PtrNe,
            BitNot => PtrNot,
            BitAnd => PtrAnd,
            BitOr => PtrOr,
            BitXor => PtrXor,
            _ => return None,
        };
        Some(ptr)
    }
}

impl fmt::Display for Operator {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_variants_are_pointer_families() {
        for op in [
            Operator::Add,
            Operator::Assign,
            Operator::Le,
            Operator::Ne,
            Operator::BitNot,
            Operator::BitXor,
        ] {
            let ptr = op.pointer_variant().unwrap();
            assert!(ptr.symbol().starts_with('@'));
            assert_eq!(&ptr.symbol()[1..], op.symbol());
        }
    }

    #[test]
    fn test_no_pointer_variant() {
        assert_eq!(Operator::Print.pointer_variant(), None);
        assert_eq!(Operator::BoolAnd.pointer_variant(), None);
        assert_eq!(Operator::PtrLookup.pointer_variant(), None);
        assert_eq!(Operator::PtrAdd.pointer_variant(), None);
    }

    #[test]
    fn test_multary_classes() {
        assert!(Operator::Add.is_multary());
        assert!(Operator::PtrGe.is_multary());
        assert!(Operator::BoolXor.is_multary());
        assert!(Operator::PtrOr.is_multary());
        assert!(!Operator::Print.is_multary());
        assert!(!Operator::Assign.is_multary());
        assert!(!Operator::PtrAdd.is_multary());
        assert!(!Operator::PtrLookup.is_multary());
        assert!(!Operator::BitNot.is_multary());
        assert!(!Operator::BoolNot.is_multary());
    }
}
