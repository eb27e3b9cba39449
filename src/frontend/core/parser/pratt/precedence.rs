//! Precedence handling for the expression parser
//!
//! Binding power levels for the multary operators; higher binds tighter.

use crate::frontend::core::lexer::Operator;

/// Statement level; only here may `?` start a ternary
pub const BP_LOWEST: u8 = 0;
pub const BP_BOOL_OR: u8 = 1;
pub const BP_BOOL_XOR: u8 = 2;
pub const BP_BOOL_AND: u8 = 3;
pub const BP_BIT_OR: u8 = 4;
pub const BP_BIT_XOR: u8 = 5;
pub const BP_BIT_AND: u8 = 6;
pub const BP_EQUALITY: u8 = 7;
pub const BP_COMPARISON: u8 = 8;
pub const BP_TERM: u8 = 9;
pub const BP_FACTOR: u8 = 10;
/// Operand of a pointer lookup binds tighter than any binary operator
pub const BP_PREFIX: u8 = 11;

/// Binding power of a multary operator, `None` for everything else
pub fn binding_power(op: Operator) -> Option<u8> {
    use Operator::*;
    let bp = match op {
        BoolOr => BP_BOOL_OR,
        BoolXor => BP_BOOL_XOR,
        BoolAnd => BP_BOOL_AND,
        BitOr | PtrOr => BP_BIT_OR,
        BitXor | PtrXor => BP_BIT_XOR,
        BitAnd | PtrAnd => BP_BIT_AND,
        Eq | Ne | PtrEq | PtrNe => BP_EQUALITY,
        Lt | Gt | Le | Ge | PtrLt | PtrGt | PtrLe | PtrGe => BP_COMPARISON,
        Add | Sub => BP_TERM,
        Mul | Div => BP_FACTOR,
        _ => return None,
    };
    Some(bp)
}
