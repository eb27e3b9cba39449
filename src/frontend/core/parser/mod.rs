//! Parser module
//!
//! Recursive descent for statements and declarations, precedence climbing
//! for expressions. Identifiers naming a define are replaced by the define's
//! tokens in the lexer before the parser looks at them.

pub mod ast;
pub mod parser_state;
pub mod pratt;
pub mod statements;
#[cfg(test)]
pub mod tests;

// Re-export commonly used items
pub use ast::*;
pub use parser_state::{ParserState, DEFAULT_MAX_NESTING_DEPTH};
pub use pratt::*;
pub use statements::StatementParser;

use crate::frontend::core::lexer::Lexer;
use crate::frontend::core::symbols::SymbolTable;
use crate::util::diagnostic::Diagnostic;
use std::path::Path;

/// Parse a piece of program code against an existing symbol table
///
/// # Example
/// ```
/// use brainplus::frontend::core::parser::parse_code;
/// use brainplus::frontend::core::symbols::SymbolTable;
///
/// let body = parse_code("5 + 3 .", &SymbolTable::new()).unwrap().unwrap();
/// assert_eq!(body.to_string(), "(5)+(3)\n.");
/// ```
pub fn parse_code(
    source: &str,
    symbols: &SymbolTable,
) -> Result<Option<Node>, Diagnostic> {
    let mut lexer = Lexer::new(source);
    lexer.next_token()?;
    ParserState::new(&mut lexer, symbols, Path::new("")).parse_code()
}
