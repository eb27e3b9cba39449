//! Core algorithm layer
//! Lexer, parser, the shared symbol table, define expansion and
//! identifier validation

pub mod lexer;
pub mod macros;
pub mod parser;
pub mod resolve;
pub mod symbols;

// Re-export commonly used items
pub use lexer::tokenize;
pub use symbols::{SymbolKind, SymbolTable};
