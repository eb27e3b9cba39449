//! Lexer module
//! Split into token types, the operator table, literal scanning and the tokenizer

pub mod literals;
pub mod operators;
pub mod state;
pub mod tokenizer;
pub mod tokens;

#[cfg(test)]
mod tests;

// Re-export types
pub use operators::{Arity, Operator, OperatorFamily};
pub use state::LexerMark;
pub use tokenizer::Lexer;
pub use tokens::{Keyword, Token, TokenKind};

use crate::util::diagnostic::Diagnostic;

/// Tokenize a whole source; the result always ends with an EOF token
pub fn tokenize(source: &str) -> Result<Vec<Token>, Diagnostic> {
    tracing::debug!("lexing {} bytes", source.len());

    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let done = token.kind.is_eof();
        tokens.push(token);
        if done {
            break;
        }
    }

    tracing::debug!("lexed {} tokens", tokens.len());
    Ok(tokens)
}
