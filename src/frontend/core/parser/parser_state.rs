//! Parser state and token helpers

use crate::frontend::core::lexer::{Lexer, LexerMark, Token, TokenKind};
use crate::frontend::core::symbols::SymbolTable;
use crate::util::diagnostic::{Diagnostic, ErrorCodeDefinition};
use crate::util::span::Location;
use std::path::Path;

/// Default limit for nested expressions and blocks
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 128;

/// Parser over one source file
///
/// The lexer belongs to the file and survives between assembly passes;
/// a `ParserState` is created around it for each rule invocation so the
/// shared symbol table can be updated in between.
pub struct ParserState<'a> {
    lexer: &'a mut Lexer,
    symbols: &'a SymbolTable,
    dir: &'a Path,
    depth: usize,
    max_depth: usize,
}

impl<'a> ParserState<'a> {
    /// `dir` is the directory of the file being parsed; includes are joined to it.
    ///
    /// The lexer must already have produced its first token.
    pub fn new(
        lexer: &'a mut Lexer,
        symbols: &'a SymbolTable,
        dir: &'a Path,
    ) -> Self {
        Self {
            lexer,
            symbols,
            dir,
            depth: 0,
            max_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }

    /// Limit how deeply expressions and blocks may nest
    pub fn with_max_depth(
        mut self,
        max_depth: usize,
    ) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[inline]
    pub fn symbols(&self) -> &SymbolTable {
        self.symbols
    }

    #[inline]
    pub fn dir(&self) -> &Path {
        self.dir
    }

    #[inline]
    pub fn current(&self) -> &Token {
        self.lexer.current()
    }

    #[inline]
    pub fn kind(&self) -> &TokenKind {
        &self.lexer.current().kind
    }

    #[inline]
    pub fn location(&self) -> Location {
        self.lexer.current().location
    }

    pub fn at_end(&self) -> bool {
        self.kind().is_eof()
    }

    #[inline]
    pub fn at_punct(
        &self,
        c: char,
    ) -> bool {
        self.kind().is_punct(c)
    }

    /// Consume the current token and return it
    pub fn bump(&mut self) -> Result<Token, Diagnostic> {
        let token = self.lexer.current().clone();
        self.lexer.next_token()?;
        Ok(token)
    }

    pub fn skip_punct(
        &mut self,
        c: char,
    ) -> Result<bool, Diagnostic> {
        if self.at_punct(c) {
            self.bump()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub fn expect_punct(
        &mut self,
        c: char,
    ) -> Result<Token, Diagnostic> {
        if self.at_punct(c) {
            self.bump()
        } else {
            Err(self.expected(&format!("'{}'", c)))
        }
    }

    /// E0010 against the current token
    pub fn expected(
        &self,
        what: &str,
    ) -> Diagnostic {
        ErrorCodeDefinition::expected_token(what, &self.kind().describe())
            .at(self.location())
            .build()
    }

    /// E0011 against the current token
    pub fn unexpected(&self) -> Diagnostic {
        ErrorCodeDefinition::unexpected_token(&self.kind().describe())
            .at(self.location())
            .build()
    }

    /// Run `rule` one nesting level deeper
    ///
    /// Fails with E0014 at the current token once the limit is reached, so
    /// deeply nested input is rejected before it exhausts the stack.
    pub fn nested<T>(
        &mut self,
        rule: impl FnOnce(&mut Self) -> Result<T, Diagnostic>,
    ) -> Result<T, Diagnostic> {
        if self.depth >= self.max_depth {
            return Err(ErrorCodeDefinition::nesting_too_deep(self.max_depth)
                .at(self.location())
                .build());
        }
        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }

    /// Save current position for backtracking
    #[inline]
    pub fn save_position(&self) -> LexerMark {
        self.lexer.mark()
    }

    /// Restore a previously saved position
    #[inline]
    pub fn restore_position(
        &mut self,
        mark: LexerMark,
    ) {
        self.lexer.reset(mark);
    }

    /// Splice define replacements in place of the current token while it
    /// names a define
    pub fn expand_defines(&mut self) -> Result<(), Diagnostic> {
        let symbols = self.symbols;
        while let TokenKind::Identifier(name) = self.kind() {
            let Some(replacement) = symbols.replacement(name) else {
                break;
            };
            tracing::trace!("expanding define {} at {}", name, self.location());
            self.lexer.replace_current(replacement)?;
        }
        Ok(())
    }
}
