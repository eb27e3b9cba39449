//! Top-level declaration parsing
//! Handles include, define and function declarations plus the program body
//!
//! A file is laid out as includes, then defines, then functions, then code.
//! Each `parse_*` returns `None` once its kind of declaration stops appearing.

use crate::frontend::core::lexer::{Keyword, Token, TokenKind};
use crate::frontend::core::parser::ast::{Define, Function, Include, Node};
use crate::frontend::core::parser::ParserState;
use crate::util::diagnostic::{Diagnostic, ErrorCodeDefinition};

impl ParserState<'_> {
    /// `include "path"`, joined to the directory of the current file
    pub fn parse_include(&mut self) -> Result<Option<Include>, Diagnostic> {
        if !self.kind().is_keyword(Keyword::Include) {
            return Ok(None);
        }
        let location = self.bump()?.location;

        let TokenKind::Str(target) = self.kind().clone() else {
            return Err(self.expected("file name string"));
        };
        self.bump()?;

        let path = self.dir().join(&target);
        tracing::debug!("include \"{}\" at {}", target, location);
        Ok(Some(Include {
            target,
            path,
            location,
        }))
    }

    /// `define NAME tokens...`
    ///
    /// The replacement is captured raw. It ends at `enddef` (consumed), before
    /// the next `define` or `include`, or at end of file. Only a define
    /// without `enddef` also ends before a function definition at nesting
    /// depth zero. A dangling `enddef` is skipped.
    pub fn parse_define(&mut self) -> Result<Option<Define>, Diagnostic> {
        while self.kind().is_keyword(Keyword::EndDefine) {
            self.bump()?;
        }
        if !self.kind().is_keyword(Keyword::Define) {
            return Ok(None);
        }
        self.bump()?;

        let location = self.location();
        let TokenKind::Identifier(name) = self.kind().clone() else {
            return Err(self.expected("define name"));
        };
        if let Some(existing) = self.symbols().kind_of(&name) {
            return Err(ErrorCodeDefinition::multiple_definition(
                "Define",
                &name,
                &existing.to_string(),
            )
            .at(location)
            .build());
        }
        self.bump()?;

        let replacement = self.capture_replacement()?;
        tracing::debug!("define {} ({} tokens)", name, replacement.len());
        Ok(Some(Define {
            name,
            replacement,
            location,
        }))
    }

    fn capture_replacement(&mut self) -> Result<Vec<Token>, Diagnostic> {
        let explicit_end = self.has_enddef()?;
        let mut tokens = Vec::new();
        let mut depth = 0usize;
        loop {
            match self.kind().clone() {
                TokenKind::Eof => break,
                TokenKind::Keyword(Keyword::EndDefine) => {
                    self.bump()?;
                    break;
                }
                TokenKind::Keyword(Keyword::Define | Keyword::Include) => break,
                TokenKind::Identifier(_) if !explicit_end && depth == 0 && self.starts_function()? => {
                    break
                }
                TokenKind::Punct('(' | '{') => depth += 1,
                TokenKind::Punct(')' | '}') => depth = depth.saturating_sub(1),
                _ => {}
            }
            tokens.push(self.bump()?);
        }
        Ok(tokens)
    }

    /// Whether `enddef` comes before the next `define`, `include` or end of
    /// file; the position is restored either way
    fn has_enddef(&mut self) -> Result<bool, Diagnostic> {
        let mark = self.save_position();
        let found = loop {
            match self.kind() {
                TokenKind::Keyword(Keyword::EndDefine) => break Ok(true),
                TokenKind::Eof | TokenKind::Keyword(Keyword::Define | Keyword::Include) => {
                    break Ok(false)
                }
                _ => {}
            }
            if let Err(err) = self.bump() {
                break Err(err);
            }
        };
        self.restore_position(mark);
        found
    }

    /// Identifier directly followed by `{`; the position is restored either way
    fn starts_function(&mut self) -> Result<bool, Diagnostic> {
        let mark = self.save_position();
        self.bump()?;
        let is_function = self.at_punct('{');
        self.restore_position(mark);
        Ok(is_function)
    }

    /// `NAME { statements }`
    ///
    /// The identifier is consumed speculatively; without a following `{`
    /// the lexer is rewound and `None` returned, leaving the identifier as
    /// the start of program code.
    pub fn parse_function(&mut self) -> Result<Option<Function>, Diagnostic> {
        let TokenKind::Identifier(name) = self.kind().clone() else {
            return Ok(None);
        };
        let mark = self.save_position();
        let location = self.bump()?.location;
        if !self.at_punct('{') {
            self.restore_position(mark);
            return Ok(None);
        }

        if let Some(existing) = self.symbols().kind_of(&name) {
            return Err(ErrorCodeDefinition::multiple_definition(
                "Function",
                &name,
                &existing.to_string(),
            )
            .at(location)
            .build());
        }

        let body = self.parse_block()?;
        tracing::debug!("function {} at {}", name, location);
        Ok(Some(Function {
            name,
            body,
            location,
        }))
    }

    /// Remaining top-level statements, no braces required
    pub fn parse_code(&mut self) -> Result<Option<Node>, Diagnostic> {
        let location = self.location();
        let statements = self.parse_statement_list(false)?;
        if let TokenKind::Punct(bracket @ (')' | '}')) = *self.kind() {
            return Err(ErrorCodeDefinition::unmatched_bracket(bracket)
                .at(self.location())
                .build());
        }
        Ok(Node::sequence(statements, location))
    }
}
