//! Define expansion
//!
//! Rewrites every define's replacement so it no longer mentions another
//! define. Defines are finalized depth first: a reference to a define that is
//! still being finalized closes a cycle and aborts the build.

use crate::frontend::core::lexer::Token;
use crate::frontend::core::symbols::SymbolTable;
use crate::util::diagnostic::{Diagnostic, ErrorCodeDefinition};
use std::collections::HashMap;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    InProgress,
    Done,
}

/// Expand all defines in place
///
/// Each define is rewritten exactly once; already finalized replacements are
/// spliced as they are, so the work is linear in the expanded output.
pub fn resolve_defines(symbols: &mut SymbolTable) -> Result<(), Diagnostic> {
    let names: Vec<String> = symbols.defines().map(|d| d.item.name.clone()).collect();
    let mut resolver = MacroResolver {
        symbols,
        visits: HashMap::with_capacity(names.len()),
    };
    for name in &names {
        resolver.finalize(name)?;
    }
    tracing::debug!("resolved {} defines", names.len());
    Ok(())
}

struct MacroResolver<'a> {
    symbols: &'a mut SymbolTable,
    visits: HashMap<String, Visit>,
}

impl MacroResolver<'_> {
    fn finalize(
        &mut self,
        name: &str,
    ) -> Result<(), Diagnostic> {
        if self.visits.contains_key(name) {
            return Ok(());
        }
        let Some(entry) = self.symbols.define(name) else {
            return Ok(());
        };
        let origin = entry.origin.clone();
        let tokens = entry.item.replacement.clone();
        self.visits.insert(name.to_string(), Visit::InProgress);

        let mut expanded: Vec<Token> = Vec::with_capacity(tokens.len());
        for token in tokens {
            let Some(reference) = token.kind.identifier() else {
                expanded.push(token);
                continue;
            };
            if !self.symbols.is_define(reference) {
                expanded.push(token);
                continue;
            }

            if reference == name || self.visits.get(reference) == Some(&Visit::InProgress) {
                return Err(ErrorCodeDefinition::recursive_define(reference)
                    .at(token.location)
                    .build()
                    .in_file(origin.display().to_string()));
            }

            self.finalize(reference)?;
            if let Some(replacement) = self.symbols.replacement(reference) {
                tracing::trace!("{}: splicing {} into {}", token.location, reference, name);
                expanded.extend_from_slice(replacement);
            }
        }

        self.symbols.set_replacement(name, expanded);
        self.visits.insert(name.to_string(), Visit::Done);
        Ok(())
    }
}
