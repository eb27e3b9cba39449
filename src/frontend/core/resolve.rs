//! Identifier validation
//!
//! Runs once every define and function of the program is known, so functions
//! may refer to each other in any order and across files.

use crate::frontend::core::parser::ast::Node;
use crate::frontend::core::symbols::SymbolTable;
use crate::util::diagnostic::{Diagnostic, ErrorCodeDefinition};
use crate::util::span::Location;
use std::path::Path;

/// Check every identifier left in define replacements and every call in
/// function bodies
pub fn validate_symbols(symbols: &SymbolTable) -> Result<(), Diagnostic> {
    for entry in symbols.defines() {
        for token in &entry.item.replacement {
            if let Some(name) = token.kind.identifier() {
                check(symbols, name, token.location, &entry.origin)?;
            }
        }
    }
    for entry in symbols.functions() {
        if let Some(body) = &entry.item.body {
            validate_calls(symbols, body, &entry.origin)?;
        }
    }
    Ok(())
}

/// Check the calls of a single tree, e.g. the program body
pub fn validate_calls(
    symbols: &SymbolTable,
    node: &Node,
    origin: &Path,
) -> Result<(), Diagnostic> {
    for (name, location) in node.calls() {
        check(symbols, name, location, origin)?;
    }
    Ok(())
}

fn check(
    symbols: &SymbolTable,
    name: &str,
    location: Location,
    origin: &Path,
) -> Result<(), Diagnostic> {
    if symbols.contains(name) {
        return Ok(());
    }
    Err(ErrorCodeDefinition::unknown_identifier(name)
        .at(location)
        .build()
        .in_file(origin.display().to_string()))
}
