//! Program-wide symbol table
//!
//! Defines and functions share one namespace across every source file.
//! Entries keep insertion order, which is the order files were discovered.

use crate::frontend::core::lexer::Token;
use crate::frontend::core::parser::ast::{Define, Function};
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// What a name is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SymbolKind {
    Define,
    Function,
}

impl fmt::Display for SymbolKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            SymbolKind::Define => write!(f, "define"),
            SymbolKind::Function => write!(f, "function"),
        }
    }
}

/// A symbol together with the file that declared it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry<T> {
    pub item: T,
    pub origin: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SymbolTable {
    defines: IndexMap<String, Entry<Define>>,
    functions: IndexMap<String, Entry<Function>>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind_of(
        &self,
        name: &str,
    ) -> Option<SymbolKind> {
        if self.defines.contains_key(name) {
            Some(SymbolKind::Define)
        } else if self.functions.contains_key(name) {
            Some(SymbolKind::Function)
        } else {
            None
        }
    }

    #[inline]
    pub fn contains(
        &self,
        name: &str,
    ) -> bool {
        self.kind_of(name).is_some()
    }

    #[inline]
    pub fn is_define(
        &self,
        name: &str,
    ) -> bool {
        self.defines.contains_key(name)
    }

    pub fn define(
        &self,
        name: &str,
    ) -> Option<&Entry<Define>> {
        self.defines.get(name)
    }

    /// Replacement tokens of a define
    pub fn replacement(
        &self,
        name: &str,
    ) -> Option<&[Token]> {
        self.defines
            .get(name)
            .map(|entry| entry.item.replacement.as_slice())
    }

    pub fn function(
        &self,
        name: &str,
    ) -> Option<&Entry<Function>> {
        self.functions.get(name)
    }

    /// Register a define; the name must be free
    pub fn insert_define(
        &mut self,
        define: Define,
        origin: &Path,
    ) {
        debug_assert!(!self.contains(&define.name), "{} already bound", define.name);
        self.defines.insert(
            define.name.clone(),
            Entry {
                item: define,
                origin: origin.to_path_buf(),
            },
        );
    }

    /// Register a function; the name must be free
    pub fn insert_function(
        &mut self,
        function: Function,
        origin: &Path,
    ) {
        debug_assert!(
            !self.contains(&function.name),
            "{} already bound",
            function.name
        );
        self.functions.insert(
            function.name.clone(),
            Entry {
                item: function,
                origin: origin.to_path_buf(),
            },
        );
    }

    pub fn defines(&self) -> impl Iterator<Item = &Entry<Define>> {
        self.defines.values()
    }

    pub fn functions(&self) -> impl Iterator<Item = &Entry<Function>> {
        self.functions.values()
    }

    pub(crate) fn set_replacement(
        &mut self,
        name: &str,
        replacement: Vec<Token>,
    ) {
        if let Some(entry) = self.defines.get_mut(name) {
            entry.item.replacement = replacement;
        }
    }

    pub fn define_count(&self) -> usize {
        self.defines.len()
    }

    pub fn function_count(&self) -> usize {
        self.functions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::span::Location;

    #[test]
    fn test_one_namespace() {
        let mut table = SymbolTable::new();
        table.insert_define(
            Define {
                name: "ZERO".to_string(),
                replacement: Vec::new(),
                location: Location::start(),
            },
            Path::new("a.bp"),
        );
        table.insert_function(
            Function {
                name: "main2".to_string(),
                body: None,
                location: Location::start(),
            },
            Path::new("b.bp"),
        );
        assert_eq!(table.kind_of("ZERO"), Some(SymbolKind::Define));
        assert_eq!(table.kind_of("main2"), Some(SymbolKind::Function));
        assert_eq!(table.kind_of("other"), None);
        assert_eq!(table.replacement("ZERO"), Some(&[][..]));
        assert_eq!(table.function("main2").unwrap().origin, PathBuf::from("b.bp"));
    }
}
