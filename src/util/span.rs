//! Source location tracking

use serde::Serialize;
use std::fmt;

/// Source location (1-based line and column)
///
/// Attached to every token and AST node. The column counter resets to 1 on
/// every newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Location {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

impl Location {
    /// Create a new location
    #[inline]
    pub fn new(
        line: usize,
        column: usize,
    ) -> Self {
        Self { line, column }
    }

    /// Location of the first character of a source
    #[inline]
    pub fn start() -> Self {
        Self { line: 1, column: 1 }
    }

    /// Create a dummy location for synthesized nodes
    #[inline]
    pub fn dummy() -> Self {
        Self { line: 0, column: 0 }
    }

    /// Check if this is a dummy location
    #[inline]
    pub fn is_dummy(&self) -> bool {
        self.line == 0
    }
}

impl fmt::Display for Location {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
