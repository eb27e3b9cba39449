//! BrainPlus compiler front end
//!
//! BrainPlus is a Brainfuck dialect with numbers, pointer arithmetic,
//! comparisons, structured control flow, token macros (`define`), named
//! functions and file inclusion. This crate turns a program into a checked
//! syntax tree plus symbol table, ready for code generation.
//!
//! # Example
//!
//! ```
//! use brainplus::frontend::{CompileConfig, Compiler};
//!
//! let source = r#"
//!     define NEWLINE 10 enddef
//!     greet { = 'H' . = NEWLINE . }
//!     greet
//! "#;
//! let program = Compiler::new(CompileConfig::new())
//!     .compile_source("hello.bp", source)
//!     .unwrap();
//! assert!(program.symbols.function("greet").is_some());
//! ```

#![warn(rust_2018_idioms)]

// Public modules
pub mod frontend;

// Utility modules
pub mod util;

// Re-exports
pub use anyhow::{Context, Result};
pub use frontend::{CompileConfig, CompileError, Compiler, Program};
pub use thiserror::Error;

use std::path::Path;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Language name
pub const NAME: &str = "BrainPlus";

/// Compile a file with the configuration found for it
///
/// Configuration comes from the user-level file and `brainplus.toml` next to
/// the entry file.
pub fn compile_file(path: &Path) -> Result<Program> {
    let config = util::config::load_for_entry(path, None)
        .with_context(|| format!("Failed to load configuration for {}", path.display()))?;
    let program = Compiler::new(config.compile).compile_file(path)?;
    Ok(program)
}
