//! Compiler front end
//!
//! `core` holds the lexer, parser, define engine and symbol table;
//! `pipeline` assembles a whole program out of an entry file and its
//! includes; `compiler` is the entry point used by the CLI.

pub mod compiler;
pub mod config;
pub mod core;
pub mod module;
pub mod pipeline;

pub use compiler::{CompileError, Compiler};
pub use config::CompileConfig;
pub use pipeline::{Pipeline, PipelineState, Program};
