//! Command modules for the argt CLI.
//!
//! Each subcommand is implemented in its own file.

pub mod common;

pub mod kinds;
pub mod lex;

// Re-export command types and functions
pub use kinds::run_kinds;
pub use lex::{run_lex, LexArgs};
