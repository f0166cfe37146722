//! Error handling module for the argt CLI.
//!
//! Lexing never fails on its own; these are the ways a run of the tool can.

use argcli_lex::SourceError;
use thiserror::Error;

/// Main error type for the argt CLI application.
#[derive(Error, Debug)]
pub enum ArgtError {
    /// Error when the configuration cannot be found or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error when an input could not be read to the end.
    #[error("{file}: {source}")]
    Source {
        /// Input the fault happened in.
        file: String,
        /// The fault itself.
        #[source]
        source: SourceError,
    },

    /// Input lexed, but `--deny-unknown` was in effect and it had problems.
    #[error("{file}: rejected ({unknown} unknown token(s), {errors} error(s))")]
    Rejected {
        /// Input that was rejected.
        file: String,
        /// Number of `Unknown` tokens.
        unknown: usize,
        /// Number of error diagnostics.
        errors: usize,
    },
}

/// Result type alias using ArgtError.
pub type Result<T> = std::result::Result<T, ArgtError>;
