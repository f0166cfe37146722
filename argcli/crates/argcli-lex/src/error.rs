//! Error types for character sources.
//!
//! Lexing itself never fails; malformed input becomes `Unknown` tokens.
//! Reading the input can fail, and a streaming source keeps the first such
//! fault here for the caller to inspect once lexing is done.

use thiserror::Error;

/// Fault encountered while pulling characters from a source
#[derive(Debug, Error)]
pub enum SourceError {
    /// The underlying reader failed; input ended at that point.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// Bytes that are not valid UTF-8 were replaced with U+FFFD.
    #[error("invalid UTF-8 at byte offset {offset}")]
    InvalidUtf8 {
        /// Byte offset of the first offending byte.
        offset: usize,
    },
}

/// Result type alias for source operations
pub type SourceResult<T> = std::result::Result<T, SourceError>;
