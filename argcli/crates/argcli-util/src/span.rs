//! Span module - Source location tracking.
//!
//! A [`Span`] records where a token or diagnostic came from: the byte range
//! in the input plus the human-readable line and column of its first
//! character.
//!
//! # Examples
//!
//! ```
//! use argcli_util::span::Span;
//!
//! let span = Span::new(10, 20, 2, 5);
//! assert_eq!(span.len(), 10);
//! assert_eq!(span.to_string(), "2:5");
//! ```

use std::fmt;

use serde::Serialize;

/// Source location span
///
/// Offsets are byte offsets into the input. Line and column are 1-based;
/// columns count characters, not bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
    /// Line number of `start` (1-based)
    pub line: u32,
    /// Column number of `start` (1-based)
    pub column: u32,
}

impl Span {
    /// Dummy span for diagnostics that have no meaningful location.
    ///
    /// # Examples
    ///
    /// ```
    /// use argcli_util::span::Span;
    ///
    /// assert!(Span::DUMMY.is_dummy());
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Returns true if this is [`Span::DUMMY`] (line 0 never occurs in real input).
    #[inline]
    pub fn is_dummy(&self) -> bool {
        self.line == 0
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if this span contains a byte offset
    ///
    /// # Examples
    ///
    /// ```
    /// use argcli_util::span::Span;
    ///
    /// let span = Span::new(10, 20, 1, 11);
    /// assert!(span.contains(15));
    /// assert!(!span.contains(20));
    /// ```
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Merge two spans into a single span covering both.
    ///
    /// Line and column are taken from whichever span starts first.
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        let first = if self.start <= other.start { self } else { other };
        Span {
            start: first.start,
            end: self.end.max(other.end),
            line: first.line,
            column: first.column,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
