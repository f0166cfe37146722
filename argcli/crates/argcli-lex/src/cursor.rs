//! Character cursor for traversing in-memory input.
//!
//! This module provides the `Cursor` struct which walks a `&str` one
//! character at a time, tracking byte offset plus line/column for spans.

use argcli_util::Span;

use crate::source::{CharSource, Location};

/// A cursor for traversing input held in memory.
///
/// # Example
///
/// ```
/// use argcli_lex::{CharSource, Cursor};
///
/// let mut cursor = Cursor::new("f(1)");
///
/// assert_eq!(cursor.peek_char(), Some('f'));
/// assert_eq!(cursor.next_char(), Some('f'));
/// assert_eq!(cursor.remaining(), "(1)");
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The input being traversed.
    source: &'a str,

    /// Position of the next character.
    location: Location,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            location: Location::START,
        }
    }

    /// Returns true if the cursor is at the end of the input.
    ///
    /// # Example
    ///
    /// ```
    /// use argcli_lex::{CharSource, Cursor};
    ///
    /// let mut cursor = Cursor::new("a");
    /// assert!(!cursor.is_at_end());
    /// cursor.next_char();
    /// assert!(cursor.is_at_end());
    /// ```
    pub fn is_at_end(&self) -> bool {
        self.location.offset >= self.source.len()
    }

    /// Returns the input from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.location.offset..]
    }

    /// Returns the full input.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Returns the raw input covered by `span`, e.g. the literal text of a
    /// number token before normalization.
    ///
    /// Returns `None` if the span does not fall on character boundaries
    /// inside this input.
    ///
    /// # Example
    ///
    /// ```
    /// use argcli_lex::Cursor;
    /// use argcli_util::Span;
    ///
    /// let cursor = Cursor::new("x = +007");
    /// assert_eq!(cursor.slice(Span::new(4, 8, 1, 5)), Some("+007"));
    /// ```
    pub fn slice(&self, span: Span) -> Option<&'a str> {
        self.source.get(span.start..span.end)
    }
}

impl CharSource for Cursor<'_> {
    #[inline]
    fn next_char(&mut self) -> Option<char> {
        let c = self.remaining().chars().next()?;
        self.location.advance(c, c.len_utf8());
        Some(c)
    }

    #[inline]
    fn peek_char(&mut self) -> Option<char> {
        self.remaining().chars().next()
    }

    #[inline]
    fn location(&self) -> Location {
        self.location
    }
}
