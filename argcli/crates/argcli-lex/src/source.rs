//! Character sources the lexer reads from.
//!
//! The lexer only ever moves forward: it reads one character, may look at
//! the next one, and asks where it is. Anything that can do that is a
//! [`CharSource`], whether it holds the whole input in memory
//! ([`Cursor`](crate::Cursor)) or decodes it from a stream
//! ([`ReaderSource`](crate::ReaderSource)).

use argcli_util::Span;

/// A forward-only, peekable reader of characters.
pub trait CharSource {
    /// Consumes and returns the next character, or `None` at end of input.
    fn next_char(&mut self) -> Option<char>;

    /// Returns the next character without consuming it.
    ///
    /// Takes `&mut self` because streaming sources have to pull the
    /// character off the underlying reader to see it.
    fn peek_char(&mut self) -> Option<char>;

    /// Position of the next character to be read.
    fn location(&self) -> Location;
}

impl<S: CharSource + ?Sized> CharSource for &mut S {
    #[inline]
    fn next_char(&mut self) -> Option<char> {
        (**self).next_char()
    }

    #[inline]
    fn peek_char(&mut self) -> Option<char> {
        (**self).peek_char()
    }

    #[inline]
    fn location(&self) -> Location {
        (**self).location()
    }
}

/// A point in the input: byte offset plus 1-based line and column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    /// Byte offset from the start of the input.
    pub offset: usize,
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based, in characters).
    pub column: u32,
}

impl Location {
    /// The location of the first character of any input.
    pub const START: Location = Location {
        offset: 0,
        line: 1,
        column: 1,
    };

    /// Moves past `c`, which occupied `width` bytes of input.
    #[inline]
    pub fn advance(&mut self, c: char, width: usize) {
        self.offset += width;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Span from this location up to (not including) byte offset `end`.
    #[inline]
    pub fn span_to(self, end: usize) -> Span {
        Span::new(self.offset, end, self.line, self.column)
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::START
    }
}
