//! Streaming character source over any buffered reader.
//!
//! `ReaderSource` decodes UTF-8 incrementally, so input can be lexed
//! straight from a pipe or socket without being read into memory first.
//! It never seeks and never needs to push a character back: one decoded
//! character of lookahead is all the lexer asks for.

use std::io::{self, BufRead};

use crate::error::{SourceError, SourceResult};
use crate::source::{CharSource, Location};

/// A [`CharSource`] that pulls characters from a [`BufRead`].
///
/// Faults do not interrupt lexing. Invalid UTF-8 bytes decode to U+FFFD and
/// an I/O error ends the input; the first fault is kept and returned by
/// [`ReaderSource::finish`].
///
/// # Example
///
/// ```
/// use argcli_lex::{CharSource, ReaderSource};
///
/// let mut source = ReaderSource::new("a\nb".as_bytes());
/// assert_eq!(source.next_char(), Some('a'));
/// assert_eq!(source.next_char(), Some('\n'));
/// assert_eq!(source.location().line, 2);
/// assert_eq!(source.next_char(), Some('b'));
/// assert_eq!(source.next_char(), None);
/// assert!(source.finish().is_ok());
/// ```
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,

    /// Character decoded by `peek_char` but not consumed yet, with its width in bytes.
    peeked: Option<(char, usize)>,

    location: Location,

    /// First fault seen while decoding.
    error: Option<SourceError>,

    /// Set once the reader has failed; no further reads are attempted.
    failed: bool,
}

impl<R: BufRead> ReaderSource<R> {
    /// Creates a source reading from `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            peeked: None,
            location: Location::START,
            error: None,
            failed: false,
        }
    }

    /// The first fault encountered so far, if any.
    pub fn error(&self) -> Option<&SourceError> {
        self.error.as_ref()
    }

    /// Gives back the reader, or the first fault encountered while reading.
    pub fn finish(self) -> SourceResult<R> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.reader),
        }
    }

    fn peek_byte(&mut self) -> Option<u8> {
        if self.failed {
            return None;
        }
        loop {
            let result = self.reader.fill_buf().map(|buf| buf.first().copied());
            match result {
                Ok(byte) => return byte,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => {
                    tracing::warn!(offset = self.location.offset, error = %err, "input read failed");
                    self.record(SourceError::Io(err));
                    self.failed = true;
                    return None;
                },
            }
        }
    }

    fn read_byte(&mut self) -> Option<u8> {
        let byte = self.peek_byte()?;
        self.reader.consume(1);
        Some(byte)
    }

    /// Decodes the next character and the number of bytes it used.
    fn decode(&mut self) -> Option<(char, usize)> {
        let first = self.read_byte()?;
        let width = utf8_width(first);
        match width {
            1 => return Some((char::from(first), 1)),
            0 => return Some(self.replacement(1)),
            _ => {},
        }

        let mut buf = [first, 0, 0, 0];
        for (i, slot) in buf.iter_mut().enumerate().take(width).skip(1) {
            match self.peek_byte() {
                Some(b) if b & 0xC0 == 0x80 => {
                    *slot = b;
                    self.reader.consume(1);
                },
                // Leave the byte for the next character.
                _ => return Some(self.replacement(i)),
            }
        }

        match std::str::from_utf8(&buf[..width]).ok().and_then(|s| s.chars().next()) {
            Some(c) => Some((c, width)),
            None => Some(self.replacement(width)),
        }
    }

    fn replacement(&mut self, width: usize) -> (char, usize) {
        let offset = self.location.offset;
        tracing::warn!(offset, "invalid UTF-8 in input");
        self.record(SourceError::InvalidUtf8 { offset });
        (char::REPLACEMENT_CHARACTER, width)
    }

    fn record(&mut self, err: SourceError) {
        if self.error.is_none() {
            self.error = Some(err);
        }
    }
}

/// Sequence length announced by a UTF-8 lead byte, or 0 if `b` cannot start one.
fn utf8_width(b: u8) -> usize {
    match b {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

impl<R: BufRead> CharSource for ReaderSource<R> {
    fn next_char(&mut self) -> Option<char> {
        let (c, width) = match self.peeked.take() {
            Some(decoded) => decoded,
            None => self.decode()?,
        };
        self.location.advance(c, width);
        Some(c)
    }

    fn peek_char(&mut self) -> Option<char> {
        if self.peeked.is_none() {
            self.peeked = self.decode();
        }
        self.peeked.map(|(c, _)| c)
    }

    fn location(&self) -> Location {
        self.location
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Read};

    fn drain<R: BufRead>(source: &mut ReaderSource<R>) -> String {
        let mut out = String::new();
        while let Some(c) = source.next_char() {
            out.push(c);
        }
        out
    }

    /// Reader that hands out its bytes, then fails.
    struct FailingReader {
        data: &'static [u8],
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.data.is_empty() {
                return Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset"));
            }
            let n = self.data.len().min(buf.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    #[test]
    fn test_ascii_roundtrip() {
        let mut source = ReaderSource::new("f(1, \"x\")".as_bytes());
        assert_eq!(drain(&mut source), "f(1, \"x\")");
        assert_eq!(source.location().offset, 9);
        assert!(source.error().is_none());
    }

    #[test]
    fn test_multibyte_offsets() {
        let mut source = ReaderSource::new("aé😀b".as_bytes());
        assert_eq!(source.next_char(), Some('a'));
        assert_eq!(source.next_char(), Some('é'));
        assert_eq!(source.location().offset, 3);
        assert_eq!(source.next_char(), Some('😀'));
        assert_eq!(source.location().offset, 7);
        assert_eq!(source.location().column, 4);
        assert_eq!(source.next_char(), Some('b'));
    }

    #[test]
    fn test_peek_is_stable() {
        let mut source = ReaderSource::new("xy".as_bytes());
        assert_eq!(source.peek_char(), Some('x'));
        assert_eq!(source.peek_char(), Some('x'));
        assert_eq!(source.location().offset, 0);
        assert_eq!(source.next_char(), Some('x'));
        assert_eq!(source.peek_char(), Some('y'));
        assert_eq!(source.location().offset, 1);
    }

    #[test]
    fn test_invalid_byte_is_replaced() {
        let bytes: &[u8] = b"a\xFFb";
        let mut source = ReaderSource::new(bytes);
        assert_eq!(drain(&mut source), "a\u{FFFD}b");
        assert_eq!(source.location().offset, 3);
        assert!(matches!(
            source.finish(),
            Err(SourceError::InvalidUtf8 { offset: 1 })
        ));
    }

    #[test]
    fn test_truncated_sequence_keeps_following_char() {
        // Lead byte of a 3-byte sequence followed by plain ASCII.
        let bytes: &[u8] = b"\xE2(x";
        let mut source = ReaderSource::new(bytes);
        assert_eq!(drain(&mut source), "\u{FFFD}(x");
        assert_eq!(source.location().offset, 3);
    }

    #[test]
    fn test_io_error_ends_input() {
        let reader = BufReader::new(FailingReader { data: b"ab" });
        let mut source = ReaderSource::new(reader);
        assert_eq!(drain(&mut source), "ab");
        assert_eq!(source.next_char(), None);
        assert!(matches!(source.error(), Some(SourceError::Io(_))));
        assert!(source.finish().is_err());
    }

    #[test]
    fn test_utf8_width() {
        assert_eq!(utf8_width(b'a'), 1);
        assert_eq!(utf8_width(0xC3), 2);
        assert_eq!(utf8_width(0xE2), 3);
        assert_eq!(utf8_width(0xF0), 4);
        assert_eq!(utf8_width(0x80), 0);
        assert_eq!(utf8_width(0xC0), 0);
        assert_eq!(utf8_width(0xFF), 0);
    }
}
