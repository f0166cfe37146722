//! Core lexer implementation.
//!
//! This module contains the Lexer struct, the one-token lookahead and the
//! dispatch on the first character of each token.

use std::iter::FusedIterator;

use argcli_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};

use crate::classify::{is_blank, is_ident_start, is_number_prefix};
use crate::source::{CharSource, Location};
use crate::token::{Token, TokenKind};

/// Lexer for argcli command/expression input.
///
/// The lexer pulls characters from a [`CharSource`] and hands out one
/// [`Token`] per call. It never fails: input it cannot classify becomes a
/// [`TokenKind::Unknown`] token, and the problem is also reported to the
/// [`Handler`] so the caller can decide whether it is fatal.
///
/// # Example
///
/// ```
/// use argcli_lex::{Cursor, Lexer, TokenKind};
/// use argcli_util::Handler;
///
/// let handler = Handler::new();
/// let mut lexer = Lexer::new(Cursor::new("f(1)"), &handler);
///
/// assert_eq!(lexer.peek_token().kind, TokenKind::Identifier);
/// assert_eq!(lexer.next_token().text, "f");
/// assert_eq!(lexer.next_token().kind, TokenKind::LeftParen);
/// assert_eq!(lexer.next_token().text, "1");
/// assert_eq!(lexer.next_token().kind, TokenKind::RightParen);
/// assert!(lexer.next_token().is_eof());
/// ```
pub struct Lexer<'h, S> {
    /// Where characters come from.
    pub(crate) source: S,

    /// Receives diagnostics for malformed input.
    pub(crate) handler: &'h Handler,

    /// Token scanned by `peek_token` and not yet handed out.
    peeked: Option<Token>,
}

impl<'h, S: CharSource> Lexer<'h, S> {
    /// Creates a lexer reading from `source` and reporting into `handler`.
    pub fn new(source: S, handler: &'h Handler) -> Self {
        Self {
            source,
            handler,
            peeked: None,
        }
    }

    /// Returns and consumes the next token.
    ///
    /// A token previously returned by [`peek_token`](Lexer::peek_token) is
    /// handed out without rescanning. Once the input is exhausted every call
    /// returns an [`TokenKind::EndOfFile`] token.
    pub fn next_token(&mut self) -> Token {
        match self.peeked.take() {
            Some(token) => token,
            None => self.scan_token(),
        }
    }

    /// Returns the next token without consuming it.
    ///
    /// Repeated calls return the same token until
    /// [`next_token`](Lexer::next_token) takes it.
    pub fn peek_token(&mut self) -> &Token {
        let token = match self.peeked.take() {
            Some(token) => token,
            None => self.scan_token(),
        };
        self.peeked.insert(token)
    }

    /// Position of the next unread character.
    ///
    /// While a token is pending from [`peek_token`](Lexer::peek_token) this
    /// is already past that token.
    pub fn location(&self) -> Location {
        self.source.location()
    }

    /// The handler diagnostics are reported into.
    pub fn handler(&self) -> &'h Handler {
        self.handler
    }

    /// Gives back the character source, dropping any pending lookahead.
    pub fn into_source(self) -> S {
        self.source
    }

    /// Scans one token from the source.
    ///
    /// Blanks are skipped, then the first character picks the sub-scanner.
    /// That character has already been consumed when the sub-scanner runs,
    /// so it is passed along instead of being pushed back.
    fn scan_token(&mut self) -> Token {
        let (c, start) = loop {
            let start = self.source.location();
            match self.source.next_char() {
                Some(c) if is_blank(c) => continue,
                Some(c) => break (c, start),
                None => {
                    tracing::trace!(offset = start.offset, "end of input");
                    return Token::eof();
                },
            }
        };

        let token = match c {
            c if is_ident_start(c) => self.lex_identifier(c, start),
            c if c.is_ascii_digit() => self.lex_number(c, start),
            '"' => self.lex_string(start),
            '#' => self.lex_comment(start),
            '\n' => self.finish(TokenKind::EndOfLine, String::new(), start),
            c if is_number_prefix(c, self.source.peek_char()) => self.lex_number(c, start),
            c => match TokenKind::from_punct(c) {
                Some(kind) => self.finish(kind, c.to_string(), start),
                None => self.lex_unexpected(c, start),
            },
        };

        tracing::trace!(kind = token.kind.name(), text = %token.text, offset = start.offset, "token");
        token
    }

    /// Builds a token spanning from `start` to the current position.
    pub(crate) fn finish(&self, kind: TokenKind, text: String, start: Location) -> Token {
        Token::new(kind, text, self.span_from(start))
    }

    /// Span from `start` to the current position.
    pub(crate) fn span_from(&self, start: Location) -> Span {
        start.span_to(self.source.location().offset)
    }

    /// Reports a character that starts no token.
    fn lex_unexpected(&mut self, c: char, start: Location) -> Token {
        let token = self.finish(TokenKind::Unknown, c.to_string(), start);
        tracing::debug!(offset = start.offset, character = ?c, "unexpected character");
        DiagnosticBuilder::error(format!("unexpected character {:?}", c))
            .code(DiagnosticCode::E_LEX_UNEXPECTED_CHAR)
            .span(self.span_from(start))
            .emit(self.handler);
        token
    }
}

impl<S: CharSource> Iterator for Lexer<'_, S> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

impl<S: CharSource> FusedIterator for Lexer<'_, S> {}
