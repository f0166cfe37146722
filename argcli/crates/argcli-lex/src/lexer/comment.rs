//! Line comment lexing.

use crate::source::{CharSource, Location};
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<S: CharSource> Lexer<'_, S> {
    /// Lexes a `#` comment. The marker at `start` has already been consumed.
    ///
    /// The comment runs to the end of the line. The newline itself is left
    /// in the source so the next token is [`TokenKind::EndOfLine`].
    pub(crate) fn lex_comment(&mut self, start: Location) -> Token {
        let mut body = String::new();
        while let Some(c) = self.source.peek_char() {
            if c == '\n' {
                break;
            }
            body.push(c);
            self.source.next_char();
        }

        self.finish(TokenKind::Comment, body, start)
    }
}
