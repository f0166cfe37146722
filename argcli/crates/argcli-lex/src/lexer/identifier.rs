//! Identifier lexing.

use crate::classify::is_ident_continue;
use crate::source::{CharSource, Location};
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<S: CharSource> Lexer<'_, S> {
    /// Lexes an identifier whose first character `first` was already read.
    ///
    /// Consumes letters, digits and underscores; the first character that
    /// is none of these is left for the next token.
    pub(crate) fn lex_identifier(&mut self, first: char, start: Location) -> Token {
        let mut text = String::from(first);
        while let Some(c) = self.source.peek_char() {
            if !is_ident_continue(c) {
                break;
            }
            text.push(c);
            self.source.next_char();
        }

        self.finish(TokenKind::Identifier, text, start)
    }
}
