//! String literal lexing.
//!
//! Strings are delimited by `"` and use `\` as the only escape. An escape
//! makes the following character literal, so `\"` embeds a quote and `\n`
//! is just the letter `n`. A backslash at the end of a line joins the next
//! line onto the string.

use argcli_util::{DiagnosticBuilder, DiagnosticCode};

use crate::source::{CharSource, Location};
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<S: CharSource> Lexer<'_, S> {
    /// Lexes a string literal. The opening quote at `start` has already been
    /// consumed.
    ///
    /// Running out of input before the closing quote still yields a
    /// [`TokenKind::String`] with the text read so far; a warning is
    /// reported so the truncation is not silent.
    pub(crate) fn lex_string(&mut self, start: Location) -> Token {
        let mut content = String::new();
        let mut escape = false;

        loop {
            let Some(c) = self.source.next_char() else {
                self.report_unterminated_string(start);
                break;
            };

            if escape {
                match c {
                    // Swallowed; a following newline still continues the line.
                    '\r' => continue,
                    '\n' => {},
                    c => content.push(c),
                }
                escape = false;
            } else if c == '\\' {
                escape = true;
            } else if c == '"' {
                break;
            } else {
                content.push(c);
            }
        }

        self.finish(TokenKind::String, content, start)
    }

    fn report_unterminated_string(&mut self, start: Location) {
        tracing::debug!(offset = start.offset, "unterminated string literal");
        DiagnosticBuilder::warning("unterminated string literal")
            .code(DiagnosticCode::W_LEX_UNTERMINATED_STRING)
            .span(self.span_from(start))
            .note("the string runs to the end of the input")
            .help("add a closing '\"'")
            .emit(self.handler);
    }
}
