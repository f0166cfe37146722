//! Number literal lexing.
//!
//! A numeric literal is lexed in two steps. First the scanner greedily takes
//! every character that could belong to one (digits, letters, `.`, `-`,
//! `+`), so a suffix or exponent never has to be recognised up front. Then
//! [`normalize_number`] decides what the run actually is.

use argcli_util::{DiagnosticBuilder, DiagnosticCode};

use crate::classify::is_number_continue;
use crate::source::{CharSource, Location};
use crate::token::{Token, TokenKind};
use crate::Lexer;

/// Classifies a raw numeric run and renders its canonical text.
///
/// - A single trailing `f`/`F` marks a float and is stripped first.
/// - If the rest parses entirely as an `i64`, the result is
///   [`TokenKind::Integer`] with the value in plain decimal, unless the
///   suffix was present, which makes it [`TokenKind::Unknown`].
/// - Otherwise, if it parses entirely as a finite `f32`, the result is
///   [`TokenKind::Float`] rendered in shortest round-trip form, always with a
///   fractional part or exponent.
/// - Anything else is [`TokenKind::Unknown`] with the raw text.
///
/// # Example
///
/// ```
/// use argcli_lex::{normalize_number, TokenKind};
///
/// assert_eq!(normalize_number("+007"), (TokenKind::Integer, "7".to_string()));
/// assert_eq!(normalize_number("1.10f"), (TokenKind::Float, "1.1".to_string()));
/// assert_eq!(normalize_number("123f"), (TokenKind::Unknown, "123f".to_string()));
/// ```
pub fn normalize_number(raw: &str) -> (TokenKind, String) {
    let (body, has_suffix) = match raw.strip_suffix(|c: char| c == 'f' || c == 'F') {
        Some(body) => (body, true),
        None => (raw, false),
    };

    if let Ok(value) = body.parse::<i64>() {
        return if has_suffix {
            (TokenKind::Unknown, raw.to_string())
        } else {
            (TokenKind::Integer, value.to_string())
        };
    }

    match body.parse::<f32>() {
        Ok(value) if value.is_finite() => (TokenKind::Float, format!("{:?}", value)),
        _ => (TokenKind::Unknown, raw.to_string()),
    }
}

impl<S: CharSource> Lexer<'_, S> {
    /// Lexes a numeric literal whose first character `first` was already
    /// read (a digit, or a sign or dot followed by number-shaped input).
    pub(crate) fn lex_number(&mut self, first: char, start: Location) -> Token {
        let mut raw = String::from(first);
        while let Some(c) = self.source.peek_char() {
            if !is_number_continue(c) {
                break;
            }
            raw.push(c);
            self.source.next_char();
        }

        let (kind, text) = normalize_number(&raw);
        if kind == TokenKind::Unknown {
            self.report_bad_number(&raw, start);
        }
        self.finish(kind, text, start)
    }

    fn report_bad_number(&mut self, raw: &str, start: Location) {
        let span = self.span_from(start);
        tracing::debug!(offset = start.offset, literal = raw, "malformed numeric literal");

        let integer_body = raw
            .strip_suffix(|c: char| c == 'f' || c == 'F')
            .filter(|body| body.parse::<i64>().is_ok());
        let builder = match integer_body {
            Some(body) => DiagnosticBuilder::error(format!(
                "integer literal '{}' cannot carry a float suffix",
                raw
            ))
            .code(DiagnosticCode::E_LEX_SUFFIXED_INTEGER)
            .help(format!("write '{}.0{}' for a float", body, &raw[body.len()..])),
            None => DiagnosticBuilder::error(format!("invalid numeric literal '{}'", raw))
                .code(DiagnosticCode::E_LEX_INVALID_NUMBER),
        };
        builder.span(span).emit(self.handler);
    }
}
