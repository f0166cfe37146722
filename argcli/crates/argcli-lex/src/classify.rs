//! ASCII character classes used by the lexer.
//!
//! Classification is deliberately ASCII-only: a non-ASCII letter is not an
//! identifier character and lexes as `Unknown`.

/// Whitespace that separates tokens and produces none. Newline is not
/// included; it is a token of its own.
#[inline]
pub fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r')
}

/// Characters that can start an identifier: `A-Z`, `a-z`, `_`.
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Characters that can continue an identifier: `A-Z`, `a-z`, `0-9`, `_`.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Characters swallowed by a numeric literal once one has started.
///
/// Letters are included so that suffixes, exponents and trailing garbage
/// all end up in the same run and are judged together.
#[inline]
pub fn is_number_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '+')
}

/// Sign or dot that opens a numeric literal when `next` looks numeric.
#[inline]
pub fn is_number_prefix(c: char, next: Option<char>) -> bool {
    matches!(c, '+' | '-' | '.') && matches!(next, Some(n) if n.is_ascii_digit() || n == '.')
}
