//! Token definitions.
//!
//! A [`Token`] is a classified, positioned piece of input: a [`TokenKind`]
//! from a closed set, the decoded text, and the span it was read from.

use std::fmt;

use argcli_util::Span;
use serde::Serialize;

/// The closed set of token kinds.
///
/// Serializes as its stable name (`"LeftParen"`, `"EndOfFile"`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// `[A-Za-z_][A-Za-z0-9_]*`
    Identifier,
    /// Double-quoted string, escapes resolved
    String,
    /// Literal that parses as an `i64`
    Integer,
    /// Literal that parses as an `f32`, optionally with an `f`/`F` suffix
    Float,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `{`
    LeftCurly,
    /// `}`
    RightCurly,
    /// `,`
    Comma,
    /// A line break; significant in the grammar
    EndOfLine,
    /// `#` up to the end of the line
    Comment,
    /// No more input
    EndOfFile,
    /// Anything the lexer could not classify
    Unknown,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 15] = [
        TokenKind::Identifier,
        TokenKind::String,
        TokenKind::Integer,
        TokenKind::Float,
        TokenKind::LeftParen,
        TokenKind::RightParen,
        TokenKind::LeftBracket,
        TokenKind::RightBracket,
        TokenKind::LeftCurly,
        TokenKind::RightCurly,
        TokenKind::Comma,
        TokenKind::EndOfLine,
        TokenKind::Comment,
        TokenKind::EndOfFile,
        TokenKind::Unknown,
    ];

    /// Stable identifier-style name, e.g. `"LeftParen"`.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Identifier => "Identifier",
            TokenKind::String => "String",
            TokenKind::Integer => "Integer",
            TokenKind::Float => "Float",
            TokenKind::LeftParen => "LeftParen",
            TokenKind::RightParen => "RightParen",
            TokenKind::LeftBracket => "LeftBracket",
            TokenKind::RightBracket => "RightBracket",
            TokenKind::LeftCurly => "LeftCurly",
            TokenKind::RightCurly => "RightCurly",
            TokenKind::Comma => "Comma",
            TokenKind::EndOfLine => "EndOfLine",
            TokenKind::Comment => "Comment",
            TokenKind::EndOfFile => "EndOfFile",
            TokenKind::Unknown => "Unknown",
        }
    }

    /// Lower-case phrase for error messages, e.g. `"left paren"`.
    pub const fn description(self) -> &'static str {
        match self {
            TokenKind::Identifier => "identifier",
            TokenKind::String => "string",
            TokenKind::Integer => "integer",
            TokenKind::Float => "float",
            TokenKind::LeftParen => "left paren",
            TokenKind::RightParen => "right paren",
            TokenKind::LeftBracket => "left bracket",
            TokenKind::RightBracket => "right bracket",
            TokenKind::LeftCurly => "left curly",
            TokenKind::RightCurly => "right curly",
            TokenKind::Comma => "comma",
            TokenKind::EndOfLine => "end of line",
            TokenKind::Comment => "comment",
            TokenKind::EndOfFile => "end of file",
            TokenKind::Unknown => "unknown",
        }
    }

    /// The kind of a single-character punctuation token.
    ///
    /// # Example
    ///
    /// ```
    /// use argcli_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::from_punct('['), Some(TokenKind::LeftBracket));
    /// assert_eq!(TokenKind::from_punct(';'), None);
    /// ```
    pub const fn from_punct(c: char) -> Option<TokenKind> {
        match c {
            '(' => Some(TokenKind::LeftParen),
            ')' => Some(TokenKind::RightParen),
            '[' => Some(TokenKind::LeftBracket),
            ']' => Some(TokenKind::RightBracket),
            '{' => Some(TokenKind::LeftCurly),
            '}' => Some(TokenKind::RightCurly),
            ',' => Some(TokenKind::Comma),
            _ => None,
        }
    }

    /// Looks a kind up by its stable [`name`](TokenKind::name).
    pub fn from_name(name: &str) -> Option<TokenKind> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A token produced by the lexer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Token {
    /// What the token is.
    pub kind: TokenKind,

    /// Decoded payload; see [`TokenKind`] for what each kind carries.
    pub text: String,

    /// Where the token was read from. `None` only for [`TokenKind::EndOfFile`].
    pub span: Option<Span>,
}

impl Token {
    /// Creates a token read from `span`.
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span: Some(span),
        }
    }

    /// The end-of-input token.
    pub fn eof() -> Self {
        Self {
            kind: TokenKind::EndOfFile,
            text: String::new(),
            span: None,
        }
    }

    /// Returns true for [`TokenKind::EndOfFile`].
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfFile
    }

    /// Byte offset where the token began.
    pub fn position(&self) -> Option<usize> {
        self.span.map(|span| span.start)
    }

    /// Value of an [`TokenKind::Integer`] token.
    ///
    /// # Example
    ///
    /// ```
    /// use argcli_lex::{Token, TokenKind};
    /// use argcli_util::Span;
    ///
    /// let token = Token::new(TokenKind::Integer, "-12", Span::new(0, 3, 1, 1));
    /// assert_eq!(token.as_integer(), Some(-12));
    /// assert_eq!(token.as_float(), None);
    /// ```
    pub fn as_integer(&self) -> Option<i64> {
        match self.kind {
            TokenKind::Integer => self.text.parse().ok(),
            _ => None,
        }
    }

    /// Value of a [`TokenKind::Float`] token.
    pub fn as_float(&self) -> Option<f32> {
        match self.kind {
            TokenKind::Float => self.text.parse().ok(),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::EndOfLine | TokenKind::EndOfFile => write!(f, "{}", self.kind),
            _ => write!(f, "{} {:?}", self.kind, self.text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_and_descriptions() {
        assert_eq!(TokenKind::LeftParen.name(), "LeftParen");
        assert_eq!(TokenKind::LeftParen.description(), "left paren");
        assert_eq!(TokenKind::EndOfFile.to_string(), "end of file");
        assert_eq!(TokenKind::RightCurly.to_string(), "right curly");
    }

    #[test]
    fn test_every_kind_has_unique_names() {
        for (i, a) in TokenKind::ALL.iter().enumerate() {
            assert_eq!(TokenKind::from_name(a.name()), Some(*a));
            assert_eq!(a.description(), a.description().to_lowercase());
            for b in &TokenKind::ALL[i + 1..] {
                assert_ne!(a.name(), b.name());
                assert_ne!(a.description(), b.description());
            }
        }
        assert_eq!(TokenKind::from_name("LeftSquare"), None);
    }

    #[test]
    fn test_from_punct() {
        let pairs = [
            ('(', TokenKind::LeftParen),
            (')', TokenKind::RightParen),
            ('[', TokenKind::LeftBracket),
            (']', TokenKind::RightBracket),
            ('{', TokenKind::LeftCurly),
            ('}', TokenKind::RightCurly),
            (',', TokenKind::Comma),
        ];
        for (c, kind) in pairs {
            assert_eq!(TokenKind::from_punct(c), Some(kind));
        }
        assert_eq!(TokenKind::from_punct('\n'), None);
        assert_eq!(TokenKind::from_punct('#'), None);
    }

    #[test]
    fn test_eof_token() {
        let token = Token::eof();
        assert!(token.is_eof());
        assert!(token.text.is_empty());
        assert_eq!(token.position(), None);
        assert_eq!(token.to_string(), "end of file");
    }

    #[test]
    fn test_accessors() {
        let span = Span::new(4, 7, 1, 5);
        let int = Token::new(TokenKind::Integer, "42", span);
        assert_eq!(int.position(), Some(4));
        assert_eq!(int.as_integer(), Some(42));

        let float = Token::new(TokenKind::Float, "1.5", span);
        assert_eq!(float.as_float(), Some(1.5));
        assert_eq!(float.as_integer(), None);

        let unknown = Token::new(TokenKind::Unknown, "12f", span);
        assert_eq!(unknown.as_integer(), None);
        assert_eq!(unknown.as_float(), None);
    }

    #[test]
    fn test_display() {
        let span = Span::new(0, 1, 1, 1);
        assert_eq!(Token::new(TokenKind::Identifier, "f", span).to_string(), "identifier \"f\"");
        assert_eq!(Token::new(TokenKind::EndOfLine, "", span).to_string(), "end of line");
    }

    #[test]
    fn test_serialize_uses_stable_names() {
        let token = Token::new(TokenKind::LeftBracket, "[", Span::new(2, 3, 1, 3));
        let json = serde_json::to_value(&token).unwrap();
        assert_eq!(json["kind"], "LeftBracket");
        assert_eq!(json["text"], "[");
        assert_eq!(json["span"]["start"], 2);

        let eof = serde_json::to_value(Token::eof()).unwrap();
        assert_eq!(eof["kind"], "EndOfFile");
        assert!(eof["span"].is_null());
    }
}
