//! argcli-lex - Lexical scanner for argcli command/expression input
//!
//! This crate turns a character stream into the tokens of a small,
//! function-call-shaped command language, one token at a time with a single
//! token of lookahead. It is the lowest layer of the argument tool: the
//! grammar that gives the tokens meaning lives elsewhere.
//!
//! # Example Usage
//!
//! ```
//! use argcli_lex::{Cursor, Lexer, TokenKind};
//! use argcli_util::Handler;
//!
//! let handler = Handler::new();
//! let lexer = Lexer::new(Cursor::new(r#"f(1, "x", [2.0])"#), &handler);
//!
//! let kinds: Vec<TokenKind> = lexer.map(|token| token.kind).collect();
//! assert_eq!(kinds[0], TokenKind::Identifier);
//! assert_eq!(kinds[4], TokenKind::String);
//! assert_eq!(kinds[7], TokenKind::Float);
//! assert!(handler.is_empty());
//! ```
//!
//! Input that is not in memory can be lexed through a [`ReaderSource`]:
//!
//! ```
//! use argcli_lex::{Lexer, ReaderSource, TokenKind};
//! use argcli_util::Handler;
//!
//! let handler = Handler::new();
//! let mut source = ReaderSource::new(std::io::Cursor::new("run(3)\n"));
//! let count = Lexer::new(&mut source, &handler).count();
//!
//! assert_eq!(count, 5);
//! assert!(source.finish().is_ok());
//! ```
//!
//! # Module Structure
//!
//! - [`source`] - The [`CharSource`] trait and [`Location`]
//! - [`cursor`] - In-memory source over a `&str`
//! - [`reader`] - Streaming UTF-8 source over any `BufRead`
//! - [`token`] - Token and token kind definitions
//! - [`lexer`] - Main lexer implementation
//! - [`classify`] - Character classes
//!
//! # Tokens
//!
//! - **Identifier**: `[A-Za-z_][A-Za-z0-9_]*`
//! - **String**: `"..."` with `\` escaping the next character
//! - **Integer**: 64-bit signed decimal, rendered canonically (`+007` is `7`)
//! - **Float**: 32-bit, optional `f`/`F` suffix, rendered canonically
//! - **Delimiters**: `()`, `[]`, `{}`, `,`
//! - **EndOfLine**: each `\n`; spaces, tabs and carriage returns are skipped
//! - **Comment**: `#` to the end of the line
//! - **Unknown**: anything else, including malformed numbers
//!
//! Lexing never fails. Problems are reported to an
//! [`argcli_util::Handler`] alongside the `Unknown` token.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod reader;
pub mod source;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{SourceError, SourceResult};
pub use lexer::{normalize_number, Lexer};
pub use reader::ReaderSource;
pub use source::{CharSource, Location};
pub use token::{Token, TokenKind};
