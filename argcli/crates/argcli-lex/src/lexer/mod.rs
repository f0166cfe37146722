//! Lexer module.
//!
//! The implementation is split by sub-scanner:
//! - `core` - Lexer struct, lookahead and dispatch
//! - `identifier` - Identifier lexing
//! - `number` - Integer/float literal lexing and normalization
//! - `string` - String literal lexing
//! - `comment` - Line comment lexing

mod comment;
mod core;
mod identifier;
mod number;
mod string;

pub use self::core::Lexer;
pub use number::normalize_number;
