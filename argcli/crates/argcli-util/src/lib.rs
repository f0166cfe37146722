//! argcli-util - Shared foundation types for the argcli crates.
//!
//! This crate provides the pieces every layer of the argument tool needs
//! for reporting problems back to the user:
//!
//! - [`span`] - Byte offsets plus line/column of a region of input
//! - [`diagnostic`] - Errors and warnings collected by a [`Handler`]
//!
//! # Example
//!
//! ```
//! use argcli_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unexpected character '@'")
//!     .code(DiagnosticCode::E_LEX_UNEXPECTED_CHAR)
//!     .span(Span::new(4, 5, 1, 5))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use span::Span;
