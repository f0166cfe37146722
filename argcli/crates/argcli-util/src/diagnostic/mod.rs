//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! Layers that never fail outright (the lexer, most notably) still want to
//! tell the user what looked wrong. They build a [`Diagnostic`] and emit it
//! into a [`Handler`]; the caller decides afterwards what is fatal.
//!
//! # Examples
//!
//! ```
//! use argcli_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use argcli_util::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("invalid numeric literal '1x'")
//!     .code(DiagnosticCode::E_LEX_INVALID_NUMBER)
//!     .span(Span::new(0, 2, 1, 1))
//!     .emit(&handler);
//!
//! let diags = handler.take_diagnostics();
//! assert_eq!(diags.len(), 1);
//! assert_eq!(
//!     diags[0].to_string(),
//!     "error[E0102]: invalid numeric literal '1x'\n  --> 1:1"
//! );
//! ```

mod builder;
mod codes;

pub use builder::DiagnosticBuilder;
pub use codes::DiagnosticCode;

use crate::Span;
use std::cell::RefCell;
use std::fmt;
use std::fmt::Write as _;

/// Diagnostic severity level
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// Input the consumer should reject
    Error,
    /// Input that was accepted but probably not what was meant
    Warning,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    /// Returns true for [`Level::Error`] diagnostics.
    pub fn is_error(&self) -> bool {
        self.level == Level::Error
    }

    /// Render the diagnostic, prefixing the location with `origin`
    /// (typically a file name) when one is given.
    ///
    /// # Examples
    ///
    /// ```
    /// use argcli_util::diagnostic::Diagnostic;
    /// use argcli_util::Span;
    ///
    /// let diag = Diagnostic::warning("unterminated string literal", Span::new(4, 9, 2, 3));
    /// assert_eq!(
    ///     diag.render(Some("args.txt")),
    ///     "warning: unterminated string literal\n  --> args.txt:2:3"
    /// );
    /// ```
    pub fn render(&self, origin: Option<&str>) -> String {
        let mut out = String::new();
        let _ = write!(out, "{}", self.level);
        if let Some(code) = self.code {
            let _ = write!(out, "[{}]", code);
        }
        let _ = write!(out, ": {}", self.message);

        if !self.span.is_dummy() {
            match origin {
                Some(origin) => {
                    let _ = write!(out, "\n  --> {}:{}", origin, self.span);
                },
                None => {
                    let _ = write!(out, "\n  --> {}", self.span);
                },
            }
        }
        for note in &self.notes {
            let _ = write!(out, "\n   = note: {}", note);
        }
        for help in &self.helps {
            let _ = write!(out, "\n   = help: {}", help);
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(None))
    }
}

/// Handler for collecting diagnostics
///
/// The handler is shared by reference with the component that reports into
/// it and uses interior mutability, so it stays on the thread that owns that
/// component.
///
/// # Examples
///
/// ```
/// use argcli_util::diagnostic::{Diagnostic, Handler};
/// use argcli_util::Span;
///
/// let handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::error("unexpected character '@'", Span::DUMMY));
///
/// if handler.has_errors() {
///     eprintln!("input rejected with {} errors", handler.error_count());
/// }
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new, empty handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics.borrow().iter().any(Diagnostic::is_error)
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Warning)
            .count()
    }

    /// Returns true if nothing has been reported
    pub fn is_empty(&self) -> bool {
        self.diagnostics.borrow().is_empty()
    }

    /// Get a copy of every diagnostic reported so far
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Drain the collected diagnostics, leaving the handler empty
    pub fn take_diagnostics(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }
}
