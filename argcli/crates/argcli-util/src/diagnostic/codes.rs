//! Diagnostic codes for categorizing errors and warnings.
//!
//! # Examples
//!
//! ```
//! use argcli_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEX_UNEXPECTED_CHAR;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 101);
//! assert_eq!(code.as_str(), "E0101");
//! ```

use std::fmt;

/// A unique code identifying a diagnostic message
///
/// Codes follow the format `{prefix}{number}` where the prefix is "E" for
/// errors or "W" for warnings and the number is zero-padded to four digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix (e.g., "E" for error, "W" for warning)
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E0101", "W0101")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // LEXER CODES (E01xx / W01xx)
    // =========================================================================

    /// E0101: Lexer - Character that starts no token
    pub const E_LEX_UNEXPECTED_CHAR: Self = Self::new("E", 101);
    /// E0102: Lexer - Numeric literal that is neither an integer nor a float
    pub const E_LEX_INVALID_NUMBER: Self = Self::new("E", 102);
    /// E0103: Lexer - Integer literal carrying a float suffix
    pub const E_LEX_SUFFIXED_INTEGER: Self = Self::new("E", 103);

    /// W0101: Lexer - String literal cut off by end of input
    pub const W_LEX_UNTERMINATED_STRING: Self = Self::new("W", 101);
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_formatting() {
        assert_eq!(DiagnosticCode::new("E", 7).as_str(), "E0007");
        assert_eq!(DiagnosticCode::W_LEX_UNTERMINATED_STRING.to_string(), "W0101");
        assert_eq!(
            format!("{:?}", DiagnosticCode::E_LEX_INVALID_NUMBER),
            "DiagnosticCode(E0102)"
        );
    }

    #[test]
    fn test_lexer_codes_are_distinct() {
        let codes = [
            DiagnosticCode::E_LEX_UNEXPECTED_CHAR,
            DiagnosticCode::E_LEX_INVALID_NUMBER,
            DiagnosticCode::E_LEX_SUFFIXED_INTEGER,
            DiagnosticCode::W_LEX_UNTERMINATED_STRING,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
