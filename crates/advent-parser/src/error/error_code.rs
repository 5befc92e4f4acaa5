//! Error codes for input diagnostics.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Lexical errors within a line
//! - `E1xx` - Structural errors across lines
//! - `E2xx` - Validation errors in well-formed input

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Lexical Errors (E0xx)
    // =========================================================================
    /// Unexpected character.
    ///
    /// A character was encountered that does not fit the line format.
    E001,

    /// Number out of range.
    ///
    /// A number is too large to be stored as a 64-bit unsigned integer.
    E002,

    // =========================================================================
    // Structural Errors (E1xx)
    // =========================================================================
    /// Empty input.
    ///
    /// The input holds no data lines at all.
    E100,

    /// Ragged grid row.
    ///
    /// A grid row is wider or narrower than the first row.
    E101,

    /// Missing operator row.
    ///
    /// A worksheet has no final row of `+` and `*` operators.
    E102,

    /// Unexpected section.
    ///
    /// The input has more blank-line separated sections than the format allows.
    E103,

    // =========================================================================
    // Validation Errors (E2xx)
    // =========================================================================
    /// Reversed range.
    ///
    /// A range's start is greater than its end.
    E200,

    /// Missing beam source.
    ///
    /// A manifold has no `S` marking where the beam enters.
    E201,

    /// Duplicate beam source.
    ///
    /// A manifold has more than one `S`.
    E202,

    /// Diagonal tile run.
    ///
    /// Two consecutive red tiles share neither a row nor a column.
    E203,

    /// Duplicate entry.
    ///
    /// The same item is listed more than once.
    E204,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Lexical errors
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            // Structural errors
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
            // Validation errors
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
            ErrorCode::E203 => "E203",
            ErrorCode::E204 => "E204",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            // Lexical errors
            ErrorCode::E001 => "unexpected character",
            ErrorCode::E002 => "number out of range",
            // Structural errors
            ErrorCode::E100 => "empty input",
            ErrorCode::E101 => "ragged grid row",
            ErrorCode::E102 => "missing operator row",
            ErrorCode::E103 => "unexpected section",
            // Validation errors
            ErrorCode::E200 => "reversed range",
            ErrorCode::E201 => "missing beam source",
            ErrorCode::E202 => "duplicate beam source",
            ErrorCode::E203 => "diagonal tile run",
            ErrorCode::E204 => "duplicate entry",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E001.to_string(), "E001");
        assert_eq!(ErrorCode::E101.to_string(), "E101");
        assert_eq!(ErrorCode::E204.to_string(), "E204");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E001.description(), "unexpected character");
        assert_eq!(ErrorCode::E200.description(), "reversed range");
        assert_eq!(ErrorCode::E203.description(), "diagonal tile run");
    }
}
