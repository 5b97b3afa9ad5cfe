//! Stable error codes.

use std::fmt;

/// The closed set of diagnostic codes.
///
/// `E00xx` codes are lexical and recoverable: the scanner reports them
/// and keeps going. `E10xx` codes are evaluation errors and fatal: the
/// run aborts, because they indicate a precondition the upstream
/// parser/semantic phase was supposed to enforce.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Unexpected character, skipped.
    E0001,
    /// Malformed single-line comment marker (`/` not followed by `/` or `*`).
    E0002,
    /// Block comment unterminated at end of input.
    E0003,
    /// Undefined identifier.
    E1001,
    /// Value misuse: scalar from a function value, or assignment to a
    /// function binding.
    E1002,
    /// Arithmetic failure: division or modulus by zero, overflow.
    E1003,
}

impl ErrorCode {
    /// The code as rendered in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
        }
    }

    /// Whether this code aborts the run.
    pub fn is_fatal(self) -> bool {
        matches!(self, ErrorCode::E1001 | ErrorCode::E1002 | ErrorCode::E1003)
    }

    /// Whether this is a lexical (scanner) code.
    pub fn is_lexical(self) -> bool {
        !self.is_fatal()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
