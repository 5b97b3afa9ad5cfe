//! Evaluation failures.
//!
//! Every variant is fatal: the interpreter unwinds to the driver with
//! the first error it hits. Recoverable reporting exists only in the
//! lexical layer.

use thiserror::Error;
use yasl_diagnostic::{Diagnostic, ErrorCode};

/// Result alias used throughout the evaluator.
pub type EvalResult<T> = Result<T, EvalError>;

/// A fatal evaluation error.
#[derive(Error, Clone, Eq, PartialEq, Debug)]
pub enum EvalError {
    /// An identifier with no binding in any enclosing scope.
    #[error("'{name}' is not defined")]
    Undefined { name: String },

    /// Assignment to something that is not a mutable cell.
    #[error("'{name}' cannot be assigned to")]
    NotAssignable { name: String },

    /// A function value where an `int` or `bool` is required.
    #[error("a function value cannot be used as a scalar")]
    NotAScalar,

    /// A call through a name bound to a cell, not a function.
    #[error("'{name}' is not a function")]
    NotCallable { name: String },

    /// Argument count does not match the parameter list.
    #[error("'{name}' expects {expected} argument(s), got {found}")]
    WrongArity {
        name: String,
        expected: usize,
        found: usize,
    },

    /// `div` with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// `mod` with a zero divisor.
    #[error("modulo by zero")]
    ModuloByZero,

    /// Arithmetic outside the `i64` range.
    #[error("integer overflow")]
    Overflow,
}

impl EvalError {
    /// The diagnostic code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalError::Undefined { .. } => ErrorCode::E1001,
            EvalError::NotAssignable { .. }
            | EvalError::NotAScalar
            | EvalError::NotCallable { .. }
            | EvalError::WrongArity { .. } => ErrorCode::E1002,
            EvalError::DivisionByZero | EvalError::ModuloByZero | EvalError::Overflow => {
                ErrorCode::E1003
            }
        }
    }

    /// Convert into a diagnostic for driver-side reporting.
    ///
    /// Evaluation errors carry no source position; the diagnostic sits
    /// at the start position.
    pub fn into_diagnostic(self) -> Diagnostic {
        let code = self.code();
        Diagnostic::error(code).with_message(self.to_string())
    }
}
