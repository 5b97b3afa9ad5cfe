//! Hand-written lexical analyzer for YASL.
//!
//! The lexer is a Mealy machine: token emissions and character
//! consumption happen on transitions, not in states. It is split into
//! three layers:
//!
//! - [`SourceCursor`] — the character stream, tracking the current
//!   character, 1-based line/column, and a sticky end-of-input flag;
//! - [`machine`] — the explicit state enumeration and the pure
//!   transition function `step(state, input) -> Step`;
//! - [`Scanner`] — drives the machine, buffers lexemes, resolves
//!   keywords, and reports recoverable errors to a caller-supplied
//!   [`DiagnosticQueue`](yasl_diagnostic::DiagnosticQueue).
//!
//! Lexical errors never abort the scan: they are reported and skipped.
//! Once the input is exhausted, every further `next()` call returns an
//! EOF token at the same final position.

mod cursor;
mod keywords;
mod lex_error;
pub mod machine;
mod scanner;

pub use cursor::SourceCursor;
pub use lex_error::LexErrorKind;
pub use scanner::Scanner;
