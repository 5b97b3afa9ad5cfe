//! Diagnostic and error reporting for the YASL interpreter.
//!
//! Two tiers of failure flow through this crate:
//!
//! - **Recoverable lexical diagnostics** (`E00xx`) — reported to a
//!   [`DiagnosticQueue`] and scanning continues.
//! - **Fatal evaluation errors** (`E10xx`) — rendered once when the
//!   evaluator aborts; they indicate a violated precondition from an
//!   earlier phase.
//!
//! The queue is an explicit sink passed into each operation that can
//! report, never a globally shared stream.

mod diagnostic;
mod error_code;
mod queue;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
