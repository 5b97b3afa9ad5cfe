#![deny(clippy::arithmetic_side_effects)]
//! Tree-walking evaluator for YASL programs.
//!
//! The evaluator walks the AST from `yasl_ir` directly, without any
//! intermediate lowering:
//! - `SymbolTable`: scope stack mapping names to storage cells and
//!   function bindings
//! - `Interpreter`: statement execution and expression evaluation
//! - `PrintHandler`: configurable destination for `print` output
//! - `Value` and `EvalError`: the runtime value and failure types
//!
//! All evaluation errors are fatal: the interpreter stops at the first
//! one and returns it to the driver.

mod errors;
mod interpreter;
mod print_handler;
mod symbol_table;
mod value;

pub use errors::{EvalError, EvalResult};
pub use interpreter::Interpreter;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandler, SharedPrintHandler,
};
pub use symbol_table::{AssignError, Cell, Mutability, SymbolTable};
pub use value::{FunValue, Value};
