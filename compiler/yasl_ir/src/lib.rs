//! Shared IR types for the YASL interpreter.
//!
//! This crate is the dependency root of the workspace: every other crate
//! builds on the types defined here. It contains no behavior beyond the
//! data types themselves.
//!
//! - [`Pos`] — 1-based line/column source position
//! - [`Name`] / [`StringInterner`] — interned identifiers
//! - [`Token`] / [`TokenKind`] — lexical units
//! - [`ast`] — the statement/expression tree executed by the evaluator

pub mod ast;
mod interner;
mod name;
mod pos;
mod token;

pub use ast::{BinOp, Block, Decl, Expr, Param, Program, Stmt, Type};
pub use interner::{SharedInterner, StringInterner};
pub use name::Name;
pub use pos::Pos;
pub use token::{Token, TokenKind};

/// Assert that a type has an expected size at compile time.
///
/// Guards against accidental growth of hot types like [`Token`].
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}
