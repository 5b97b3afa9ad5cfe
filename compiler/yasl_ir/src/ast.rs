//! Abstract syntax tree for YASL programs.
//!
//! Each node owns its children exclusively: the AST is a tree, not a
//! graph. Nodes are constructed once by the parser (an external
//! collaborator of this workspace), never mutated, and traversed
//! read-only by the evaluator, possibly multiple times.

use crate::Name;
use std::fmt;

/// A whole program: `program <name>; <block> .`
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Program {
    pub name: Name,
    pub block: Block,
}

/// A block: declarations followed by `begin <stmts> end`.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Block {
    pub decls: Vec<Decl>,
    pub stmts: Vec<Stmt>,
}

impl Block {
    pub fn new(decls: Vec<Decl>, stmts: Vec<Stmt>) -> Self {
        Block { decls, stmts }
    }
}

/// Declarations introduce bindings before a block's statements run.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Decl {
    /// `val <name> = <n>;` — an integer cell initialized to `n`.
    Val { name: Name, init: i64 },

    /// A variable cell of the declared type, zero-initialized.
    Var { name: Name, ty: Type },

    /// A function binding. The body is owned by the declaration; function
    /// values created from it share it immutably.
    Fun {
        name: Name,
        params: Vec<Param>,
        ty: Type,
        body: Block,
    },
}

/// A function parameter: name plus declared type.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Param {
    pub name: Name,
    pub ty: Type,
}

/// The two YASL scalar types.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Type {
    Int,
    Bool,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Int => write!(f, "int"),
            Type::Bool => write!(f, "bool"),
        }
    }
}

/// Statement kinds.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Stmt {
    /// `<name> = <expr>;` — store the expression's value in the named cell.
    Assign { name: Name, expr: Expr },

    /// `print <expr>;` — write the value as one line of program output.
    Print { expr: Expr },
}

/// Expression kinds.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Expr {
    /// Integer literal.
    Num(i64),

    /// Read of a named cell.
    Ident(Name),

    /// Binary arithmetic.
    Binary {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },

    /// Unary negation.
    Neg(Box<Expr>),

    /// Function call.
    Call { name: Name, args: Vec<Expr> },
}

impl Expr {
    /// Convenience constructor for binary nodes.
    pub fn binary(op: BinOp, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }
}

/// Binary arithmetic operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    /// Integer division (`div`), truncating toward zero.
    Div,
    /// Remainder (`mod`).
    Mod,
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinOp::Add => write!(f, "+"),
            BinOp::Sub => write!(f, "-"),
            BinOp::Mul => write!(f, "*"),
            BinOp::Div => write!(f, "div"),
            BinOp::Mod => write!(f, "mod"),
        }
    }
}
