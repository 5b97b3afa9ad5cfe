//! Runtime values.

use std::fmt;
use std::sync::Arc;

use yasl_ir::{Block, Name, Param, Type};

use crate::errors::{EvalError, EvalResult};

/// A declared function: parameter list, return type, body.
///
/// Created once from the declaration and shared immutably between the
/// binding and any in-flight calls.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct FunValue {
    pub name: Name,
    pub params: Vec<Param>,
    pub ty: Type,
    pub body: Block,
}

/// A runtime value: one of the two scalars, or a function.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Value {
    Int(i64),
    Bool(bool),
    Fun(Arc<FunValue>),
}

impl Value {
    /// Read as an integer. `bool` coerces (`true` is 1, `false` is 0);
    /// functions have no scalar reading.
    pub fn as_int(&self) -> EvalResult<i64> {
        match self {
            Value::Int(n) => Ok(*n),
            Value::Bool(b) => Ok(i64::from(*b)),
            Value::Fun(_) => Err(EvalError::NotAScalar),
        }
    }

    /// Read as a boolean. `int` coerces (nonzero is `true`); functions
    /// have no scalar reading.
    pub fn as_bool(&self) -> EvalResult<bool> {
        match self {
            Value::Int(n) => Ok(*n != 0),
            Value::Bool(b) => Ok(*b),
            Value::Fun(_) => Err(EvalError::NotAScalar),
        }
    }

    /// The type name used in messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Bool(_) => "bool",
            Value::Fun(_) => "fun",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Fun(fun) => write!(f, "<fun({}) -> {}>", fun.params.len(), fun.ty),
        }
    }
}
