//! Storage cells and the scoped symbol table.
//!
//! Uses a scope stack for block entry and exit; lookup walks from the
//! innermost scope outward.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use yasl_ir::{Name, Type};

use crate::value::{FunValue, Value};

/// A typed storage slot.
///
/// A cell holds exactly its declared type for its whole lifetime;
/// incoming values are converted on store.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    Int(i64),
    Bool(bool),
}

impl Cell {
    /// A zero-initialized cell of the given type: `0` or `false`.
    pub fn new(ty: Type) -> Self {
        match ty {
            Type::Int => Cell::Int(0),
            Type::Bool => Cell::Bool(false),
        }
    }

    /// The cell's declared type.
    pub fn ty(self) -> Type {
        match self {
            Cell::Int(_) => Type::Int,
            Cell::Bool(_) => Type::Bool,
        }
    }

    /// Read the current value.
    pub fn get(self) -> Value {
        match self {
            Cell::Int(n) => Value::Int(n),
            Cell::Bool(b) => Value::Bool(b),
        }
    }

    /// Convert `value` to the cell's type and store it.
    ///
    /// Returns the stored value, or `None` when `value` is a function
    /// and has no scalar conversion.
    pub fn set(&mut self, value: &Value) -> Option<Value> {
        match self {
            Cell::Int(slot) => *slot = value.as_int().ok()?,
            Cell::Bool(slot) => *slot = value.as_bool().ok()?,
        }
        Some(self.get())
    }
}

/// Whether a cell binding may be reassigned.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Mutability {
    /// `var`-style cells, parameters, and result cells.
    Mutable,
    /// `val` constants.
    Immutable,
}

/// Why an assignment failed.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum AssignError {
    /// No binding for the name in any scope.
    Undefined,
    /// The binding exists but is a constant or a function.
    Immutable,
    /// The assigned value is a function; cells hold scalars only.
    NotScalar,
}

/// One name's binding within a scope.
#[derive(Clone, Debug)]
enum Binding {
    Cell { cell: Cell, mutability: Mutability },
    Fun(Arc<FunValue>),
}

/// Scope-stacked mapping from names to bindings.
///
/// The table always holds at least one scope. Declarations go into the
/// innermost scope and shadow outer bindings of the same name.
pub struct SymbolTable {
    scopes: Vec<FxHashMap<Name, Binding>>,
}

impl SymbolTable {
    /// Create a table with a single outermost scope.
    pub fn new() -> Self {
        SymbolTable {
            scopes: vec![FxHashMap::default()],
        }
    }

    /// Enter a new innermost scope.
    pub fn push_scope(&mut self) {
        self.scopes.push(FxHashMap::default());
    }

    /// Leave the innermost scope, dropping its bindings.
    ///
    /// The outermost scope is never popped.
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Current scope depth.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// The innermost scope.
    fn innermost(&mut self) -> &mut FxHashMap<Name, Binding> {
        if self.scopes.is_empty() {
            self.scopes.push(FxHashMap::default());
        }
        let Some(scope) = self.scopes.last_mut() else {
            unreachable!("the stack holds at least one scope");
        };
        scope
    }

    /// Bind `name` to a cell in the innermost scope.
    pub fn define_cell(&mut self, name: Name, cell: Cell, mutability: Mutability) {
        self.innermost()
            .insert(name, Binding::Cell { cell, mutability });
    }

    /// Bind `name` to a function in the innermost scope.
    pub fn define_fun(&mut self, name: Name, fun: Arc<FunValue>) {
        self.innermost().insert(name, Binding::Fun(fun));
    }

    /// Read the value bound to `name`, innermost scope first.
    pub fn value(&self, name: Name) -> Option<Value> {
        self.scopes.iter().rev().find_map(|scope| {
            scope.get(&name).map(|binding| match binding {
                Binding::Cell { cell, .. } => cell.get(),
                Binding::Fun(fun) => Value::Fun(Arc::clone(fun)),
            })
        })
    }

    /// Store `value` into the nearest cell bound to `name`.
    ///
    /// The value is converted to the cell's declared type; the stored
    /// value is returned.
    pub fn assign(&mut self, name: Name, value: &Value) -> Result<Value, AssignError> {
        for scope in self.scopes.iter_mut().rev() {
            match scope.get_mut(&name) {
                None => continue,
                Some(Binding::Fun(_))
                | Some(Binding::Cell {
                    mutability: Mutability::Immutable,
                    ..
                }) => return Err(AssignError::Immutable),
                Some(Binding::Cell { cell, .. }) => {
                    return cell.set(value).ok_or(AssignError::NotScalar);
                }
            }
        }
        Err(AssignError::Undefined)
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
