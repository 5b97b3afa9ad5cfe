//! The tree-walking interpreter.

use std::sync::Arc;

use tracing::debug;
use yasl_ir::{BinOp, Block, Decl, Expr, Name, Program, Stmt, StringInterner};

use crate::errors::{EvalError, EvalResult};
use crate::print_handler::SharedPrintHandler;
use crate::symbol_table::{AssignError, Cell, Mutability, SymbolTable};
use crate::value::{FunValue, Value};

/// Executes a program against a scoped symbol table.
///
/// The interpreter walks the AST directly. Each block gets its own
/// scope; declarations run before statements; the first evaluation
/// error aborts the run.
pub struct Interpreter<'i> {
    interner: &'i StringInterner,
    symbols: SymbolTable,
    print: SharedPrintHandler,
}

impl<'i> Interpreter<'i> {
    /// Create an interpreter writing program output through `print`.
    pub fn new(interner: &'i StringInterner, print: SharedPrintHandler) -> Self {
        Interpreter {
            interner,
            symbols: SymbolTable::new(),
            print,
        }
    }

    /// Run a whole program.
    pub fn run_program(&mut self, program: &Program) -> EvalResult<()> {
        debug!(program = self.interner.lookup(program.name), "run");
        self.exec_block(&program.block)
    }

    /// Execute a block in a fresh scope.
    ///
    /// The scope is popped on every exit path, including errors.
    fn exec_block(&mut self, block: &Block) -> EvalResult<()> {
        self.symbols.push_scope();
        let result = self.exec_block_inner(block);
        self.symbols.pop_scope();
        result
    }

    fn exec_block_inner(&mut self, block: &Block) -> EvalResult<()> {
        for decl in &block.decls {
            self.declare(decl);
        }
        for stmt in &block.stmts {
            self.exec_stmt(stmt)?;
        }
        Ok(())
    }

    /// Enter one declaration into the innermost scope.
    fn declare(&mut self, decl: &Decl) {
        match decl {
            Decl::Val { name, init } => {
                self.symbols
                    .define_cell(*name, Cell::Int(*init), Mutability::Immutable);
            }
            Decl::Var { name, ty } => {
                self.symbols
                    .define_cell(*name, Cell::new(*ty), Mutability::Mutable);
            }
            Decl::Fun {
                name,
                params,
                ty,
                body,
            } => {
                let fun = Arc::new(FunValue {
                    name: *name,
                    params: params.clone(),
                    ty: *ty,
                    body: body.clone(),
                });
                self.symbols.define_fun(*name, fun);
            }
        }
    }

    /// Execute one statement.
    ///
    /// Every statement yields the value it computed: assignment yields
    /// the evaluated right-hand value (before any cell-type conversion),
    /// print yields the printed value.
    fn exec_stmt(&mut self, stmt: &Stmt) -> EvalResult<Value> {
        match stmt {
            Stmt::Assign { name, expr } => {
                let value = self.eval_expr(expr)?;
                let stored = match self.symbols.assign(*name, &value) {
                    Ok(stored) => stored,
                    Err(AssignError::Undefined) => return Err(self.undefined(*name)),
                    Err(AssignError::Immutable) => {
                        return Err(EvalError::NotAssignable {
                            name: self.text(*name),
                        });
                    }
                    Err(AssignError::NotScalar) => return Err(EvalError::NotAScalar),
                };
                debug!("{} = {stored}", self.interner.lookup(*name));
                Ok(value)
            }
            Stmt::Print { expr } => {
                let value = self.eval_expr(expr)?;
                if matches!(value, Value::Fun(_)) {
                    return Err(EvalError::NotAScalar);
                }
                self.print.println(&value.to_string());
                Ok(value)
            }
        }
    }

    fn eval_expr(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Num(n) => Ok(Value::Int(*n)),
            Expr::Ident(name) => self
                .symbols
                .value(*name)
                .ok_or_else(|| self.undefined(*name)),
            Expr::Binary { op, lhs, rhs } => {
                let lhs = self.eval_expr(lhs)?.as_int()?;
                let rhs = self.eval_expr(rhs)?.as_int()?;
                apply_binary(*op, lhs, rhs)
            }
            Expr::Neg(inner) => {
                let n = self.eval_expr(inner)?.as_int()?;
                n.checked_neg().map(Value::Int).ok_or(EvalError::Overflow)
            }
            Expr::Call { name, args } => self.eval_call(*name, args),
        }
    }

    /// Call a function by name.
    ///
    /// Arguments are evaluated in the caller's scope. The call scope
    /// binds one cell per parameter plus the result cell, which carries
    /// the callee's own name and declared return type, zero-initialized.
    /// The body assigns its result through that name; its final value is
    /// the call's value.
    fn eval_call(&mut self, name: Name, args: &[Expr]) -> EvalResult<Value> {
        let fun = match self.symbols.value(name) {
            Some(Value::Fun(fun)) => fun,
            Some(_) => {
                return Err(EvalError::NotCallable {
                    name: self.text(name),
                });
            }
            None => return Err(self.undefined(name)),
        };
        if args.len() != fun.params.len() {
            return Err(EvalError::WrongArity {
                name: self.text(name),
                expected: fun.params.len(),
                found: args.len(),
            });
        }

        let mut values = Vec::with_capacity(args.len());
        for arg in args {
            values.push(self.eval_expr(arg)?);
        }

        debug!(fun = self.interner.lookup(name), "call");
        self.symbols.push_scope();
        let result = self.run_call(&fun, &values);
        self.symbols.pop_scope();
        result
    }

    fn run_call(&mut self, fun: &FunValue, args: &[Value]) -> EvalResult<Value> {
        for (param, value) in fun.params.iter().zip(args) {
            let mut cell = Cell::new(param.ty);
            if cell.set(value).is_none() {
                return Err(EvalError::NotAScalar);
            }
            self.symbols.define_cell(param.name, cell, Mutability::Mutable);
        }
        self.symbols
            .define_cell(fun.name, Cell::new(fun.ty), Mutability::Mutable);

        self.exec_block(&fun.body)?;

        // The result cell is still the innermost binding for the name.
        self.symbols.value(fun.name).ok_or_else(|| self.undefined(fun.name))
    }

    fn text(&self, name: Name) -> String {
        self.interner.lookup(name).to_string()
    }

    fn undefined(&self, name: Name) -> EvalError {
        EvalError::Undefined {
            name: self.text(name),
        }
    }
}

/// Apply a binary operator to integer operands.
///
/// `div` and `mod` truncate toward zero; zero divisors and any result
/// outside the `i64` range are errors.
fn apply_binary(op: BinOp, lhs: i64, rhs: i64) -> EvalResult<Value> {
    let result = match op {
        BinOp::Add => lhs.checked_add(rhs).ok_or(EvalError::Overflow)?,
        BinOp::Sub => lhs.checked_sub(rhs).ok_or(EvalError::Overflow)?,
        BinOp::Mul => lhs.checked_mul(rhs).ok_or(EvalError::Overflow)?,
        BinOp::Div => {
            if rhs == 0 {
                return Err(EvalError::DivisionByZero);
            }
            lhs.checked_div(rhs).ok_or(EvalError::Overflow)?
        }
        BinOp::Mod => {
            if rhs == 0 {
                return Err(EvalError::ModuloByZero);
            }
            lhs.checked_rem(rhs).ok_or(EvalError::Overflow)?
        }
    };
    Ok(Value::Int(result))
}
