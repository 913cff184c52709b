//! Statement execution.

use kq_ir::{Expr, Stmt, StmtKind};
use kq_stack::ensure_sufficient_stack;
use tracing::{debug, warn};

use super::{Flow, Interpreter};
use crate::errors::{
    immutable_binding, reserved_name, type_mismatch, undefined_function, undefined_variable,
    EvalError, EvalResult,
};
use crate::{BindingError, Mutability, Value};

impl Interpreter {
    /// Run statements in order, stopping at the first `return`.
    pub(crate) fn exec_block(&mut self, stmts: &[Stmt]) -> EvalResult<Flow> {
        ensure_sufficient_stack(|| {
            for stmt in stmts {
                if let Flow::Return(value) = self.exec(stmt)? {
                    return Ok(Flow::Return(value));
                }
            }
            Ok(Flow::Normal)
        })
    }

    pub(crate) fn exec(&mut self, stmt: &Stmt) -> EvalResult<Flow> {
        self.exec_kind(stmt).map_err(|e| e.with_span(stmt.span))
    }

    fn exec_kind(&mut self, stmt: &Stmt) -> EvalResult<Flow> {
        match &stmt.kind {
            StmtKind::VarDecl {
                name,
                value,
                immutable,
            } => {
                let value = self.eval(value)?;
                let mutability = if *immutable {
                    Mutability::Immutable
                } else {
                    Mutability::Mutable
                };
                self.env
                    .declare(name, value, mutability)
                    .map_err(|e| variable_error(e, name))?;
            }
            StmtKind::Assign { name, value } => {
                // The target is checked before the right-hand side runs.
                self.env
                    .check_assignable(name)
                    .map_err(|e| variable_error(e, name))?;
                let value = self.eval(value)?;
                self.env
                    .assign(name, value)
                    .map_err(|e| variable_error(e, name))?;
            }
            StmtKind::Print { kind, value } => {
                let value = self.eval(value)?;
                self.print.emit((*kind).into(), &value.to_string());
            }
            StmtKind::If {
                condition,
                then_block,
                else_block,
            } => {
                if self.eval(condition)?.is_truthy() {
                    return self.exec_block(then_block);
                }
                if let Some(else_block) = else_block {
                    return self.exec_block(else_block);
                }
            }
            StmtKind::Repeat {
                var,
                start,
                end,
                body,
            } => return self.exec_repeat(var, start, end, body),
            StmtKind::While { condition, body } => {
                while self.eval(condition)?.is_truthy() {
                    if let Flow::Return(value) = self.exec_block(body)? {
                        return Ok(Flow::Return(value));
                    }
                }
            }
            StmtKind::FuncDecl(decl) => {
                self.env
                    .define_function(decl.clone())
                    .map_err(|_| reserved_name("function"))?;
            }
            StmtKind::Return(value) => {
                let value = match value {
                    Some(expr) => self.eval(expr)?,
                    None => Value::Void,
                };
                return Ok(Flow::Return(value));
            }
            StmtKind::DeleteVar(name) => {
                self.env
                    .delete_var(name)
                    .map_err(|e| variable_error(e, name))?;
            }
            StmtKind::DeleteFunc(name) => {
                self.env
                    .delete_function(name)
                    .map_err(|_| undefined_function(name))?;
            }
            StmtKind::Connect(path) => self.connect(path, stmt.span)?,
            StmtKind::Async(body) => return self.exec_async(body),
            StmtKind::Expr(expr) => {
                self.eval(expr)?;
            }
        }
        Ok(Flow::Normal)
    }

    /// `loop (var, start, end) { body }`: count from `start` to `end`
    /// inclusive with `var` bound as a global, then unbind it.
    ///
    /// Inside a function whose frame already binds `var` (a parameter or a
    /// local), lookups in the body resolve to that frame binding, not the
    /// counter. The loop still runs its full range.
    fn exec_repeat(
        &mut self,
        var: &str,
        start: &Expr,
        end: &Expr,
        body: &[Stmt],
    ) -> EvalResult<Flow> {
        let start = self.eval_loop_bound(start, "start")?;
        let end = self.eval_loop_bound(end, "end")?;
        if self.env.frame_contains(var) {
            warn!(var, "loop counter is hidden by a local of the same name");
        }
        if self.env.global().contains(var) {
            warn!(var, "loop counter replaces an existing global");
        }
        // An immutable global of the same name fails here, before the
        // counter is bound and without unbinding the existing value.
        self.env
            .set_global(var, Value::Number(start))
            .map_err(|e| variable_error(e, var))?;
        let result = self.repeat_iterations(var, start, end, body);
        self.env.unset_global(var);
        result
    }

    fn repeat_iterations(
        &mut self,
        var: &str,
        start: f64,
        end: f64,
        body: &[Stmt],
    ) -> EvalResult<Flow> {
        let mut counter = start;
        while counter <= end {
            self.env
                .set_global(var, Value::Number(counter))
                .map_err(|e| variable_error(e, var))?;
            if let Flow::Return(value) = self.exec_block(body)? {
                return Ok(Flow::Return(value));
            }
            counter += 1.0;
        }
        Ok(Flow::Normal)
    }

    fn eval_loop_bound(&mut self, expr: &Expr, which: &str) -> EvalResult<f64> {
        match self.eval(expr)? {
            Value::Number(n) => Ok(n),
            other => Err(type_mismatch(
                format!("`loop` {which}"),
                "a number",
                other.type_name(),
            )
            .with_span(expr.span)),
        }
    }

    /// `async { ... }`: every child runs to completion; the first failure
    /// wins over any `return`.
    fn exec_async(&mut self, body: &[Stmt]) -> EvalResult<Flow> {
        debug!(tasks = body.len(), "async block");
        let mut first_error: Option<EvalError> = None;
        let mut first_return: Option<Value> = None;
        for stmt in body {
            match self.exec(stmt) {
                Ok(Flow::Normal) => {}
                Ok(Flow::Return(value)) => {
                    first_return.get_or_insert(value);
                }
                Err(err) => {
                    if first_error.is_none() {
                        first_error = Some(err);
                    } else {
                        debug!(error = %err, "async task failed after an earlier failure");
                    }
                }
            }
        }
        if let Some(err) = first_error {
            return Err(err);
        }
        Ok(first_return.map_or(Flow::Normal, Flow::Return))
    }
}

/// Map a refused variable binding to its runtime error.
fn variable_error(err: BindingError, name: &str) -> EvalError {
    match err {
        BindingError::Immutable(name) => immutable_binding(&name),
        BindingError::Undefined => undefined_variable(name),
        BindingError::Reserved => reserved_name("variable"),
    }
}
