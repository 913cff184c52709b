//! Expression evaluation and named-array operations.

use kq_ir::{BinaryOp, Expr, ExprKind};
use kq_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::builtins::{apply_math, apply_text, json};
use crate::errors::{
    index_out_of_bounds, non_numeric_index, not_an_array, type_mismatch, undefined_variable,
    value_not_found, EvalResult,
};
use crate::operators::{evaluate_binary, evaluate_unary};
use crate::{format_number, ArrayRef, Value};

impl Interpreter {
    pub(crate) fn eval(&mut self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_kind(expr)).map_err(|e| e.with_span(expr.span))
    }

    fn eval_kind(&mut self, expr: &Expr) -> EvalResult {
        match &expr.kind {
            ExprKind::Number(n) => Ok(Value::Number(*n)),
            ExprKind::Str(s) => Ok(Value::Str(s.clone())),
            ExprKind::Bool(b) => Ok(Value::Bool(*b)),
            ExprKind::Void => Ok(Value::Void),
            ExprKind::Ident(name) => self
                .env
                .lookup(name)
                .cloned()
                .ok_or_else(|| undefined_variable(name)),
            ExprKind::Array(items) => {
                let values = items
                    .iter()
                    .map(|item| self.eval(item))
                    .collect::<EvalResult<Vec<_>>>()?;
                Ok(Value::array(values))
            }
            ExprKind::Binary { op, left, right } => self.eval_binary(*op, left, right),
            ExprKind::Unary { op, operand } => {
                let operand = self.eval(operand)?;
                evaluate_unary(*op, &operand)
            }
            ExprKind::Call { name, args } => self.call_function(name, args),
            ExprKind::Index { array, index } => {
                let items = self.named_array(array)?;
                let index = self.eval(index)?;
                let position = checked_index(array, &items, &index)?;
                let item = items.borrow()[position].clone();
                Ok(item)
            }
            ExprKind::Read(path) => self.read(path),
            ExprKind::ArrAdd { array, value } => {
                let items = self.named_array(array)?;
                let value = self.eval(value)?;
                items.borrow_mut().push(value);
                Ok(Value::Number(items.len() as f64))
            }
            ExprKind::ArrDel { array, value } => {
                let items = self.named_array(array)?;
                let key = self.eval(value)?;
                remove_from(array, &items, &key)
            }
            ExprKind::ArrSize(array) => {
                let items = self.named_array(array)?;
                Ok(Value::Number(items.len() as f64))
            }
            ExprKind::ToJson(value) => {
                let value = self.eval(value)?;
                json::stringify(&value).map(Value::Str)
            }
            ExprKind::ParJson(text) => match self.eval(text)? {
                Value::Str(text) => json::parse(&text),
                other => Err(type_mismatch("`parjson`", "a string", other.type_name())),
            },
            ExprKind::Math { func, arg } => {
                let arg = self.eval(arg)?;
                apply_math(*func, &arg)
            }
            ExprKind::Text { func, arg } => {
                let arg = self.eval(arg)?;
                apply_text(*func, &arg)
            }
        }
    }

    fn eval_binary(&mut self, op: BinaryOp, left: &Expr, right: &Expr) -> EvalResult {
        match op {
            BinaryOp::And => {
                let truthy = self.eval(left)?.is_truthy() && self.eval(right)?.is_truthy();
                Ok(Value::Bool(truthy))
            }
            BinaryOp::Or => {
                let truthy = self.eval(left)?.is_truthy() || self.eval(right)?.is_truthy();
                Ok(Value::Bool(truthy))
            }
            _ => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                evaluate_binary(op, &left, &right)
            }
        }
    }

    /// The array bound to `name`, shared with the binding.
    fn named_array(&self, name: &str) -> EvalResult<ArrayRef> {
        match self.env.lookup(name) {
            Some(Value::Array(items)) => Ok(items.clone()),
            Some(other) => Err(not_an_array(name, other.type_name())),
            None => Err(undefined_variable(name)),
        }
    }
}

/// Validate `index` against `items`: a whole, non-negative, in-range number.
fn checked_index(array: &str, items: &ArrayRef, index: &Value) -> EvalResult<usize> {
    let Value::Number(n) = *index else {
        return Err(non_numeric_index(index.type_name()));
    };
    let len = items.len();
    if n.fract() == 0.0 && n >= 0.0 && n < len as f64 {
        Ok(n as usize)
    } else {
        Err(index_out_of_bounds(array, &format_number(n), len))
    }
}

/// `arrdel`: a Number removes by index, a String removes the first equal
/// element. Yields the removed element.
fn remove_from(array: &str, items: &ArrayRef, key: &Value) -> EvalResult {
    match key {
        Value::Number(_) => {
            let position = checked_index(array, items, key)?;
            Ok(items.borrow_mut().remove(position))
        }
        Value::Str(s) => {
            let position = items
                .borrow()
                .iter()
                .position(|item| item.strict_eq(key));
            match position {
                Some(position) => Ok(items.borrow_mut().remove(position)),
                None => Err(value_not_found(array, &format!("{s:?}"))),
            }
        }
        other => Err(non_numeric_index(other.type_name())),
    }
}
