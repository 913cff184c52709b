//! Binary and unary operator semantics.
//!
//! `&&` and `||` short-circuit, so the interpreter handles them before
//! both operands exist; everything else lands in [`evaluate_binary`].

use kq_ir::{BinaryOp, UnaryOp};

use crate::errors::{invalid_binary_op, invalid_unary_op, EvalResult};
use crate::Value;

pub fn evaluate_binary(op: BinaryOp, left: &Value, right: &Value) -> EvalResult {
    match op {
        BinaryOp::Eq => Ok(Value::Bool(left.loose_eq(right))),
        BinaryOp::NotEq => Ok(Value::Bool(!left.loose_eq(right))),
        BinaryOp::StrictEq => Ok(Value::Bool(left.strict_eq(right))),
        BinaryOp::StrictNotEq => Ok(Value::Bool(!left.strict_eq(right))),
        BinaryOp::Lt | BinaryOp::LtEq | BinaryOp::Gt | BinaryOp::GtEq => compare(op, left, right),
        BinaryOp::Add => add(left, right),
        BinaryOp::Sub
        | BinaryOp::Mul
        | BinaryOp::Div
        | BinaryOp::Mod
        | BinaryOp::Pow
        | BinaryOp::BitXor => arithmetic(op, left, right),
        BinaryOp::And => Ok(Value::Bool(left.is_truthy() && right.is_truthy())),
        BinaryOp::Or => Ok(Value::Bool(left.is_truthy() || right.is_truthy())),
    }
}

/// `+` concatenates when either side is a string, otherwise adds numbers.
fn add(left: &Value, right: &Value) -> EvalResult {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::Void, _) | (_, Value::Void) => Err(mismatch(BinaryOp::Add, left, right)),
        (Value::Str(_), _) | (_, Value::Str(_)) => Ok(Value::Str(format!("{left}{right}"))),
        _ => Err(mismatch(BinaryOp::Add, left, right)),
    }
}

fn arithmetic(op: BinaryOp, left: &Value, right: &Value) -> EvalResult {
    let (Value::Number(a), Value::Number(b)) = (left, right) else {
        return Err(mismatch(op, left, right));
    };
    let (a, b) = (*a, *b);
    let result = match op {
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div => a / b,
        BinaryOp::Mod => a % b,
        BinaryOp::Pow => a.powf(b),
        BinaryOp::BitXor => ((a as i64) ^ (b as i64)) as f64,
        _ => return Err(mismatch(op, left, right)),
    };
    Ok(Value::Number(result))
}

/// Ordering is defined between two numbers or two strings.
fn compare(op: BinaryOp, left: &Value, right: &Value) -> EvalResult {
    let ordering = match (left, right) {
        (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
        (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
        _ => return Err(mismatch(op, left, right)),
    };
    // NaN compares false against everything.
    let Some(ordering) = ordering else {
        return Ok(Value::Bool(false));
    };
    let result = match op {
        BinaryOp::Lt => ordering.is_lt(),
        BinaryOp::LtEq => ordering.is_le(),
        BinaryOp::Gt => ordering.is_gt(),
        _ => ordering.is_ge(),
    };
    Ok(Value::Bool(result))
}

pub fn evaluate_unary(op: UnaryOp, operand: &Value) -> EvalResult {
    match (op, operand) {
        (UnaryOp::Not, value) => Ok(Value::Bool(!value.is_truthy())),
        (UnaryOp::Neg, Value::Number(n)) => Ok(Value::Number(-n)),
        (UnaryOp::Neg, other) => Err(invalid_unary_op(op, other.type_name())),
    }
}

#[cold]
fn mismatch(op: BinaryOp, left: &Value, right: &Value) -> crate::EvalError {
    invalid_binary_op(op, left.type_name(), right.type_name())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests;
