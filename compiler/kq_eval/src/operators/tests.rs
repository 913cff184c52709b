#![allow(clippy::unwrap_used)]

use super::*;
use kq_diagnostic::ErrorCode;
use pretty_assertions::assert_eq;

fn binary(op: BinaryOp, left: impl Into<Value>, right: impl Into<Value>) -> Value {
    evaluate_binary(op, &left.into(), &right.into()).unwrap()
}

fn binary_err(op: BinaryOp, left: Value, right: Value) -> ErrorCode {
    evaluate_binary(op, &left, &right).unwrap_err().code()
}

#[test]
fn add_dispatches_on_type() {
    assert_eq!(binary(BinaryOp::Add, 2.0, 3.0), Value::Number(5.0));
    assert_eq!(binary(BinaryOp::Add, "a", "b"), Value::string("ab"));
    assert_eq!(binary(BinaryOp::Add, "n=", 4.0), Value::string("n=4"));
    assert_eq!(binary(BinaryOp::Add, 1.5, "x"), Value::string("1.5x"));
    assert_eq!(binary(BinaryOp::Add, "ok: ", true), Value::string("ok: true"));
}

#[test]
fn sum_to_zero_stays_numeric() {
    assert_eq!(binary(BinaryOp::Add, 2.0, -2.0), Value::Number(0.0));
}

#[test]
fn concatenation_renders_arrays_as_json() {
    let array = Value::array(vec![1.0.into(), "b".into()]);
    assert_eq!(
        evaluate_binary(BinaryOp::Add, &"items: ".into(), &array).unwrap(),
        Value::string("items: [1,\"b\"]")
    );
}

#[test]
fn void_is_not_an_operand() {
    assert_eq!(binary_err(BinaryOp::Add, 2.0.into(), Value::Void), ErrorCode::E3001);
    assert_eq!(binary_err(BinaryOp::Add, "a".into(), Value::Void), ErrorCode::E3001);
    assert_eq!(binary_err(BinaryOp::Mul, Value::Void, 1.0.into()), ErrorCode::E3001);
    assert_eq!(binary_err(BinaryOp::Lt, Value::Void, 1.0.into()), ErrorCode::E3001);
    assert_eq!(binary(BinaryOp::Eq, Value::Void, Value::Void), Value::Bool(true));
}

#[test]
fn arithmetic_is_numeric_only() {
    assert_eq!(binary(BinaryOp::Sub, 10.0, 4.0), Value::Number(6.0));
    assert_eq!(binary(BinaryOp::Mul, 2.5, 4.0), Value::Number(10.0));
    assert_eq!(binary(BinaryOp::Div, 1.0, 4.0), Value::Number(0.25));
    assert_eq!(binary(BinaryOp::Mod, -7.0, 3.0), Value::Number(-1.0));
    assert_eq!(binary(BinaryOp::Pow, 2.0, 10.0), Value::Number(1024.0));
    assert_eq!(binary(BinaryOp::Div, 1.0, 0.0), Value::Number(f64::INFINITY));
    assert_eq!(binary_err(BinaryOp::Sub, "5".into(), 1.0.into()), ErrorCode::E3001);
}

#[test]
fn xor_truncates() {
    assert_eq!(binary(BinaryOp::BitXor, 5.0, 3.0), Value::Number(6.0));
    assert_eq!(binary(BinaryOp::BitXor, 5.9, 3.2), Value::Number(6.0));
    assert_eq!(binary(BinaryOp::BitXor, -1.0, 0.0), Value::Number(-1.0));
}

#[test]
fn ordering() {
    assert_eq!(binary(BinaryOp::Lt, 1.0, 2.0), Value::Bool(true));
    assert_eq!(binary(BinaryOp::GtEq, 2.0, 2.0), Value::Bool(true));
    assert_eq!(binary(BinaryOp::Gt, "b", "a"), Value::Bool(true));
    assert_eq!(binary(BinaryOp::LtEq, f64::NAN, 1.0), Value::Bool(false));
    assert_eq!(binary_err(BinaryOp::Lt, 1.0.into(), "2".into()), ErrorCode::E3001);
}

#[test]
fn equality_operators() {
    assert_eq!(binary(BinaryOp::Eq, 1.0, "1"), Value::Bool(true));
    assert_eq!(binary(BinaryOp::StrictEq, 1.0, "1"), Value::Bool(false));
    assert_eq!(binary(BinaryOp::NotEq, 0.0, false), Value::Bool(false));
    assert_eq!(binary(BinaryOp::StrictNotEq, 0.0, false), Value::Bool(true));
}

#[test]
fn logical_operators_yield_booleans() {
    assert_eq!(binary(BinaryOp::And, 1.0, "x"), Value::Bool(true));
    assert_eq!(binary(BinaryOp::Or, 0.0, ""), Value::Bool(false));
}

#[test]
fn unary() {
    assert_eq!(evaluate_unary(UnaryOp::Not, &Value::Void).unwrap(), Value::Bool(true));
    assert_eq!(evaluate_unary(UnaryOp::Neg, &3.0.into()).unwrap(), Value::Number(-3.0));
    let err = evaluate_unary(UnaryOp::Neg, &"3".into()).unwrap_err();
    assert_eq!(err.kind.to_string(), "cannot apply `-` to string");
}

#[test]
fn mismatch_message_names_both_sides() {
    let err = evaluate_binary(BinaryOp::Add, &2.0.into(), &Value::Void).unwrap_err();
    assert_eq!(err.kind.to_string(), "cannot apply `+` to number and void");
}
