#![allow(clippy::unwrap_used)]

use super::*;
use crate::errors::EvalErrorKind;
use kq_diagnostic::ErrorCode;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn math(func: MathFn, x: f64) -> f64 {
    apply_math(func, &Value::Number(x)).unwrap().as_number().unwrap()
}

fn text(func: TextFn, value: Value) -> Value {
    apply_text(func, &value).unwrap()
}

#[test]
fn math_helpers() {
    assert_eq!(math(MathFn::Floor, 2.7), 2.0);
    assert_eq!(math(MathFn::Floor, -2.1), -3.0);
    assert_eq!(math(MathFn::Sqrt, 16.0), 4.0);
    assert_eq!(math(MathFn::Sin, 0.0), 0.0);
    assert_eq!(math(MathFn::Cos, 0.0), 1.0);
    assert_eq!(math(MathFn::Tan, 0.0), 0.0);
    assert!(math(MathFn::Sqrt, -1.0).is_nan());
}

#[test]
fn round_halves_go_up() {
    assert_eq!(math(MathFn::Round, 2.5), 3.0);
    assert_eq!(math(MathFn::Round, -2.5), -2.0);
    assert_eq!(math(MathFn::Round, 2.4), 2.0);
    assert_eq!(math(MathFn::Round, -2.6), -3.0);
}

#[test]
fn math_rejects_non_numbers() {
    let err = apply_math(MathFn::Sqrt, &Value::string("9")).unwrap_err();
    assert_eq!(err.code(), ErrorCode::E3001);
    assert_eq!(err.kind.to_string(), "`sqrt` expects a number, found string");
}

#[test]
fn text_helpers() {
    assert_eq!(text(TextFn::Uppercase, "MiXed".into()), Value::string("MIXED"));
    assert_eq!(text(TextFn::Lowercase, "MiXed".into()), Value::string("mixed"));
    assert_eq!(text(TextFn::Reverse, "abc".into()), Value::string("cba"));
    assert_eq!(text(TextFn::Reverse, 120.5.into()), Value::string("5.021"));
}

#[test]
fn tokenize_strips_punctuation() {
    assert_eq!(
        text(TextFn::Tokenize, "Hello, world!  It's   fine.".into()),
        Value::array(vec!["Hello".into(), "world".into(), "Its".into(), "fine".into()])
    );
    assert_eq!(text(TextFn::Tokenize, "  ".into()), Value::array(vec![]));
}

#[test]
fn text_rejects_arrays() {
    let err = apply_text(TextFn::Reverse, &Value::array(vec![])).unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::TypeMismatch { got: "array", .. }));
}

#[test]
fn json_encoding() {
    let value = Value::array(vec![
        Value::Number(3.0),
        Value::Number(0.5),
        Value::string("q\"uote"),
        Value::Bool(true),
        Value::Void,
        Value::Number(f64::NAN),
    ]);
    assert_eq!(
        json::stringify(&value).unwrap(),
        r#"[3,0.5,"q\"uote",true,null,null]"#
    );
    assert_eq!(json::stringify(&Value::string("hi")).unwrap(), "\"hi\"");
}

#[test]
fn json_decoding() {
    assert_eq!(
        json::parse("[1, 2.5, \"x\", false, null, [[]]]").unwrap(),
        Value::array(vec![
            1.0.into(),
            2.5.into(),
            "x".into(),
            false.into(),
            Value::Void,
            Value::array(vec![Value::array(vec![])]),
        ])
    );
}

#[test]
fn json_errors() {
    let err = json::parse("[1, 2").unwrap_err();
    assert_eq!(err.code(), ErrorCode::E6001);
    let err = json::parse("{\"a\": 1}").unwrap_err();
    assert_eq!(err.code(), ErrorCode::E6001);

    let items = crate::ArrayRef::new(vec![]);
    items.borrow_mut().push(Value::Array(items.clone()));
    let err = json::stringify(&Value::Array(items.clone())).unwrap_err();
    assert_eq!(err.code(), ErrorCode::E6001);
    items.borrow_mut().clear();
}

fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        (-1.0e9f64..1.0e9).prop_map(Value::Number),
        any::<i32>().prop_map(|n| Value::Number(f64::from(n))),
        "[ -~]{0,12}".prop_map(Value::Str),
        any::<bool>().prop_map(Value::Bool),
    ];
    leaf.prop_recursive(3, 24, 6, |inner| {
        prop::collection::vec(inner, 0..6).prop_map(Value::array)
    })
}

proptest! {
    #[test]
    fn json_round_trips(value in json_value()) {
        let text = json::stringify(&value).unwrap();
        let back = json::parse(&text).unwrap();
        prop_assert!(back.strict_eq(&value), "{} -> {:?}", text, back);
    }
}
