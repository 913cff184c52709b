#![allow(clippy::unwrap_used)]

use kq_ir::{Expr, ExprKind, StmtKind};
use pretty_assertions::assert_eq;

use crate::{parse, ParseErrorKind};

/// Parse `source` as the operand of `show` and return its shape.
fn shape(source: &str) -> String {
    let stmts = parse(&format!("show {source}")).unwrap();
    assert_eq!(stmts.len(), 1, "expected one statement for {source:?}");
    match &stmts[0].kind {
        StmtKind::Print { value, .. } => sexpr(value),
        other => panic!("expected print, got {other:?}"),
    }
}

fn sexpr(expr: &Expr) -> String {
    match &expr.kind {
        ExprKind::Number(n) => n.to_string(),
        ExprKind::Str(s) => format!("{s:?}"),
        ExprKind::Bool(b) => b.to_string(),
        ExprKind::Void => "void".to_string(),
        ExprKind::Ident(name) => name.clone(),
        ExprKind::Array(items) => {
            let items: Vec<_> = items.iter().map(sexpr).collect();
            format!("[{}]", items.join(" "))
        }
        ExprKind::Binary { op, left, right } => {
            format!("({op} {} {})", sexpr(left), sexpr(right))
        }
        ExprKind::Unary { op, operand } => format!("({op} {})", sexpr(operand)),
        ExprKind::Call { name, args } => {
            let args: Vec<_> = args.iter().map(sexpr).collect();
            format!("(call {name} {})", args.join(" "))
        }
        ExprKind::Index { array, index } => format!("(index {array} {})", sexpr(index)),
        ExprKind::Read(path) => format!("(read {})", sexpr(path)),
        ExprKind::ArrAdd { array, value } => format!("(arradd {array} {})", sexpr(value)),
        ExprKind::ArrDel { array, value } => format!("(arrdel {array} {})", sexpr(value)),
        ExprKind::ArrSize(array) => format!("(arrsize {array})"),
        ExprKind::ToJson(value) => format!("(tojson {})", sexpr(value)),
        ExprKind::ParJson(value) => format!("(parjson {})", sexpr(value)),
        ExprKind::Math { func, arg } => format!("({} {})", func.keyword(), sexpr(arg)),
        ExprKind::Text { func, arg } => format!("({} {})", func.keyword(), sexpr(arg)),
    }
}

#[test]
fn literals() {
    assert_eq!(shape("42"), "42");
    assert_eq!(shape("'hi'"), "\"hi\"");
    assert_eq!(shape("false"), "false");
    assert_eq!(shape("void"), "void");
}

#[test]
fn binary_operators_share_one_level() {
    assert_eq!(shape("1 + 2 * 3"), "(* (+ 1 2) 3)");
    assert_eq!(shape("a == b && c"), "(&& (== a b) c)");
    assert_eq!(shape("2 ** 3 ^ 1"), "(^ (** 2 3) 1)");
}

#[test]
fn parentheses_group() {
    assert_eq!(shape("1 + (2 * 3)"), "(+ 1 (* 2 3))");
}

#[test]
fn unary_binds_tighter_than_binary() {
    assert_eq!(shape("-1 + 2"), "(+ (- 1) 2)");
    assert_eq!(shape("!a && b"), "(&& (! a) b)");
    assert_eq!(shape("!!done"), "(! (! done))");
    assert_eq!(shape("x - -1"), "(- x (- 1))");
}

#[test]
fn calls_and_indexing() {
    assert_eq!(shape("add(1, 2 + 3)"), "(call add 1 (+ 2 3))");
    assert_eq!(shape("now()"), "(call now )");
    assert_eq!(shape("items[i + 1]"), "(index items (+ i 1))");
}

#[test]
fn array_literals() {
    assert_eq!(shape("[]"), "[]");
    assert_eq!(shape("[1, 'a', [true]]"), "[1 \"a\" [true]]");
}

#[test]
fn value_forms_take_greedy_operand() {
    assert_eq!(shape("floor 2.5 + 1"), "(floor (+ 2.5 1))");
    assert_eq!(shape("uppercase name"), "(uppercase name)");
    assert_eq!(shape("tojson [1, 2]"), "(tojson [1 2])");
    assert_eq!(shape("read 'notes.txt'"), "(read \"notes.txt\")");
}

#[test]
fn array_forms_name_their_target() {
    assert_eq!(shape("arradd list 5"), "(arradd list 5)");
    assert_eq!(shape("arrdel list 'x'"), "(arrdel list \"x\")");
    assert_eq!(shape("arrsize list + 1"), "(+ (arrsize list) 1)");
}

#[test]
fn value_forms_nest() {
    assert_eq!(
        shape("parjson tojson reverse 'abc'"),
        "(parjson (tojson (reverse \"abc\")))"
    );
}

#[test]
fn missing_operand() {
    let err = parse("show 1 +").unwrap_err();
    assert!(matches!(err.kind, ParseErrorKind::UnexpectedEof { .. }));
}

#[test]
fn unclosed_call() {
    let err = parse("show f(1, 2").unwrap_err();
    assert_eq!(err.to_string(), "unexpected end of input, expected `)`");
}

#[test]
fn deeply_nested_parentheses() {
    let depth = 5_000;
    let source = format!("show {}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(parse(&source).unwrap().len(), 1);
}
