#![allow(clippy::unwrap_used)]

use kq_diagnostic::ErrorCode;
use kq_ir::{Span, StmtKind};
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn empty_program() {
    assert!(parse("").unwrap().is_empty());
    assert!(parse(" ;; // nothing here\n").unwrap().is_empty());
}

#[test]
fn statements_in_order() {
    let stmts = parse("let a = 1\nlet b = a + 1\nshow b").unwrap();
    assert_eq!(stmts.len(), 3);
    assert!(matches!(&stmts[2].kind, StmtKind::Print { .. }));
}

#[test]
fn statement_spans_cover_their_tokens() {
    let stmts = parse("let a = 1\nshow a + 22").unwrap();
    assert_eq!(stmts[0].span, Span::new(0, 9));
    assert_eq!(stmts[1].span, Span::new(10, 21));
}

#[test]
fn lexical_errors_pass_through() {
    let err = parse("let a = 1\nconst b = 2").unwrap_err();
    assert!(matches!(err.kind, ParseErrorKind::Lex(_)));
    assert_eq!(err.code(), ErrorCode::E0003);
    assert_eq!(err.span, Span::new(10, 15));
}

#[test]
fn lexical_error_in_first_token() {
    let err = Parser::new("#").err().unwrap();
    assert_eq!(err.code(), ErrorCode::E0001);
}

#[test]
fn error_codes() {
    assert_eq!(parse("let = 1").unwrap_err().code(), ErrorCode::E1001);
    assert_eq!(parse("let x =").unwrap_err().code(), ErrorCode::E1002);
    assert_eq!(parse("return 1").unwrap_err().code(), ErrorCode::E1003);
}

#[test]
fn diagnostics_carry_span_and_message() {
    let err = parse("show )").unwrap_err();
    let diag = err.to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E1001);
    assert_eq!(diag.message, "expected expression, found `)`");
    assert_eq!(diag.span, Some(Span::new(5, 6)));
}

#[test]
fn deeply_nested_blocks() {
    let depth = 2_000;
    let source = format!("{}show 1{}", "if (true) { ".repeat(depth), " }".repeat(depth));
    assert_eq!(parse(&source).unwrap().len(), 1);
}
