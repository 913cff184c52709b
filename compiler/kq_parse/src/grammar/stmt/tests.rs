#![allow(clippy::unwrap_used)]

use kq_ir::{ExprKind, PrintKind, Stmt, StmtKind};
use pretty_assertions::assert_eq;

use crate::{parse, ParseErrorKind};

fn single(source: &str) -> StmtKind {
    let mut stmts = parse(source).unwrap();
    assert_eq!(stmts.len(), 1, "expected one statement for {source:?}");
    stmts.remove(0).kind
}

fn kinds(stmts: &[Stmt]) -> Vec<&'static str> {
    stmts
        .iter()
        .map(|stmt| match &stmt.kind {
            StmtKind::VarDecl { .. } => "decl",
            StmtKind::Assign { .. } => "assign",
            StmtKind::Print { .. } => "print",
            StmtKind::If { .. } => "if",
            StmtKind::Repeat { .. } => "loop",
            StmtKind::While { .. } => "while",
            StmtKind::FuncDecl(_) => "func",
            StmtKind::Return(_) => "return",
            StmtKind::DeleteVar(_) => "delvar",
            StmtKind::DeleteFunc(_) => "delfunc",
            StmtKind::Connect(_) => "connect",
            StmtKind::Async(_) => "async",
            StmtKind::Expr(_) => "expr",
        })
        .collect()
}

#[test]
fn let_and_make() {
    match single("let x = 1") {
        StmtKind::VarDecl {
            name, immutable, ..
        } => {
            assert_eq!(name, "x");
            assert!(!immutable);
        }
        other => panic!("{other:?}"),
    }
    assert!(matches!(
        single("make pi = 3.14"),
        StmtKind::VarDecl { immutable: true, .. }
    ));
}

#[test]
fn print_channels() {
    for (source, expected) in [
        ("show 1", PrintKind::Show),
        ("error 'bad'", PrintKind::Error),
        ("alert 'careful'", PrintKind::Alert),
    ] {
        match single(source) {
            StmtKind::Print { kind, .. } => assert_eq!(kind, expected),
            other => panic!("{other:?}"),
        }
    }
}

#[test]
fn if_else() {
    match single("if (x > 1) { show 1 } else { show 2; show 3 }") {
        StmtKind::If {
            then_block,
            else_block,
            ..
        } => {
            assert_eq!(then_block.len(), 1);
            assert_eq!(else_block.map(|b| b.len()), Some(2));
        }
        other => panic!("{other:?}"),
    }
}

#[test]
fn else_requires_a_block() {
    let err = parse("if (a) { show 1 } else if (b) { show 2 }").unwrap_err();
    assert_eq!(err.to_string(), "expected `{`, found `if`");
}

#[test]
fn counting_loop() {
    match single("loop (i, 1, n + 1) { show i }") {
        StmtKind::Repeat { var, end, body, .. } => {
            assert_eq!(var, "i");
            assert!(matches!(end.kind, ExprKind::Binary { .. }));
            assert_eq!(body.len(), 1);
        }
        other => panic!("{other:?}"),
    }
}

#[test]
fn while_loop() {
    assert!(matches!(
        single("while (n < 10) { n = n + 1 }"),
        StmtKind::While { .. }
    ));
}

#[test]
fn function_declaration() {
    match single("func add(a, b) { return a + b }") {
        StmtKind::FuncDecl(decl) => {
            assert_eq!(decl.name, "add");
            assert_eq!(decl.params, vec!["a".to_string(), "b".to_string()]);
            assert_eq!(kinds(&decl.body), vec!["return"]);
        }
        other => panic!("{other:?}"),
    }
    match single("func noop() { }") {
        StmtKind::FuncDecl(decl) => assert!(decl.params.is_empty() && decl.body.is_empty()),
        other => panic!("{other:?}"),
    }
}

#[test]
fn bare_return_before_closing_brace() {
    match single("func stop() { return }") {
        StmtKind::FuncDecl(decl) => {
            assert!(matches!(decl.body[0].kind, StmtKind::Return(None)));
        }
        other => panic!("{other:?}"),
    }
}

#[test]
fn bare_return_before_statement_keyword() {
    match single("func f(x) {\n  if (x) { return\n show 1 }\n return x\n}") {
        StmtKind::FuncDecl(decl) => {
            assert_eq!(kinds(&decl.body), vec!["if", "return"]);
            match &decl.body[0].kind {
                StmtKind::If { then_block, .. } => {
                    assert_eq!(kinds(then_block), vec!["return", "print"]);
                    assert!(matches!(then_block[0].kind, StmtKind::Return(None)));
                }
                other => panic!("{other:?}"),
            }
            assert!(matches!(decl.body[1].kind, StmtKind::Return(Some(_))));
        }
        other => panic!("{other:?}"),
    }
}

#[test]
fn return_nested_in_blocks() {
    let stmts = parse("func f(x) { if (x > 0) { return 1 } return -1 }").unwrap();
    assert_eq!(kinds(&stmts), vec!["func"]);
}

#[test]
fn return_outside_function() {
    let err = parse("show 1\nreturn 2").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::ReturnOutsideFunction);
    assert_eq!(err.span.start, 7);

    // Leaving a function body restores the check.
    assert!(parse("func f() { return 1 }\nreturn 2").is_err());
}

#[test]
fn identifier_statements() {
    let stmts = parse("count = 2\nlog(count)\nitems[0]").unwrap();
    assert_eq!(kinds(&stmts), vec!["assign", "expr", "expr"]);
}

#[test]
fn bare_identifier_is_rejected() {
    let err = parse("count").unwrap_err();
    assert_eq!(
        err.to_string(),
        "unexpected end of input, expected `(`, `[` or `=` after identifier"
    );
    let err = parse("count + 1").unwrap_err();
    assert!(matches!(err.kind, ParseErrorKind::UnexpectedToken { .. }));
}

#[test]
fn deletion_and_connect() {
    let stmts = parse("delvar x\ndelvar all\ndelfunc all\nconnect 'lib.kq'").unwrap();
    assert_eq!(kinds(&stmts), vec!["delvar", "delvar", "delfunc", "connect"]);
    assert!(matches!(&stmts[3].kind, StmtKind::Connect(path) if path == "lib.kq"));
}

#[test]
fn connect_needs_string_literal() {
    let err = parse("connect lib").unwrap_err();
    assert_eq!(err.to_string(), "expected string path, found identifier `lib`");
}

#[test]
fn async_block() {
    match single("async { show 1; show 2 }") {
        StmtKind::Async(body) => assert_eq!(body.len(), 2),
        other => panic!("{other:?}"),
    }
}

#[test]
fn value_forms_as_statements() {
    let stmts = parse("arradd list 1\narrdel list 0\ntojson list").unwrap();
    assert_eq!(kinds(&stmts), vec!["expr", "expr", "expr"]);
}

#[test]
fn unclosed_block() {
    let err = parse("while (true) { show 1").unwrap_err();
    assert_eq!(err.to_string(), "unexpected end of input, expected `}`");
}

#[test]
fn stray_closing_brace() {
    let err = parse("show 1 }").unwrap_err();
    assert_eq!(err.to_string(), "expected statement, found `}`");
}
