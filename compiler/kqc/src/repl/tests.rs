#![allow(clippy::unwrap_used)]

use kq_eval::{buffer_handler, Channel, InterpreterBuilder, SharedPrintHandler, Value};
use pretty_assertions::assert_eq;

use super::*;

fn repl() -> (Repl, SharedPrintHandler) {
    let handler = buffer_handler();
    let interpreter = InterpreterBuilder::new()
        .print_handler(handler.clone())
        .build();
    (Repl::new(interpreter, ColorMode::Never), handler)
}

fn session(input: &str) -> (Repl, SharedPrintHandler, String, String) {
    let (mut repl, handler) = repl();
    let mut out = Vec::new();
    let mut err = Vec::new();
    repl.run(input.as_bytes(), &mut out, &mut err, false).unwrap();
    (
        repl,
        handler,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn state_survives_errors() {
    let (repl, handler, _, err) = session("let x = 2\nshow nope\nshow x * 3\n");
    assert_eq!(handler.lines(Channel::Info), vec!["6"]);
    assert!(err.starts_with("error[E2001]: undefined variable `nope`"), "{err}");
    assert!(err.contains("--> <repl>:1:6"), "{err}");
    assert_eq!(repl.interpreter().env().lookup("x"), Some(&Value::Number(2.0)));
}

#[test]
fn multi_line_blocks() {
    let (_, handler, _, err) = session("func double(n) {\n  return n * 2\n}\nshow double(21)\n");
    assert_eq!(err, "");
    assert_eq!(handler.lines(Channel::Info), vec!["42"]);
}

#[test]
fn exit_stops_reading() {
    let (_, handler, _, _) = session("show 1\n.exit\nshow 2\n");
    assert_eq!(handler.lines(Channel::Info), vec!["1"]);
}

#[test]
fn help_and_unknown_commands() {
    let (_, _, out, err) = session(".help\n.bogus\n");
    assert!(out.contains(".exit"));
    assert_eq!(err, "unknown command `.bogus` (try .help)\n");
}

#[test]
fn unclosed_block_at_end_of_input_is_reported() {
    let (_, _, _, err) = session("if (true) {\n  show 1\n");
    assert!(err.starts_with("error[E1002]"), "{err}");
}

#[test]
fn prompts() {
    let (mut repl, _) = repl();
    let mut out = Vec::new();
    let mut err = Vec::new();
    assert_eq!(repl.prompt(), "kq> ");
    let step = repl.feed("while (false) {", &mut out, &mut err).unwrap();
    assert_eq!(step, ReplStep::Incomplete);
    assert_eq!(repl.prompt(), "...> ");
    let step = repl.feed("}", &mut out, &mut err).unwrap();
    assert_eq!(step, ReplStep::Done);
    assert_eq!(repl.prompt(), "kq> ");
}

#[test]
fn brace_counting_ignores_strings_and_comments() {
    assert_eq!(open_braces("if (x) {"), 1);
    assert_eq!(open_braces("show \"{\""), 0);
    assert_eq!(open_braces("show '}' // {"), 0);
    assert_eq!(open_braces("func f() { if (a) { }"), 1);
    assert_eq!(open_braces("}"), -1);
}
