//! Debug commands: `lex` and `parse` for inspecting the front end.

use std::process::ExitCode;

use kq_diagnostic::emitter::ColorMode;
use kq_lexer::Lexer;

use super::{read_file, report_diagnostic};

/// Lex a file and print the token stream.
pub fn lex_file(path: &str, color: ColorMode) -> ExitCode {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(msg) => {
            eprintln!("error: {msg}");
            return ExitCode::FAILURE;
        }
    };

    let mut tokens = Vec::new();
    for token in Lexer::new(&source) {
        match token {
            Ok(token) => tokens.push(token),
            Err(err) => {
                report_diagnostic(color, &err.to_diagnostic(), &source, path);
                return ExitCode::FAILURE;
            }
        }
    }

    println!("Tokens for '{}' ({} tokens):", path, tokens.len());
    for token in &tokens {
        println!("  {:?} @ {}", token.kind, token.span);
    }
    ExitCode::SUCCESS
}

/// Parse a file and print its statements.
pub fn parse_file(path: &str, color: ColorMode) -> ExitCode {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(msg) => {
            eprintln!("error: {msg}");
            return ExitCode::FAILURE;
        }
    };

    match kq_parse::parse(&source) {
        Ok(stmts) => {
            println!("Parse result for '{path}': {} statements", stmts.len());
            for stmt in &stmts {
                println!("{stmt:#?}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            report_diagnostic(color, &err.to_diagnostic(), &source, path);
            ExitCode::FAILURE
        }
    }
}
