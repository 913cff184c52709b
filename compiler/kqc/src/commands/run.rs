//! The `run` and `repl` commands.

use std::io::{self, IsTerminal};
use std::path::Path;
use std::process::ExitCode;

use kq_diagnostic::emitter::ColorMode;
use kq_eval::Interpreter;
use tracing::debug;

use super::{read_file, report_eval_error};
use crate::repl::Repl;

/// Run a `.kq` file. Output goes to stdout/stderr as the program runs; a
/// runtime error is rendered against the file and fails the process.
pub fn run_file(path: &str, color: ColorMode) -> ExitCode {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(msg) => {
            eprintln!("error: {msg}");
            return ExitCode::FAILURE;
        }
    };

    debug!(path, bytes = source.len(), "run");
    let mut interpreter = Interpreter::new();
    match interpreter.run_source(&source, Some(Path::new(path))) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_eval_error(color, &err, &source, path);
            ExitCode::FAILURE
        }
    }
}

/// Interactive session on stdin. Prompts are only printed on a terminal.
pub fn run_repl(color: ColorMode) -> ExitCode {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut repl = Repl::new(Interpreter::new(), color);
    if interactive {
        println!("KorvaqScrip {} (type .help for help)", env!("CARGO_PKG_VERSION"));
    }
    match repl.run(stdin.lock(), io::stdout(), io::stderr(), interactive) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
