//! Command handlers for the `kq` CLI.
//!
//! Each submodule implements one command. Shared utilities for reading
//! source files and rendering diagnostics live here.

use std::io::{self, IsTerminal, Write};

use kq_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use kq_diagnostic::Diagnostic;
use kq_eval::EvalError;

mod debug;
mod run;

pub use debug::{lex_file, parse_file};
pub use run::{run_file, run_repl};

/// Read a source file, turning I/O failures into a one-line message.
pub fn read_file(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    })
}

/// Render one diagnostic, with a source snippet when `source` is known.
pub fn render_diagnostic<W: Write>(
    writer: W,
    is_tty: bool,
    color: ColorMode,
    diagnostic: &Diagnostic,
    source: Option<&str>,
    path: &str,
) {
    let mut emitter = TerminalEmitter::with_color_mode(writer, color, is_tty).with_file_path(path);
    if let Some(source) = source {
        emitter = emitter.with_source(source);
    }
    emitter.emit(diagnostic);
    emitter.flush();
}

/// Render a runtime error. Errors raised inside a connected file are shown
/// against that file's text.
pub fn render_eval_error<W: Write>(
    writer: W,
    is_tty: bool,
    color: ColorMode,
    err: &EvalError,
    source: &str,
    path: &str,
) {
    let diagnostic = err.to_diagnostic();
    match &err.origin {
        Some(origin) => {
            let origin_source = std::fs::read_to_string(origin).ok();
            render_diagnostic(
                writer,
                is_tty,
                color,
                &diagnostic,
                origin_source.as_deref(),
                origin,
            );
        }
        None => render_diagnostic(writer, is_tty, color, &diagnostic, Some(source), path),
    }
}

/// [`render_eval_error`] to stderr.
pub(crate) fn report_eval_error(color: ColorMode, err: &EvalError, source: &str, path: &str) {
    let is_tty = io::stderr().is_terminal();
    render_eval_error(io::stderr(), is_tty, color, err, source, path);
}

/// [`render_diagnostic`] to stderr.
pub(crate) fn report_diagnostic(color: ColorMode, diagnostic: &Diagnostic, source: &str, path: &str) {
    let is_tty = io::stderr().is_terminal();
    render_diagnostic(io::stderr(), is_tty, color, diagnostic, Some(source), path);
}
