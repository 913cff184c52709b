//! Line-oriented REPL.
//!
//! Each complete input is run with [`Interpreter::run_source`] against one
//! long-lived interpreter, so bindings and functions survive across lines
//! and across errors. A line that leaves a `{` open is buffered until the
//! braces balance.

use std::io::{self, BufRead, Write};

use kq_diagnostic::emitter::ColorMode;
use kq_eval::Interpreter;

use crate::commands::render_eval_error;

const HELP: &str = "\
Commands:
  .help    Show this message
  .exit    Leave the REPL

Enter statements to run them. A line ending inside `{ ... }` continues
on the next line.
";

const PROMPT: &str = "kq> ";
const CONTINUATION_PROMPT: &str = "...> ";

/// What the REPL did with one line of input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplStep {
    /// The input was complete and has been handled.
    Done,
    /// A block is still open; more lines are needed.
    Incomplete,
    Exit,
}

pub struct Repl {
    interpreter: Interpreter,
    pending: String,
    color: ColorMode,
    is_tty: bool,
}

impl Repl {
    pub fn new(interpreter: Interpreter, color: ColorMode) -> Self {
        Repl {
            interpreter,
            pending: String::new(),
            color,
            is_tty: false,
        }
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    pub fn prompt(&self) -> &'static str {
        if self.pending.is_empty() {
            PROMPT
        } else {
            CONTINUATION_PROMPT
        }
    }

    /// Handle one line. Errors are rendered to `err`; the session goes on.
    pub fn feed<O: Write, E: Write>(
        &mut self,
        line: &str,
        out: &mut O,
        err: &mut E,
    ) -> io::Result<ReplStep> {
        if self.pending.is_empty() {
            match line.trim() {
                "" => return Ok(ReplStep::Done),
                ".exit" | ".quit" => return Ok(ReplStep::Exit),
                ".help" => {
                    out.write_all(HELP.as_bytes())?;
                    return Ok(ReplStep::Done);
                }
                command if command.starts_with('.') => {
                    writeln!(err, "unknown command `{command}` (try .help)")?;
                    return Ok(ReplStep::Done);
                }
                _ => {}
            }
        }

        self.pending.push_str(line);
        self.pending.push('\n');
        if open_braces(&self.pending) > 0 {
            return Ok(ReplStep::Incomplete);
        }

        let source = std::mem::take(&mut self.pending);
        if let Err(e) = self.interpreter.run_source(&source, None) {
            render_eval_error(&mut *err, self.is_tty, self.color, &e, &source, "<repl>");
        }
        Ok(ReplStep::Done)
    }

    /// Read lines until end of input or `.exit`.
    pub fn run<R: BufRead, O: Write, E: Write>(
        &mut self,
        input: R,
        mut out: O,
        mut err: E,
        interactive: bool,
    ) -> io::Result<()> {
        self.is_tty = interactive;
        let mut lines = input.lines();
        loop {
            if interactive {
                write!(out, "{}", self.prompt())?;
                out.flush()?;
            }
            let Some(line) = lines.next() else {
                break;
            };
            if self.feed(&line?, &mut out, &mut err)? == ReplStep::Exit {
                break;
            }
        }
        // Input ended inside an open block: run what we have so the user
        // sees the syntax error.
        if !self.pending.is_empty() {
            let source = std::mem::take(&mut self.pending);
            if let Err(e) = self.interpreter.run_source(&source, None) {
                render_eval_error(&mut err, self.is_tty, self.color, &e, &source, "<repl>");
            }
        }
        Ok(())
    }
}

/// Net count of `{` over `}`, ignoring string literals and comments.
pub fn open_braces(source: &str) -> i32 {
    let mut depth = 0;
    let mut quote: Option<char> = None;
    let mut chars = source.chars().peekable();
    while let Some(c) = chars.next() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None => match c {
                '"' | '\'' | '`' => quote = Some(c),
                '{' => depth += 1,
                '}' => depth -= 1,
                '/' if chars.peek() == Some(&'/') => {
                    for c in chars.by_ref() {
                        if c == '\n' {
                            break;
                        }
                    }
                }
                _ => {}
            },
        }
    }
    depth
}

#[cfg(test)]
mod tests;
