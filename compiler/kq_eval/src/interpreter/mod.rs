//! Tree-walking interpreter for KorvaqScrip.
//!
//! Statements run in source order against one [`Environment`]. Execution of
//! a block yields a [`Flow`]; a `return` inside a function body unwinds to
//! the enclosing call as [`Flow::Return`].
//!
//! - `exec` - statements, loops, `async`
//! - `expr` - expressions and array operations
//! - `call` - user function calls
//! - `connect` - `connect` and `read`, which go through the [`FileSystem`]

mod builder;
mod call;
mod connect;
mod exec;
mod expr;
mod scope_guard;

pub use builder::InterpreterBuilder;
pub use scope_guard::ScopedInterpreter;

use std::path::{Path, PathBuf};

use kq_ir::Stmt;

use crate::filesystem::FileSystem;
use crate::print_handler::SharedPrintHandler;
use crate::{Environment, EvalResult, Value};

/// How a block finished.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Flow {
    Normal,
    Return(Value),
}

pub struct Interpreter {
    pub(crate) env: Environment,
    print: SharedPrintHandler,
    fs: Box<dyn FileSystem>,
    base_dir: Option<PathBuf>,
    /// Files currently being interpreted, outermost first.
    include_stack: Vec<PathBuf>,
}

impl Interpreter {
    /// Interpreter writing to stdout/stderr and reading the real filesystem.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print
    }

    /// Parse and run a whole program.
    ///
    /// `origin` names the file the source came from. It anchors relative
    /// `connect` and `read` paths and lets a file that connects itself be
    /// reported as circular.
    ///
    /// Bindings made before a failure stay in the environment, so a REPL
    /// can keep going with the same interpreter.
    pub fn run_source(&mut self, source: &str, origin: Option<&Path>) -> EvalResult<()> {
        let stmts = kq_parse::parse(source)?;
        match origin {
            Some(path) => {
                let resolved = self
                    .fs
                    .resolve_path(&self.current_dir(), &path.to_string_lossy());
                self.with_include(resolved, |this| this.interpret(&stmts))
            }
            None => self.interpret(&stmts),
        }
    }

    /// Run already-parsed statements at the current scope.
    pub fn interpret(&mut self, stmts: &[Stmt]) -> EvalResult<()> {
        // `return` outside a function is rejected by the parser.
        self.exec_block(stmts).map(|_| ())
    }

    /// Directory relative paths resolve against: the directory of the file
    /// being interpreted, else the configured base directory.
    fn current_dir(&self) -> PathBuf {
        self.include_stack
            .last()
            .and_then(|file| file.parent())
            .map(Path::to_path_buf)
            .or_else(|| self.base_dir.clone())
            .unwrap_or_else(|| self.fs.working_dir())
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
