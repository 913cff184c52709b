//! Tree-walking evaluator for KorvaqScrip.
//!
//! # Architecture
//!
//! - [`Value`]: runtime values; arrays are shared, mutable references
//! - [`Environment`]: globals, a stack of call frames, and functions
//! - `evaluate_binary` / `evaluate_unary`: enum-based operator dispatch
//! - `builtins`: math, text and JSON helpers
//! - [`Interpreter`]: statement execution over the AST from `kq_parse`
//!
//! Output goes through a [`SharedPrintHandler`] and file access through a
//! [`FileSystem`], so hosts and tests can capture both.

mod builtins;
mod environment;
pub mod errors;
mod filesystem;
pub mod interpreter;
mod operators;
mod print_handler;
mod value;

pub use environment::{BindingError, Environment, Mutability, Scope};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use filesystem::{normalize, FileSystem, MemoryFileSystem, OsFileSystem};
pub use interpreter::{Interpreter, InterpreterBuilder, ScopedInterpreter};
pub use print_handler::{
    buffer_handler, stdout_handler, BufferPrintHandler, Channel, OutputEvent, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use value::{format_number, ArrayRef, Value};

/// Everything a program printed, and the error that stopped it, if any.
#[derive(Debug)]
pub struct RunOutcome {
    pub events: Vec<OutputEvent>,
    pub error: Option<EvalError>,
}

impl RunOutcome {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Text of every event on `channel`, in order.
    pub fn lines(&self, channel: Channel) -> Vec<&str> {
        self.events
            .iter()
            .filter(|event| event.channel == channel)
            .map(|event| event.text.as_str())
            .collect()
    }
}

/// Run a program in a fresh interpreter, capturing its output.
///
/// Relative `connect`/`read` paths resolve against the working directory.
pub fn run(source: &str) -> RunOutcome {
    let handler = buffer_handler();
    let mut interpreter = InterpreterBuilder::new()
        .print_handler(handler.clone())
        .build();
    let error = interpreter.run_source(source, None).err();
    RunOutcome {
        events: handler.take_events(),
        error,
    }
}
