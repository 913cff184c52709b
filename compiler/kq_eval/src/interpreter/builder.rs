//! `InterpreterBuilder` for creating Interpreter instances.

use std::path::PathBuf;

use super::Interpreter;
use crate::filesystem::{FileSystem, OsFileSystem};
use crate::{stdout_handler, Environment, SharedPrintHandler};

/// Builder for [`Interpreter`].
///
/// Defaults: output to stdout/stderr, the real filesystem, a fresh
/// environment, and relative paths anchored at the working directory.
#[derive(Default)]
pub struct InterpreterBuilder {
    env: Option<Environment>,
    print_handler: Option<SharedPrintHandler>,
    file_system: Option<Box<dyn FileSystem>>,
    base_dir: Option<PathBuf>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing environment instead of an empty one.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    /// Where `show`, `error` and `alert` output goes.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Filesystem used by `connect` and `read`.
    #[must_use]
    pub fn file_system(mut self, fs: impl FileSystem + 'static) -> Self {
        self.file_system = Some(Box::new(fs));
        self
    }

    /// Directory for relative paths when no file is being interpreted.
    #[must_use]
    pub fn base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            env: self.env.unwrap_or_default(),
            print: self.print_handler.unwrap_or_else(stdout_handler),
            fs: self
                .file_system
                .unwrap_or_else(|| Box::new(OsFileSystem)),
            base_dir: self.base_dir,
            include_stack: Vec::new(),
        }
    }
}
