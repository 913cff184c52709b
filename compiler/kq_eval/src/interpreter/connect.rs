//! `connect` and `read`: the two operations that touch the filesystem.

use std::path::PathBuf;

use kq_ir::{Expr, Span};
use tracing::debug;

use super::Interpreter;
use crate::errors::{circular_connect, file_unreadable, not_kq_file, type_mismatch, EvalResult};
use crate::Value;

impl Interpreter {
    /// Interpret another `.kq` file in the current environment.
    ///
    /// Errors raised inside the connected file keep their own spans and
    /// record the file as their origin.
    pub(crate) fn connect(&mut self, path: &str, span: Span) -> EvalResult<()> {
        if !path.ends_with(".kq") {
            return Err(not_kq_file(path).with_span(span));
        }
        let resolved = self.resolve(path);
        if self.include_stack.contains(&resolved) {
            return Err(circular_connect(path).with_span(span));
        }
        let source = self
            .fs
            .read_file(&resolved)
            .map_err(|e| file_unreadable(path, e).with_span(span))?;

        let origin = resolved.display().to_string();
        debug!(path = %origin, depth = self.include_stack.len(), "connect");
        self.with_include(resolved, |this| -> EvalResult<()> {
            let stmts = kq_parse::parse(&source)?;
            this.interpret(&stmts)
        })
        .map_err(|e| {
            e.with_origin(origin)
                .with_note(format!("while connecting `{path}`"))
        })
    }

    /// `read path`: the file's contents as a String.
    pub(crate) fn read(&mut self, path: &Expr) -> EvalResult {
        let path = match self.eval(path)? {
            Value::Str(path) => path,
            other => return Err(type_mismatch("`read`", "a string path", other.type_name())),
        };
        let resolved = self.resolve(&path);
        debug!(path = %resolved.display(), "read");
        self.fs
            .read_file(&resolved)
            .map(Value::Str)
            .map_err(|e| file_unreadable(&path, e))
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.fs.resolve_path(&self.current_dir(), path)
    }
}
