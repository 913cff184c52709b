//! RAII guards for interpreter state that must be restored on every exit
//! path: function frames and the `connect` include stack.
//!
//! The guard holds `&mut Interpreter` and derefs to it, so code inside the
//! scope uses the interpreter normally. Cleanup runs on drop, including
//! early returns through `?` and unwinding.

use std::ops::{Deref, DerefMut};
use std::path::PathBuf;

use super::Interpreter;
use crate::Scope;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Cleanup {
    PopFrame,
    PopInclude,
}

/// Guard that undoes one frame push or one include push when dropped.
pub struct ScopedInterpreter<'guard> {
    interpreter: &'guard mut Interpreter,
    cleanup: Cleanup,
}

impl Drop for ScopedInterpreter<'_> {
    fn drop(&mut self) {
        match self.cleanup {
            Cleanup::PopFrame => self.interpreter.env.pop_frame(),
            Cleanup::PopInclude => {
                self.interpreter.include_stack.pop();
            }
        }
    }
}

impl Deref for ScopedInterpreter<'_> {
    type Target = Interpreter;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl Interpreter {
    /// Push a function frame; it is popped when the guard drops.
    pub fn scoped(&mut self, frame: Scope) -> ScopedInterpreter<'_> {
        self.env.push_frame(frame);
        ScopedInterpreter {
            interpreter: self,
            cleanup: Cleanup::PopFrame,
        }
    }

    /// Run `f` with `frame` as the innermost scope.
    pub(crate) fn with_frame<T, F>(&mut self, frame: Scope, f: F) -> T
    where
        F: FnOnce(&mut Interpreter) -> T,
    {
        let mut scoped = self.scoped(frame);
        f(&mut *scoped)
    }

    /// Run `f` with `file` on top of the include stack.
    pub(crate) fn with_include<T, F>(&mut self, file: PathBuf, f: F) -> T
    where
        F: FnOnce(&mut Interpreter) -> T,
    {
        self.include_stack.push(file);
        let mut scoped = ScopedInterpreter {
            interpreter: self,
            cleanup: Cleanup::PopInclude,
        };
        f(&mut *scoped)
    }
}
