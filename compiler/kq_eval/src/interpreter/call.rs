//! User function calls.
//!
//! Each call gets a fresh frame holding its parameters. The frame is
//! pushed after the arguments are evaluated in the caller's scope, and
//! popped by the scope guard however the body exits.

use kq_ir::{Expr, RESERVED_ALL};
use tracing::debug;

use super::{Flow, Interpreter};
use crate::errors::{arity_mismatch, reserved_name, undefined_function, EvalResult};
use crate::{Mutability, Scope, Value};

impl Interpreter {
    pub(crate) fn call_function(&mut self, name: &str, args: &[Expr]) -> EvalResult {
        let decl = self
            .env
            .function(name)
            .ok_or_else(|| undefined_function(name))?;
        if args.len() > decl.params.len() {
            return Err(arity_mismatch(name, decl.params.len(), args.len()));
        }

        let values = args
            .iter()
            .map(|arg| self.eval(arg))
            .collect::<EvalResult<Vec<_>>>()?;

        // Parameters without an argument are bound to Void.
        let mut frame = Scope::new();
        let mut values = values.into_iter();
        for param in &decl.params {
            if param == RESERVED_ALL {
                return Err(reserved_name("parameter"));
            }
            let value = values.next().unwrap_or(Value::Void);
            frame.define(param.clone(), value, Mutability::Mutable);
        }

        debug!(
            function = name,
            args = args.len(),
            depth = self.env.depth() + 1,
            "call"
        );
        let flow = self.with_frame(frame, |this| this.exec_block(&decl.body))?;
        Ok(match flow {
            Flow::Return(value) => value,
            Flow::Normal => Value::Void,
        })
    }
}
