//! Bindings and function definitions.
//!
//! One global [`Scope`] plus a stack of call frames. Each function call
//! pushes a fresh frame, so parameters and locals never leak between calls
//! or between levels of recursion. Name lookup checks the innermost frame,
//! then the globals.

use std::rc::Rc;

use kq_ir::{FuncDecl, RESERVED_ALL};
use rustc_hash::FxHashMap;

use crate::Value;

/// Whether a binding can be reassigned or deleted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mutability {
    /// `let`
    Mutable,
    /// `make`
    Immutable,
}

impl Mutability {
    #[inline]
    pub fn is_mutable(self) -> bool {
        matches!(self, Mutability::Mutable)
    }
}

/// Why a binding operation was refused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BindingError {
    /// The name (or, for bulk deletes, this particular name) is immutable.
    Immutable(String),
    /// No scope holds the name.
    Undefined,
    /// The name is `all`.
    Reserved,
}

#[derive(Clone, Debug)]
struct Binding {
    value: Value,
    mutability: Mutability,
}

/// A single name-to-binding map: the globals, or one call frame.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    bindings: FxHashMap<String, Binding>,
}

impl Scope {
    pub fn new() -> Self {
        Scope::default()
    }

    #[inline]
    pub fn define(&mut self, name: String, value: Value, mutability: Mutability) {
        self.bindings.insert(name, Binding { value, mutability });
    }

    #[inline]
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name).map(|binding| &binding.value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    fn is_immutable(&self, name: &str) -> bool {
        self.bindings
            .get(name)
            .is_some_and(|binding| !binding.mutability.is_mutable())
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    fn remove(&mut self, name: &str) -> Result<(), BindingError> {
        match self.bindings.get(name) {
            None => Err(BindingError::Undefined),
            Some(binding) if !binding.mutability.is_mutable() => {
                Err(BindingError::Immutable(name.to_string()))
            }
            Some(_) => {
                self.bindings.remove(name);
                Ok(())
            }
        }
    }

    /// Remove every binding, or nothing if any binding is immutable.
    fn clear(&mut self) -> Result<(), BindingError> {
        let immutable = self
            .bindings
            .iter()
            .filter(|(_, binding)| !binding.mutability.is_mutable())
            .map(|(name, _)| name)
            .min();
        if let Some(name) = immutable {
            return Err(BindingError::Immutable(name.clone()));
        }
        self.bindings.clear();
        Ok(())
    }
}

/// All interpreter state that programs can observe.
#[derive(Debug, Default)]
pub struct Environment {
    global: Scope,
    frames: Vec<Scope>,
    functions: FxHashMap<String, Rc<FuncDecl>>,
}

impl Environment {
    pub fn new() -> Self {
        Environment::default()
    }

    /// Number of active call frames.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn push_frame(&mut self, frame: Scope) {
        self.frames.push(frame);
    }

    pub fn pop_frame(&mut self) {
        self.frames.pop();
    }

    fn innermost(&self) -> &Scope {
        self.frames.last().unwrap_or(&self.global)
    }

    fn innermost_mut(&mut self) -> &mut Scope {
        self.frames.last_mut().unwrap_or(&mut self.global)
    }

    /// Whether the current call frame binds `name`. Always false at top level.
    pub fn frame_contains(&self, name: &str) -> bool {
        self.frames.last().is_some_and(|frame| frame.contains(name))
    }

    pub fn global(&self) -> &Scope {
        &self.global
    }

    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.frames
            .last()
            .and_then(|frame| frame.lookup(name))
            .or_else(|| self.global.lookup(name))
    }

    /// `let`/`make`: bind in the innermost scope.
    ///
    /// Refused when the name is `all`, or is immutable in the innermost
    /// scope or in the globals.
    pub fn declare(
        &mut self,
        name: &str,
        value: Value,
        mutability: Mutability,
    ) -> Result<(), BindingError> {
        if name == RESERVED_ALL {
            return Err(BindingError::Reserved);
        }
        if self.innermost().is_immutable(name) || self.global.is_immutable(name) {
            return Err(BindingError::Immutable(name.to_string()));
        }
        self.innermost_mut()
            .define(name.to_string(), value, mutability);
        Ok(())
    }

    /// Check that `name = ...` would succeed, without changing anything.
    pub fn check_assignable(&self, name: &str) -> Result<(), BindingError> {
        let scope = match self.frames.last() {
            Some(frame) if frame.contains(name) => frame,
            _ if self.global.contains(name) => &self.global,
            _ => return Err(BindingError::Undefined),
        };
        if scope.is_immutable(name) {
            return Err(BindingError::Immutable(name.to_string()));
        }
        Ok(())
    }

    /// `name = value`: rebind in the innermost scope that holds the name.
    pub fn assign(&mut self, name: &str, value: Value) -> Result<(), BindingError> {
        self.check_assignable(name)?;
        let scope = match self.frames.last_mut() {
            Some(frame) if frame.contains(name) => frame,
            _ => &mut self.global,
        };
        if let Some(binding) = scope.bindings.get_mut(name) {
            binding.value = value;
        }
        Ok(())
    }

    /// Bind a global unconditionally unless it is immutable. Used for
    /// `loop` counters.
    pub fn set_global(&mut self, name: &str, value: Value) -> Result<(), BindingError> {
        if self.global.is_immutable(name) {
            return Err(BindingError::Immutable(name.to_string()));
        }
        self.global
            .define(name.to_string(), value, Mutability::Mutable);
        Ok(())
    }

    /// Remove a global without any checks.
    pub fn unset_global(&mut self, name: &str) {
        self.global.bindings.remove(name);
    }

    /// `delvar name` removes the binding from the innermost scope that
    /// holds it, like assignment. `delvar all` clears the innermost scope.
    pub fn delete_var(&mut self, name: &str) -> Result<(), BindingError> {
        if name == RESERVED_ALL {
            return self.innermost_mut().clear();
        }
        match self.frames.last_mut() {
            Some(frame) if frame.contains(name) => frame.remove(name),
            _ => self.global.remove(name),
        }
    }

    pub fn define_function(&mut self, decl: Rc<FuncDecl>) -> Result<(), BindingError> {
        if decl.name == RESERVED_ALL {
            return Err(BindingError::Reserved);
        }
        self.functions.insert(decl.name.clone(), decl);
        Ok(())
    }

    pub fn function(&self, name: &str) -> Option<Rc<FuncDecl>> {
        self.functions.get(name).cloned()
    }

    /// `delfunc name` / `delfunc all`.
    pub fn delete_function(&mut self, name: &str) -> Result<(), BindingError> {
        if name == RESERVED_ALL {
            self.functions.clear();
            return Ok(());
        }
        self.functions
            .remove(name)
            .map(|_| ())
            .ok_or(BindingError::Undefined)
    }

    pub fn function_count(&self) -> usize {
        self.functions.len()
    }
}
