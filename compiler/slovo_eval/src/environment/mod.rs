//! Lexical environments.
//!
//! An [`Environment`] is a handle to one frame of bindings plus a link to
//! the frame enclosing it. Handles are cheap to clone and every clone sees
//! the same bindings, so a closure that captured a frame observes later
//! writes to it. The program has one root frame; each user-function call
//! adds a frame enclosing the function's defining environment, and each
//! `если`/`цикл` block adds a frame enclosing the current one.
//!
//! Frames are `Rc<RefCell<_>>` and therefore `!Send`: one environment can
//! never be shared across threads.

use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use slovo_ir::TypeTag;

use crate::Value;

/// Single-threaded shared cell holding one frame.
///
/// All frame allocations go through [`LocalScope::new`].
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }

    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Why a declaration was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeclareError {
    /// The name is already bound in this very frame.
    AlreadyDefined,
}

/// Why an assignment was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignError {
    /// The binding was declared with a type the new value does not have.
    TypeMismatch { declared: TypeTag },
}

/// One frame of bindings.
pub struct Scope {
    bindings: FxHashMap<String, Binding>,
    parent: Option<LocalScope<Scope>>,
}

struct Binding {
    value: Value,
    /// Set for names introduced by a declaration; assignments must keep it.
    declared: Option<TypeTag>,
}

impl Scope {
    pub fn new() -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: None,
        }
    }

    pub fn with_parent(parent: LocalScope<Scope>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    #[inline]
    fn define(&mut self, name: &str, value: Value, declared: Option<TypeTag>) {
        self.bindings
            .insert(name.to_string(), Binding { value, declared });
    }

    fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(binding) = self.bindings.get(name) {
            return Some(binding.value.clone());
        }
        self.parent.as_ref()?.borrow().lookup(name)
    }

    /// Rebind `name` in the nearest frame holding it. `Ok(false)` when no
    /// frame does.
    fn assign(&mut self, name: &str, value: Value) -> Result<bool, AssignError> {
        if let Some(binding) = self.bindings.get_mut(name) {
            if let Some(declared) = binding.declared {
                if !value.has_type(declared) {
                    return Err(AssignError::TypeMismatch { declared });
                }
            }
            binding.value = value;
            return Ok(true);
        }
        match &self.parent {
            Some(parent) => parent.borrow_mut().assign(name, value),
            None => Ok(false),
        }
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to a frame and, through it, the whole enclosing chain.
#[derive(Clone)]
pub struct Environment {
    scope: LocalScope<Scope>,
}

impl Environment {
    /// A fresh root frame.
    pub fn new() -> Self {
        Environment {
            scope: LocalScope::new(Scope::new()),
        }
    }

    /// A new empty frame enclosing `parent`.
    #[must_use]
    pub fn enclosed(parent: &Environment) -> Self {
        Environment {
            scope: LocalScope::new(Scope::with_parent(parent.scope.clone())),
        }
    }

    /// Look `name` up, innermost frame first.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.scope.borrow().lookup(name)
    }

    /// Whether `name` is bound in this frame, ignoring enclosing ones.
    pub fn is_defined_here(&self, name: &str) -> bool {
        self.scope.borrow().bindings.contains_key(name)
    }

    /// Bind a declared name in this frame.
    ///
    /// The caller has already checked `value` against `declared`.
    pub fn declare(&self, name: &str, value: Value, declared: TypeTag) -> Result<(), DeclareError> {
        if self.is_defined_here(name) {
            return Err(DeclareError::AlreadyDefined);
        }
        self.scope.borrow_mut().define(name, value, Some(declared));
        Ok(())
    }

    /// Bind `name` in this frame without a declared type, replacing any
    /// existing binding here. Used for call parameters.
    pub fn define(&self, name: &str, value: Value) {
        self.scope.borrow_mut().define(name, value, None);
    }

    /// Rebind `name` in the nearest frame that holds it, or create it in
    /// this frame when no frame does.
    pub fn assign(&self, name: &str, value: Value) -> Result<(), AssignError> {
        let mut scope = self.scope.borrow_mut();
        if scope.assign(name, value.clone())? {
            return Ok(());
        }
        scope.define(name, value, None);
        Ok(())
    }

    /// Whether both handles refer to the same frame.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        LocalScope::ptr_eq(&a.scope, &b.scope)
    }

    /// Number of frames from this one to the root, inclusive.
    pub fn depth(&self) -> usize {
        let mut depth = 1_usize;
        let mut parent = self.scope.borrow().parent.clone();
        while let Some(scope) = parent {
            depth = depth.saturating_add(1);
            parent = scope.borrow().parent.clone();
        }
        depth
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = self.scope.borrow();
        let mut names: Vec<&str> = scope.bindings.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Environment")
            .field("names", &names)
            .field("depth", &self.depth())
            .finish()
    }
}

#[cfg(test)]
mod tests;
