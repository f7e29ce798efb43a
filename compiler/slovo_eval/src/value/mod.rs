//! Runtime values.
//!
//! Integers, booleans and null are plain data. Strings, arrays and closures
//! live behind a [`Heap`] handle whose constructor is private to this module,
//! so they are always built through the factories on [`Value`]:
//!
//! ```text
//! let s = Value::string("привет");
//! let a = Value::array(vec![Value::Int(1)]);
//! ```
//!
//! Arrays are the one mutable value. Their element vector sits in a
//! `RefCell`, and every copy of an array value shares it, so an in-place
//! change made through one alias is visible through all of them.

mod heap;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use slovo_ir::{Block, FunctionLiteral, Identifier, TypeTag};

pub use heap::Heap;

use crate::builtins::Builtin;
use crate::{Environment, EvalError};

/// A runtime value.
#[derive(Clone)]
pub enum Value {
    Int(i64),
    Str(Heap<String>),
    Bool(bool),
    Null,
    Array(Heap<RefCell<Vec<Value>>>),
    Function(Heap<FunctionValue>),
    Builtin(Builtin),
    /// A failed evaluation folded into a value at the top level.
    Error(EvalError),
}

impl Value {
    // Factories

    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    #[inline]
    pub fn array(elements: Vec<Value>) -> Self {
        Value::Array(Heap::new(RefCell::new(elements)))
    }

    /// Closure over `env`, the environment the literal was evaluated in.
    pub fn function(literal: Rc<FunctionLiteral>, env: Environment) -> Self {
        Value::Function(Heap::new(FunctionValue { literal, env }))
    }

    // Inspection

    /// Type name as it appears in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "число",
            Value::Str(_) => "строка",
            Value::Bool(_) => "булево",
            Value::Null => "ничего",
            Value::Array(_) => "массив",
            Value::Function(_) => "функция",
            Value::Builtin(_) => "встроенная функция",
            Value::Error(_) => "ошибка",
        }
    }

    /// Only `истина` is truthy.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        matches!(self, Value::Bool(true))
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Whether this value may be bound to a name declared with `tag`.
    pub fn has_type(&self, tag: TypeTag) -> bool {
        matches!(
            (tag, self),
            (TypeTag::Integer, Value::Int(_))
                | (TypeTag::String, Value::Str(_))
                | (TypeTag::Boolean, Value::Bool(_))
                | (TypeTag::Array, Value::Array(_))
                | (TypeTag::Function, Value::Function(_) | Value::Builtin(_))
        )
    }
}

/// A closure: the function literal plus the environment it captured.
pub struct FunctionValue {
    literal: Rc<FunctionLiteral>,
    env: Environment,
}

impl FunctionValue {
    pub fn parameters(&self) -> &[Identifier] {
        &self.literal.parameters
    }

    pub fn body(&self) -> &Block {
        &self.literal.body
    }

    /// The defining environment; each call's frame encloses it.
    pub fn env(&self) -> &Environment {
        &self.env
    }
}

impl fmt::Debug for FunctionValue {
    // The captured environment may contain this very function.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FunctionValue({})", self.literal)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display(self, f, &mut Vec::new())
    }
}

/// Display form. `open` holds the arrays currently being printed so that an
/// array reachable from itself prints as `[...]` instead of recursing forever.
fn display(
    value: &Value,
    f: &mut fmt::Formatter<'_>,
    open: &mut Vec<*const RefCell<Vec<Value>>>,
) -> fmt::Result {
    match value {
        Value::Int(n) => write!(f, "{n}"),
        Value::Str(s) => f.write_str(s),
        Value::Bool(b) => f.write_str(if *b { "истина" } else { "ложь" }),
        Value::Null => f.write_str("ничего"),
        Value::Array(items) => {
            let ptr = items.as_ptr();
            if open.contains(&ptr) {
                return f.write_str("[...]");
            }
            open.push(ptr);
            f.write_str("[")?;
            for (i, item) in items.borrow().iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                display(item, f, open)?;
            }
            open.pop();
            f.write_str("]")
        }
        Value::Function(func) => write!(f, "{}", func.literal),
        Value::Builtin(_) => f.write_str("встроенная функция"),
        Value::Error(err) => f.write_str(&err.message),
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{:?}", s.as_str()),
            Value::Builtin(b) => write!(f, "Builtin({})", b.name),
            Value::Error(err) => write!(f, "Error({:?})", err.message),
            other => write!(f, "{other}"),
        }
    }
}

/// Structural equality for host code and tests. The language's own `==`
/// compares arrays and functions by identity; see `operators`.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a.as_str() == b.as_str(),
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Array(a), Value::Array(b)) => Heap::ptr_eq(a, b) || *a.borrow() == *b.borrow(),
            (Value::Function(a), Value::Function(b)) => Heap::ptr_eq(a, b),
            (Value::Builtin(a), Value::Builtin(b)) => a.name == b.name,
            (Value::Error(a), Value::Error(b)) => a == b,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests;
