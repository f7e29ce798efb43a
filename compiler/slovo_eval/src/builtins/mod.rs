//! Builtin functions.
//!
//! Builtins are plain function pointers looked up by name after the
//! environment chain comes up empty, so a user binding with the same name
//! shadows them. Each one validates its own arguments and reports failures
//! as [`EvalError`]s.

use std::cell::RefCell;
use std::fmt;

use rustc_hash::FxHashMap;

use crate::errors::{wrong_arg_count, wrong_arg_type};
use crate::print_handler::PrintHandlerImpl;
use crate::{EvalError, Heap, Value};

/// Signature shared by every builtin.
pub type BuiltinFn = fn(&[Value], &PrintHandlerImpl) -> Result<Value, EvalError>;

/// A named builtin.
#[derive(Clone, Copy)]
pub struct Builtin {
    pub name: &'static str,
    pub func: BuiltinFn,
}

impl Builtin {
    pub const fn new(name: &'static str, func: BuiltinFn) -> Self {
        Builtin { name, func }
    }

    #[inline]
    pub fn call(&self, args: &[Value], out: &PrintHandlerImpl) -> Result<Value, EvalError> {
        (self.func)(args, out)
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Builtin({})", self.name)
    }
}

const STANDARD: [Builtin; 7] = [
    Builtin::new("длина", length),
    Builtin::new("вывести", print),
    Builtin::new("первый", first),
    Builtin::new("последний", last),
    Builtin::new("остаток", rest),
    Builtin::new("добавить", append),
    Builtin::new("вставить", push),
];

/// Name-to-builtin table consulted by identifier lookup.
#[derive(Clone, Debug, Default)]
pub struct BuiltinRegistry {
    entries: FxHashMap<&'static str, Builtin>,
}

impl BuiltinRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The seven standard builtins.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for builtin in STANDARD {
            registry.register(builtin);
        }
        registry
    }

    /// Add `builtin`, replacing any entry with the same name.
    pub fn register(&mut self, builtin: Builtin) {
        self.entries.insert(builtin.name, builtin);
    }

    pub fn get(&self, name: &str) -> Option<Builtin> {
        self.entries.get(name).copied()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.entries.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

type ArrayHandle = Heap<RefCell<Vec<Value>>>;

fn check_arity(name: &'static str, args: &[Value], expected: usize) -> Result<(), EvalError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(wrong_arg_count(name, expected, args.len()))
    }
}

fn array_arg<'a>(name: &'static str, value: &'a Value) -> Result<&'a ArrayHandle, EvalError> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(wrong_arg_type(name, other)),
    }
}

fn count(n: usize) -> Value {
    Value::Int(i64::try_from(n).unwrap_or(i64::MAX))
}

/// `длина(x)`: code points of a string or elements of an array.
fn length(args: &[Value], _: &PrintHandlerImpl) -> Result<Value, EvalError> {
    check_arity("длина", args, 1)?;
    match &args[0] {
        Value::Str(s) => Ok(count(s.chars().count())),
        Value::Array(items) => Ok(count(items.borrow().len())),
        other => Err(wrong_arg_type("длина", other)),
    }
}

/// `вывести(a, ...)`: display forms joined by a space, then a newline.
fn print(args: &[Value], out: &PrintHandlerImpl) -> Result<Value, EvalError> {
    let line = args
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    out.println(&line);
    Ok(Value::Null)
}

fn first(args: &[Value], _: &PrintHandlerImpl) -> Result<Value, EvalError> {
    check_arity("первый", args, 1)?;
    let items = array_arg("первый", &args[0])?;
    let first = items.borrow().first().cloned();
    Ok(first.unwrap_or(Value::Null))
}

fn last(args: &[Value], _: &PrintHandlerImpl) -> Result<Value, EvalError> {
    check_arity("последний", args, 1)?;
    let items = array_arg("последний", &args[0])?;
    let last = items.borrow().last().cloned();
    Ok(last.unwrap_or(Value::Null))
}

/// `остаток(arr)`: a new array without the first element, Null when empty.
fn rest(args: &[Value], _: &PrintHandlerImpl) -> Result<Value, EvalError> {
    check_arity("остаток", args, 1)?;
    let items = array_arg("остаток", &args[0])?;
    let items = items.borrow();
    match items.split_first() {
        Some((_, tail)) => Ok(Value::array(tail.to_vec())),
        None => Ok(Value::Null),
    }
}

/// `добавить(arr, v)`: a new array; the argument is left alone.
fn append(args: &[Value], _: &PrintHandlerImpl) -> Result<Value, EvalError> {
    check_arity("добавить", args, 2)?;
    let items = array_arg("добавить", &args[0])?;
    let mut copy = items.borrow().clone();
    copy.push(args[1].clone());
    Ok(Value::array(copy))
}

/// `вставить(arr, v)`: appends in place and returns the same array.
fn push(args: &[Value], _: &PrintHandlerImpl) -> Result<Value, EvalError> {
    check_arity("вставить", args, 2)?;
    let items = array_arg("вставить", &args[0])?;
    items.borrow_mut().push(args[1].clone());
    Ok(args[0].clone())
}
