#![deny(clippy::arithmetic_side_effects)]
//! Slovo Eval - tree-walking evaluator for the Slovo interpreter.
//!
//! The evaluator uses:
//! - `Environment`: a chain of shared frames, one per call or block
//! - `Interpreter`: walks the AST, configured through `InterpreterBuilder`
//! - `evaluate_infix` / `evaluate_prefix`: operator tables on `Value`s
//! - `BuiltinRegistry`: the builtin functions, consulted after the
//!   environment chain
//! - `PrintHandlerImpl`: where `вывести` writes
//!
//! All integer arithmetic is checked; overflow is an evaluation error.

mod builtins;
mod environment;
pub mod errors;
mod interpreter;
mod operators;
mod print_handler;
mod unary_operators;
mod value;

pub use builtins::{Builtin, BuiltinFn, BuiltinRegistry};
pub use environment::{AssignError, DeclareError, Environment, LocalScope, Scope};
pub use errors::{ControlAction, EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{Interpreter, InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};
pub use operators::evaluate_infix;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use unary_operators::evaluate_prefix;
pub use value::{FunctionValue, Heap, Value};

use slovo_ir::Program;

/// Evaluate `program` in `env` with the standard builtins, printing to
/// stdout.
///
/// Bindings the program creates at top level stay in `env`. Never panics
/// on a well-formed program: failures come back as [`Value::Error`].
pub fn evaluate(program: &Program, env: &Environment) -> Value {
    Interpreter::builder()
        .env(env.clone())
        .build()
        .eval_program(program)
}

#[cfg(test)]
mod tests;
