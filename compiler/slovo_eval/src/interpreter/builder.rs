//! `InterpreterBuilder` for configuring an [`Interpreter`].

use super::Interpreter;
use crate::builtins::BuiltinRegistry;
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::Environment;

/// Closure calls allowed to be active at once before evaluation fails with
/// a stack-overflow error.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// Builder for [`Interpreter`]. Every setting has a default: a fresh root
/// environment, the standard builtins, stdout, and
/// [`DEFAULT_MAX_CALL_DEPTH`].
#[derive(Default)]
pub struct InterpreterBuilder {
    env: Option<Environment>,
    builtins: Option<BuiltinRegistry>,
    print_handler: Option<SharedPrintHandler>,
    max_call_depth: Option<usize>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate in `env` instead of a fresh root frame. The REPL passes the
    /// same environment for every line.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    #[must_use]
    pub fn builtins(mut self, builtins: BuiltinRegistry) -> Self {
        self.builtins = Some(builtins);
        self
    }

    /// Where `вывести` writes.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = Some(depth);
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            env: self.env.unwrap_or_default(),
            builtins: self.builtins.unwrap_or_else(BuiltinRegistry::standard),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            call_depth: 0,
            max_call_depth: self.max_call_depth.unwrap_or(DEFAULT_MAX_CALL_DEPTH),
        }
    }
}
