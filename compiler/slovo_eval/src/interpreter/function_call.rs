//! Calls to closures and builtins.

use super::Interpreter;
use crate::errors::{arity_mismatch, not_callable};
use crate::{ControlAction, Environment, EvalResult, FunctionValue, Value};

impl Interpreter {
    /// Call `callee` with already-evaluated arguments.
    ///
    /// A `вернуть` inside a closure body stops at this boundary and becomes
    /// the call's value.
    #[tracing::instrument(level = "debug", skip_all, fields(callee = callee.type_name(), args = args.len()))]
    pub fn call_value(&mut self, callee: &Value, args: &[Value]) -> EvalResult {
        match callee {
            Value::Function(func) => self.call_function(func, args),
            Value::Builtin(builtin) => Ok(builtin.call(args, &self.print_handler)?),
            other => Err(not_callable(other).into()),
        }
    }

    fn call_function(&mut self, func: &FunctionValue, args: &[Value]) -> EvalResult {
        self.check_call_depth()?;
        let params = func.parameters();
        if params.len() != args.len() {
            return Err(arity_mismatch(params.len(), args.len()).into());
        }

        let frame = Environment::enclosed(func.env());
        for (param, arg) in params.iter().zip(args) {
            frame.define(&param.name, arg.clone());
        }

        self.call_depth = self.call_depth.saturating_add(1);
        let result = self.with_env(frame, |this| this.eval_block(func.body()));
        self.call_depth = self.call_depth.saturating_sub(1);

        match result {
            Err(ControlAction::Return(value)) => Ok(value),
            other => other,
        }
    }
}
