//! Tree-walking interpreter.
//!
//! Evaluation returns [`EvalResult`]: `Ok` for a plain value, `Err` for a
//! `вернуть` travelling to its call boundary or an error travelling to the
//! top. [`Interpreter::eval_program`] folds both back into a [`Value`].

mod builder;
mod function_call;

use std::mem;
use std::rc::Rc;

use slovo_ir::{
    Block, Declaration, Expression, IfExpression, IndexExpression, InfixExpression, InfixOp,
    LoopExpression, Program, Statement,
};
use slovo_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

pub use builder::{InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};

use crate::builtins::BuiltinRegistry;
use crate::environment::AssignError;
use crate::errors::{
    declared_type_mismatch, invalid_assign_target, invalid_index, non_boolean_condition,
    not_indexable, redeclaration, stack_overflow, undefined_variable,
};
use crate::operators::evaluate_infix;
use crate::print_handler::SharedPrintHandler;
use crate::unary_operators::evaluate_prefix;
use crate::{ControlAction, Environment, EvalError, EvalResult, Value};

/// Evaluator state: the current frame, the builtins, the output sink and
/// the call-depth bookkeeping.
pub struct Interpreter {
    pub(crate) env: Environment,
    pub(crate) builtins: BuiltinRegistry,
    pub(crate) print_handler: SharedPrintHandler,
    pub(crate) call_depth: usize,
    pub(crate) max_call_depth: usize,
}

impl Interpreter {
    /// An interpreter with a fresh root environment, printing to stdout.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// The current environment. Between top-level calls this is the root
    /// frame the interpreter was built with.
    #[inline]
    pub fn env(&self) -> &Environment {
        &self.env
    }

    #[inline]
    pub fn max_call_depth(&self) -> usize {
        self.max_call_depth
    }

    /// Output captured so far, when the print handler captures.
    pub fn get_print_output(&self) -> String {
        self.print_handler.get_output()
    }

    pub fn clear_print_output(&self) {
        self.print_handler.clear();
    }

    /// Evaluate every statement in order.
    ///
    /// The result is the last statement's value. A top-level `вернуть`
    /// stops the program with its value; an error stops it with
    /// [`Value::Error`]. An empty program yields Null.
    pub fn eval_program(&mut self, program: &Program) -> Value {
        let mut result = Value::Null;
        for statement in &program.statements {
            trace!(at = %statement.token().span, statement = %statement, "eval");
            match self.eval_statement(statement) {
                Ok(value) => result = value,
                Err(action) => return action.into_value(),
            }
        }
        result
    }

    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult {
        match statement {
            Statement::Declaration(decl) => self.eval_declaration(decl),
            Statement::Return(ret) => {
                let value = match &ret.value {
                    Some(expr) => self.eval_expression(expr)?,
                    None => Value::Null,
                };
                Err(ControlAction::Return(value))
            }
            Statement::Expression(stmt) => self.eval_expression(&stmt.expression),
        }
    }

    fn eval_declaration(&mut self, decl: &Declaration) -> EvalResult {
        let name = decl.name.name.as_str();
        let value = self.eval_expression(&decl.value)?;
        if !value.has_type(decl.declared) {
            return Err(declared_type_mismatch(name, decl.declared, value.type_name()).into());
        }
        if self.env.declare(name, value, decl.declared).is_err() {
            return Err(redeclaration(name).into());
        }
        debug!(variable = name, declared = %decl.declared, "declared");
        Ok(Value::Null)
    }

    /// Evaluate an expression.
    ///
    /// Deeply nested programs recurse through here; the stack is grown on
    /// demand so the host never overflows before the call-depth limit.
    pub fn eval_expression(&mut self, expr: &Expression) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expression_inner(expr))
    }

    fn eval_expression_inner(&mut self, expr: &Expression) -> EvalResult {
        match expr {
            Expression::Identifier(ident) => self.lookup(&ident.name),
            Expression::Integer(lit) => Ok(Value::Int(lit.value)),
            Expression::Str(lit) => Ok(Value::string(lit.value.as_str())),
            Expression::Boolean(lit) => Ok(Value::Bool(lit.value)),
            Expression::Array(lit) => {
                let elements = self.eval_expressions(&lit.elements)?;
                Ok(Value::array(elements))
            }
            Expression::Prefix(prefix) => {
                let operand = self.eval_expression(&prefix.right)?;
                Ok(evaluate_prefix(prefix.op, &operand)?)
            }
            Expression::Infix(infix) if infix.op == InfixOp::Assign => self.eval_assign(infix),
            Expression::Infix(infix) => {
                let left = self.eval_expression(&infix.left)?;
                let right = self.eval_expression(&infix.right)?;
                Ok(evaluate_infix(&left, infix.op, &right)?)
            }
            Expression::If(if_expr) => self.eval_if(if_expr),
            Expression::Loop(loop_expr) => self.eval_loop(loop_expr),
            Expression::Function(literal) => Ok(Value::function(Rc::clone(literal), self.env.clone())),
            Expression::Call(call) => {
                let callee = self.eval_expression(&call.function)?;
                let args = self.eval_expressions(&call.arguments)?;
                self.call_value(&callee, &args)
            }
            Expression::Index(index) => self.eval_index(index),
        }
    }

    /// Environment chain first, then builtins.
    fn lookup(&self, name: &str) -> EvalResult {
        if let Some(value) = self.env.lookup(name) {
            return Ok(value);
        }
        match self.builtins.get(name) {
            Some(builtin) => Ok(Value::Builtin(builtin)),
            None => Err(undefined_variable(name).into()),
        }
    }

    fn eval_expressions(&mut self, exprs: &[Expression]) -> Result<Vec<Value>, ControlAction> {
        exprs.iter().map(|expr| self.eval_expression(expr)).collect()
    }

    fn eval_assign(&mut self, infix: &InfixExpression) -> EvalResult {
        let Expression::Identifier(target) = infix.left.as_ref() else {
            return Err(invalid_assign_target(&infix.left).into());
        };
        let value = self.eval_expression(&infix.right)?;
        match self.env.assign(&target.name, value.clone()) {
            Ok(()) => Ok(value),
            Err(AssignError::TypeMismatch { declared }) => {
                Err(declared_type_mismatch(&target.name, declared, value.type_name()).into())
            }
        }
    }

    fn eval_if(&mut self, if_expr: &IfExpression) -> EvalResult {
        let condition = self.eval_expression(&if_expr.condition)?;
        if condition.is_truthy() {
            self.eval_scoped_block(&if_expr.consequence)
        } else if let Some(alternative) = &if_expr.alternative {
            self.eval_scoped_block(alternative)
        } else {
            Ok(Value::Null)
        }
    }

    /// The condition must be boolean on entry; afterwards the loop simply
    /// runs while it stays truthy.
    fn eval_loop(&mut self, loop_expr: &LoopExpression) -> EvalResult {
        let mut condition = self.eval_expression(&loop_expr.condition)?;
        if !matches!(condition, Value::Bool(_)) {
            return Err(non_boolean_condition(&condition).into());
        }
        while condition.is_truthy() {
            self.eval_scoped_block(&loop_expr.body)?;
            condition = self.eval_expression(&loop_expr.condition)?;
        }
        Ok(Value::Null)
    }

    fn eval_index(&mut self, index: &IndexExpression) -> EvalResult {
        let left = self.eval_expression(&index.left)?;
        let position = self.eval_expression(&index.index)?;
        match (&left, &position) {
            (Value::Array(items), Value::Int(i)) => Ok(usize::try_from(*i)
                .ok()
                .and_then(|i| items.borrow().get(i).cloned())
                .unwrap_or(Value::Null)),
            (Value::Array(_), other) => Err(invalid_index(other).into()),
            (other, _) => Err(not_indexable(other).into()),
        }
    }

    /// Statements in order; the value of the last one, or Null.
    pub(crate) fn eval_block(&mut self, block: &Block) -> EvalResult {
        let mut result = Value::Null;
        for statement in &block.statements {
            result = self.eval_statement(statement)?;
        }
        Ok(result)
    }

    /// A block in a fresh frame enclosing the current one.
    fn eval_scoped_block(&mut self, block: &Block) -> EvalResult {
        let frame = Environment::enclosed(&self.env);
        self.with_env(frame, |this| this.eval_block(block))
    }

    /// Run `f` with `env` as the current environment, restoring the previous
    /// one afterwards whatever `f` returns.
    pub(crate) fn with_env<R>(&mut self, env: Environment, f: impl FnOnce(&mut Self) -> R) -> R {
        let saved = mem::replace(&mut self.env, env);
        let result = f(self);
        self.env = saved;
        result
    }

    #[inline]
    pub(crate) fn check_call_depth(&self) -> Result<(), EvalError> {
        if self.call_depth >= self.max_call_depth {
            return Err(stack_overflow(self.max_call_depth));
        }
        Ok(())
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
