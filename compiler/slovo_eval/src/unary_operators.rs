//! Prefix operators.

use slovo_ir::PrefixOp;

use crate::errors::{integer_overflow, unknown_prefix_operator};
use crate::{EvalError, Value};

/// Apply `op` to an evaluated operand.
///
/// `!` accepts anything and negates truthiness; `-` needs an integer.
pub fn evaluate_prefix(op: PrefixOp, operand: &Value) -> Result<Value, EvalError> {
    match (op, operand) {
        (PrefixOp::Not, value) => Ok(Value::Bool(!value.is_truthy())),
        (PrefixOp::Neg, Value::Int(n)) => n
            .checked_neg()
            .map(Value::Int)
            .ok_or_else(|| integer_overflow("отрицание")),
        (PrefixOp::Neg, other) => Err(unknown_prefix_operator(op, other)),
    }
}
