//! Infix operators.
//!
//! Arithmetic and ordering are defined on integers only, `+` also joins
//! strings, and `==`/`!=` accept any pair of values. Assignment is not an
//! operator on values; the interpreter handles it before reaching here.

use slovo_ir::InfixOp;

use crate::errors::{division_by_zero, integer_overflow, type_mismatch, unknown_operator};
use crate::{EvalError, Heap, Value};

type OpResult = Result<Value, EvalError>;

#[inline]
fn checked(result: Option<i64>, operation: &'static str) -> OpResult {
    result.map(Value::Int).ok_or_else(|| integer_overflow(operation))
}

/// Apply `op` to two evaluated operands.
pub fn evaluate_infix(left: &Value, op: InfixOp, right: &Value) -> OpResult {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => eval_int_infix(*a, op, *b),
        (Value::Str(a), Value::Str(b)) => eval_str_infix(left, a, op, right, b),
        _ => match op {
            InfixOp::Eq => Ok(Value::Bool(identical(left, right))),
            InfixOp::NotEq => Ok(Value::Bool(!identical(left, right))),
            _ if left.type_name() != right.type_name() => Err(type_mismatch(left, op, right)),
            _ => Err(unknown_operator(left, op, right)),
        },
    }
}

fn eval_int_infix(a: i64, op: InfixOp, b: i64) -> OpResult {
    match op {
        InfixOp::Add => checked(a.checked_add(b), "сложение"),
        InfixOp::Sub => checked(a.checked_sub(b), "вычитание"),
        InfixOp::Mul => checked(a.checked_mul(b), "умножение"),
        InfixOp::Div => {
            if b == 0 {
                Err(division_by_zero())
            } else {
                checked(a.checked_div(b), "деление")
            }
        }
        InfixOp::Eq => Ok(Value::Bool(a == b)),
        InfixOp::NotEq => Ok(Value::Bool(a != b)),
        InfixOp::Lt => Ok(Value::Bool(a < b)),
        InfixOp::Gt => Ok(Value::Bool(a > b)),
        InfixOp::LtEq => Ok(Value::Bool(a <= b)),
        InfixOp::GtEq => Ok(Value::Bool(a >= b)),
        InfixOp::Assign => Err(unknown_operator(&Value::Int(a), op, &Value::Int(b))),
    }
}

fn eval_str_infix(left: &Value, a: &str, op: InfixOp, right: &Value, b: &str) -> OpResult {
    match op {
        InfixOp::Add => {
            let mut joined = String::with_capacity(a.len().saturating_add(b.len()));
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::string(joined))
        }
        InfixOp::Eq => Ok(Value::Bool(a == b)),
        InfixOp::NotEq => Ok(Value::Bool(a != b)),
        _ => Err(unknown_operator(left, op, right)),
    }
}

/// `==` outside integer and string pairs: booleans and null by value,
/// arrays and closures by reference, builtins by name.
fn identical(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Null, Value::Null) => true,
        (Value::Array(a), Value::Array(b)) => Heap::ptr_eq(a, b),
        (Value::Function(a), Value::Function(b)) => Heap::ptr_eq(a, b),
        (Value::Builtin(a), Value::Builtin(b)) => a.name == b.name,
        _ => false,
    }
}
