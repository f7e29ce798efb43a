#![allow(clippy::unwrap_used, clippy::expect_used)]

use slovo_ir::PrefixOp;

use crate::unary_operators::evaluate_prefix;
use crate::{EvalErrorKind, Value};

#[test]
fn negation() {
    assert_eq!(evaluate_prefix(PrefixOp::Neg, &Value::Int(5)).unwrap(), Value::Int(-5));
    assert_eq!(evaluate_prefix(PrefixOp::Neg, &Value::Int(-5)).unwrap(), Value::Int(5));
}

#[test]
fn negating_min_overflows() {
    let err = evaluate_prefix(PrefixOp::Neg, &Value::Int(i64::MIN)).unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::IntegerOverflow { .. }));
}

#[test]
fn negation_needs_an_integer() {
    let err = evaluate_prefix(PrefixOp::Neg, &Value::Bool(true)).unwrap_err();
    assert_eq!(err.message, "неизвестный оператор: -булево");
}

#[test]
fn not_inverts_truthiness() {
    assert_eq!(evaluate_prefix(PrefixOp::Not, &Value::Bool(true)).unwrap(), Value::Bool(false));
    assert_eq!(evaluate_prefix(PrefixOp::Not, &Value::Bool(false)).unwrap(), Value::Bool(true));
    assert_eq!(evaluate_prefix(PrefixOp::Not, &Value::Int(5)).unwrap(), Value::Bool(true));
    assert_eq!(evaluate_prefix(PrefixOp::Not, &Value::Null).unwrap(), Value::Bool(true));
}
