#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use slovo_ir::InfixOp;

use crate::operators::evaluate_infix;
use crate::{EvalErrorKind, Value};

fn int(left: i64, op: InfixOp, right: i64) -> Value {
    evaluate_infix(&Value::Int(left), op, &Value::Int(right)).unwrap()
}

#[test]
fn integer_arithmetic() {
    assert_eq!(int(2, InfixOp::Add, 3), Value::Int(5));
    assert_eq!(int(2, InfixOp::Sub, 3), Value::Int(-1));
    assert_eq!(int(4, InfixOp::Mul, 3), Value::Int(12));
    assert_eq!(int(7, InfixOp::Div, 2), Value::Int(3));
    assert_eq!(int(-7, InfixOp::Div, 2), Value::Int(-3));
}

#[test]
fn integer_comparisons() {
    assert_eq!(int(1, InfixOp::Lt, 2), Value::Bool(true));
    assert_eq!(int(1, InfixOp::Gt, 2), Value::Bool(false));
    assert_eq!(int(2, InfixOp::LtEq, 2), Value::Bool(true));
    assert_eq!(int(1, InfixOp::GtEq, 2), Value::Bool(false));
    assert_eq!(int(3, InfixOp::Eq, 3), Value::Bool(true));
    assert_eq!(int(3, InfixOp::NotEq, 3), Value::Bool(false));
}

#[test]
fn division_by_zero_is_an_error() {
    let err = evaluate_infix(&Value::Int(1), InfixOp::Div, &Value::Int(0)).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
}

#[test]
fn overflow_is_an_error() {
    for (a, op, b) in [
        (i64::MAX, InfixOp::Add, 1),
        (i64::MIN, InfixOp::Sub, 1),
        (i64::MAX, InfixOp::Mul, 2),
        (i64::MIN, InfixOp::Div, -1),
    ] {
        let err = evaluate_infix(&Value::Int(a), op, &Value::Int(b)).unwrap_err();
        assert!(
            matches!(err.kind, EvalErrorKind::IntegerOverflow { .. }),
            "{a} {op} {b}"
        );
    }
}

#[test]
fn strings_concatenate_and_compare_by_value() {
    let a = Value::string("при");
    let b = Value::string("вет");
    assert_eq!(
        evaluate_infix(&a, InfixOp::Add, &b).unwrap(),
        Value::string("привет")
    );
    assert_eq!(
        evaluate_infix(&Value::string("x"), InfixOp::Eq, &Value::string("x")).unwrap(),
        Value::Bool(true)
    );
    assert_eq!(
        evaluate_infix(&a, InfixOp::NotEq, &b).unwrap(),
        Value::Bool(true)
    );
}

#[test]
fn other_string_operators_are_unknown() {
    let err = evaluate_infix(&Value::string("a"), InfixOp::Sub, &Value::string("b")).unwrap_err();
    assert_eq!(err.message, "неизвестный оператор: строка - строка");
}

#[test]
fn booleans_compare_but_do_not_add() {
    let t = Value::Bool(true);
    let f = Value::Bool(false);
    assert_eq!(evaluate_infix(&t, InfixOp::Eq, &t).unwrap(), Value::Bool(true));
    assert_eq!(evaluate_infix(&t, InfixOp::NotEq, &f).unwrap(), Value::Bool(true));
    let err = evaluate_infix(&t, InfixOp::Add, &f).unwrap_err();
    assert_eq!(err.message, "неизвестный оператор: булево + булево");
}

#[test]
fn mixed_types() {
    let err = evaluate_infix(&Value::Int(5), InfixOp::Add, &Value::Bool(true)).unwrap_err();
    assert_eq!(err.message, "разные типы: число + булево");

    // Equality across types is never an error.
    assert_eq!(
        evaluate_infix(&Value::Int(1), InfixOp::Eq, &Value::string("1")).unwrap(),
        Value::Bool(false)
    );
    assert_eq!(
        evaluate_infix(&Value::Null, InfixOp::NotEq, &Value::Int(0)).unwrap(),
        Value::Bool(true)
    );
}

#[test]
fn arrays_compare_by_reference() {
    let a = Value::array(vec![Value::Int(1)]);
    let same_contents = Value::array(vec![Value::Int(1)]);
    assert_eq!(
        evaluate_infix(&a, InfixOp::Eq, &a.clone()).unwrap(),
        Value::Bool(true)
    );
    assert_eq!(
        evaluate_infix(&a, InfixOp::Eq, &same_contents).unwrap(),
        Value::Bool(false)
    );
}

#[test]
fn null_equals_null() {
    assert_eq!(
        evaluate_infix(&Value::Null, InfixOp::Eq, &Value::Null).unwrap(),
        Value::Bool(true)
    );
    let err = evaluate_infix(&Value::Null, InfixOp::Lt, &Value::Null).unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::UnknownOperator { .. }));
}
