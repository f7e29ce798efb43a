#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use slovo_parse::parse;

use crate::{evaluate, Environment, Value};

#[test]
fn evaluate_leaves_bindings_in_the_environment() {
    let env = Environment::new();
    let first = parse("x: число = 2; y: массив = [x];");
    assert!(first.errors.is_empty());
    assert_eq!(evaluate(&first.program, &env), Value::Null);
    assert_eq!(env.lookup("x"), Some(Value::Int(2)));

    let second = parse("x * длина(y)");
    assert_eq!(evaluate(&second.program, &env), Value::Int(2));
}

#[test]
fn evaluate_of_empty_program_is_null() {
    let env = Environment::new();
    assert_eq!(evaluate(&parse("").program, &env), Value::Null);
}

#[test]
fn evaluate_folds_errors_into_values() {
    let env = Environment::new();
    let value = evaluate(&parse("x: число = 1; x: число = 2;").program, &env);
    assert_eq!(value.to_string(), "переменная x уже существует");
    assert_eq!(value.type_name(), "ошибка");
}
