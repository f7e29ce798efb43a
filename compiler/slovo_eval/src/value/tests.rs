use pretty_assertions::assert_eq;

use super::*;
use crate::builtins::BuiltinRegistry;

#[test]
fn display_forms() {
    assert_eq!(Value::Int(-7).to_string(), "-7");
    assert_eq!(Value::Bool(true).to_string(), "истина");
    assert_eq!(Value::Bool(false).to_string(), "ложь");
    assert_eq!(Value::Null.to_string(), "ничего");
    assert_eq!(Value::string("привет").to_string(), "привет");
    assert_eq!(
        Value::array(vec![Value::Int(1), Value::string("a"), Value::Null]).to_string(),
        "[1, a, ничего]"
    );
    assert_eq!(Value::array(vec![]).to_string(), "[]");
}

#[test]
fn builtin_displays_generically() {
    let registry = BuiltinRegistry::standard();
    let Some(builtin) = registry.get("длина") else {
        panic!("длина is registered");
    };
    assert_eq!(Value::Builtin(builtin).to_string(), "встроенная функция");
    assert_eq!(Value::Builtin(builtin).type_name(), "встроенная функция");
}

#[test]
fn type_names() {
    assert_eq!(Value::Int(0).type_name(), "число");
    assert_eq!(Value::string("").type_name(), "строка");
    assert_eq!(Value::Bool(false).type_name(), "булево");
    assert_eq!(Value::Null.type_name(), "ничего");
    assert_eq!(Value::array(vec![]).type_name(), "массив");
}

#[test]
fn only_true_is_truthy() {
    assert!(Value::Bool(true).is_truthy());
    assert!(!Value::Bool(false).is_truthy());
    assert!(!Value::Int(1).is_truthy());
    assert!(!Value::string("да").is_truthy());
    assert!(!Value::Null.is_truthy());
    assert!(!Value::array(vec![Value::Int(1)]).is_truthy());
}

#[test]
fn declared_type_compatibility() {
    assert!(Value::Int(1).has_type(TypeTag::Integer));
    assert!(!Value::Int(1).has_type(TypeTag::String));
    assert!(Value::string("x").has_type(TypeTag::String));
    assert!(Value::Bool(true).has_type(TypeTag::Boolean));
    assert!(Value::array(vec![]).has_type(TypeTag::Array));
    assert!(!Value::Null.has_type(TypeTag::Array));

    let registry = BuiltinRegistry::standard();
    let Some(builtin) = registry.get("вывести") else {
        panic!("вывести is registered");
    };
    assert!(Value::Builtin(builtin).has_type(TypeTag::Function));
}

#[test]
fn array_copies_alias() {
    let a = Value::array(vec![Value::Int(1)]);
    let b = a.clone();
    if let Value::Array(items) = &b {
        items.borrow_mut().push(Value::Int(2));
    }
    assert_eq!(a.to_string(), "[1, 2]");
}

#[test]
fn self_containing_array_displays_finitely() {
    let a = Value::array(vec![Value::Int(1)]);
    if let Value::Array(items) = &a {
        items.borrow_mut().push(a.clone());
    }
    assert_eq!(a.to_string(), "[1, [...]]");
}

#[test]
fn structural_equality_for_host_code() {
    assert_eq!(
        Value::array(vec![Value::Int(1)]),
        Value::array(vec![Value::Int(1)])
    );
    assert_ne!(Value::Int(1), Value::string("1"));
    assert_eq!(Value::string("a"), Value::string("a"));
}

#[test]
fn debug_quotes_strings() {
    assert_eq!(format!("{:?}", Value::string("a")), "\"a\"");
    assert_eq!(format!("{:?}", Value::Int(3)), "3");
}
