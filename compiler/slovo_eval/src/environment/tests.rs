use pretty_assertions::assert_eq;

use super::*;

#[test]
fn declare_and_lookup() {
    let env = Environment::new();
    env.declare("x", Value::Int(42), TypeTag::Integer).unwrap();
    assert_eq!(env.lookup("x"), Some(Value::Int(42)));
    assert_eq!(env.lookup("y"), None);
}

#[test]
fn redeclaration_in_same_frame_is_refused() {
    let env = Environment::new();
    env.declare("x", Value::Int(1), TypeTag::Integer).unwrap();
    assert_eq!(
        env.declare("x", Value::Int(2), TypeTag::Integer),
        Err(DeclareError::AlreadyDefined)
    );
    assert_eq!(env.lookup("x"), Some(Value::Int(1)));
}

#[test]
fn inner_frame_shadows_outer() {
    let outer = Environment::new();
    outer.declare("x", Value::Int(1), TypeTag::Integer).unwrap();

    let inner = Environment::enclosed(&outer);
    assert_eq!(inner.lookup("x"), Some(Value::Int(1)));
    assert!(!inner.is_defined_here("x"));

    inner
        .declare("x", Value::string("тень"), TypeTag::String)
        .unwrap();
    assert_eq!(inner.lookup("x"), Some(Value::string("тень")));
    assert_eq!(outer.lookup("x"), Some(Value::Int(1)));
}

#[test]
fn assign_rebinds_nearest_holder() {
    let outer = Environment::new();
    outer.declare("x", Value::Int(1), TypeTag::Integer).unwrap();
    let inner = Environment::enclosed(&outer);

    inner.assign("x", Value::Int(2)).unwrap();
    assert_eq!(outer.lookup("x"), Some(Value::Int(2)));
    assert!(!inner.is_defined_here("x"));
}

#[test]
fn assign_unbound_creates_in_current_frame() {
    let outer = Environment::new();
    let inner = Environment::enclosed(&outer);

    inner.assign("новое", Value::Bool(true)).unwrap();
    assert!(inner.is_defined_here("новое"));
    assert_eq!(outer.lookup("новое"), None);
}

#[test]
fn assign_keeps_declared_type() {
    let env = Environment::new();
    env.declare("x", Value::Int(1), TypeTag::Integer).unwrap();
    assert_eq!(
        env.assign("x", Value::string("a")),
        Err(AssignError::TypeMismatch {
            declared: TypeTag::Integer
        })
    );
    assert_eq!(env.lookup("x"), Some(Value::Int(1)));
}

#[test]
fn untyped_binding_accepts_any_value() {
    let env = Environment::new();
    env.define("p", Value::Int(1));
    env.assign("p", Value::string("a")).unwrap();
    assert_eq!(env.lookup("p"), Some(Value::string("a")));
}

#[test]
fn clones_share_the_frame() {
    let env = Environment::new();
    let alias = env.clone();
    alias.define("x", Value::Null);
    assert!(env.is_defined_here("x"));
    assert!(Environment::ptr_eq(&env, &alias));
    assert!(!Environment::ptr_eq(&env, &Environment::enclosed(&env)));
}

#[test]
fn depth_counts_frames() {
    let root = Environment::new();
    let child = Environment::enclosed(&root);
    let grandchild = Environment::enclosed(&child);
    assert_eq!(root.depth(), 1);
    assert_eq!(grandchild.depth(), 3);
}
