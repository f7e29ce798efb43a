//! Evaluation errors and the control channel.
//!
//! `EvalErrorKind` gives every failure a typed category; the factory
//! functions below are the public way to build errors and fill in both the
//! kind and the rendered message. Messages are in Russian, the language of
//! the keywords.
//!
//! `ControlAction` is the `Err` side of [`EvalResult`]: an error on its way
//! to the top level, or a `вернуть` on its way to the nearest call boundary.

use std::fmt;

use slovo_ir::{InfixOp, PrefixOp, TypeTag};

use crate::Value;

/// Result of evaluating a node.
pub type EvalResult = Result<Value, ControlAction>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Names
    UndefinedVariable {
        name: String,
    },
    Redeclaration {
        name: String,
    },
    DeclaredTypeMismatch {
        name: String,
        declared: TypeTag,
        got: &'static str,
    },
    InvalidAssignTarget {
        target: String,
    },

    // Operators
    TypeMismatch {
        left: &'static str,
        op: InfixOp,
        right: &'static str,
    },
    UnknownOperator {
        left: &'static str,
        op: InfixOp,
        right: &'static str,
    },
    UnknownPrefixOperator {
        op: PrefixOp,
        operand: &'static str,
    },
    DivisionByZero,
    IntegerOverflow {
        operation: String,
    },

    // Calls
    NotCallable {
        type_name: &'static str,
    },
    /// Builtin called with the wrong number of arguments.
    WrongArgCount {
        name: &'static str,
        expected: usize,
        got: usize,
    },
    WrongArgType {
        name: &'static str,
        got: &'static str,
    },
    /// User function called with the wrong number of arguments.
    ArityMismatch {
        expected: usize,
        got: usize,
    },
    StackOverflow {
        depth: usize,
    },

    // Control flow and indexing
    NonBooleanCondition {
        got: &'static str,
    },
    NotIndexable {
        type_name: &'static str,
    },
    InvalidIndex {
        type_name: &'static str,
    },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedVariable { name } => write!(f, "нет переменной: {name}"),
            Self::Redeclaration { name } => write!(f, "переменная {name} уже существует"),
            Self::DeclaredTypeMismatch {
                name,
                declared,
                got,
            } => write!(
                f,
                "неверная инициализация типа данных: {name} имеет тип {declared}, получено {got}"
            ),
            Self::InvalidAssignTarget { target } => {
                write!(f, "нельзя присвоить значение выражению {target}")
            }

            Self::TypeMismatch { left, op, right } => write!(f, "разные типы: {left} {op} {right}"),
            Self::UnknownOperator { left, op, right } => {
                write!(f, "неизвестный оператор: {left} {op} {right}")
            }
            Self::UnknownPrefixOperator { op, operand } => {
                write!(f, "неизвестный оператор: {op}{operand}")
            }
            Self::DivisionByZero => f.write_str("деление на ноль"),
            Self::IntegerOverflow { operation } => {
                write!(f, "переполнение целого числа: {operation}")
            }

            Self::NotCallable { type_name } => write!(f, "нет функции: {type_name}"),
            Self::WrongArgCount {
                name,
                expected,
                got,
            } => write!(
                f,
                "{name}: неверное количество аргументов {got}, должно быть {expected}"
            ),
            Self::WrongArgType { name, got } => {
                write!(f, "{name}: не подходящий тип данных {got}")
            }
            Self::ArityMismatch { expected, got } => write!(
                f,
                "неверное количество аргументов {got}, функция ожидает {expected}"
            ),
            Self::StackOverflow { depth } => {
                write!(f, "превышена глубина вызовов ({depth})")
            }

            Self::NonBooleanCondition { got } => {
                write!(f, "условие должно быть булевого типа, получено {got}")
            }
            Self::NotIndexable { type_name } => {
                write!(f, "оператор индекса не поддерживается: {type_name}")
            }
            Self::InvalidIndex { type_name } => {
                write!(f, "индекс должен быть числом, получено {type_name}")
            }
        }
    }
}

/// A failed evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Rendered `kind`, shown to the user as-is.
    pub message: String,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError { kind, message }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

/// Non-local exit from an evaluation.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlAction {
    /// `вернуть`; unwrapped by the nearest function call or the program.
    Return(Value),
    /// Propagates to the top level.
    Error(EvalError),
}

impl ControlAction {
    pub fn is_error(&self) -> bool {
        matches!(self, ControlAction::Error(_))
    }

    /// Fold into a value: the returned value, or the error as a value.
    pub fn into_value(self) -> Value {
        match self {
            ControlAction::Return(value) => value,
            ControlAction::Error(error) => Value::Error(error),
        }
    }
}

impl From<EvalError> for ControlAction {
    fn from(error: EvalError) -> Self {
        ControlAction::Error(error)
    }
}

// Factories

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn redeclaration(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Redeclaration {
        name: name.to_string(),
    })
}

#[cold]
pub fn declared_type_mismatch(name: &str, declared: TypeTag, got: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DeclaredTypeMismatch {
        name: name.to_string(),
        declared,
        got,
    })
}

#[cold]
pub fn invalid_assign_target(target: impl fmt::Display) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidAssignTarget {
        target: target.to_string(),
    })
}

#[cold]
pub fn type_mismatch(left: &Value, op: InfixOp, right: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        left: left.type_name(),
        op,
        right: right.type_name(),
    })
}

#[cold]
pub fn unknown_operator(left: &Value, op: InfixOp, right: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownOperator {
        left: left.type_name(),
        op,
        right: right.type_name(),
    })
}

#[cold]
pub fn unknown_prefix_operator(op: PrefixOp, operand: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownPrefixOperator {
        op,
        operand: operand.type_name(),
    })
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn integer_overflow(operation: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow {
        operation: operation.into(),
    })
}

#[cold]
pub fn not_callable(value: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable {
        type_name: value.type_name(),
    })
}

#[cold]
pub fn wrong_arg_count(name: &'static str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::WrongArgCount {
        name,
        expected,
        got,
    })
}

#[cold]
pub fn wrong_arg_type(name: &'static str, got: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::WrongArgType {
        name,
        got: got.type_name(),
    })
}

#[cold]
pub fn arity_mismatch(expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch { expected, got })
}

#[cold]
pub fn stack_overflow(depth: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StackOverflow { depth })
}

#[cold]
pub fn non_boolean_condition(got: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NonBooleanCondition {
        got: got.type_name(),
    })
}

#[cold]
pub fn not_indexable(value: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotIndexable {
        type_name: value.type_name(),
    })
}

#[cold]
pub fn invalid_index(index: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidIndex {
        type_name: index.type_name(),
    })
}
