//! Abstract syntax tree.
//!
//! Closed sum types: the grammar is fixed, so `match` over [`Statement`]
//! and [`Expression`] is exhaustive everywhere they are consumed.
//!
//! # Canonical rendering
//!
//! `Display` on any node produces source text that parses back to an
//! equivalent node. Declarations and returns keep their `;`. An expression
//! statement renders bare when it is the last in its sequence and with a
//! `;` otherwise, so the next statement cannot be read as its continuation
//! (`а; -1` must not become `а - 1`). Statements inside a block are
//! separated by a single space, top-level ones by a newline.

mod expr;
mod operators;

use std::fmt;

pub use expr::{
    ArrayLiteral, BooleanLiteral, CallExpression, Expression, FunctionLiteral, Identifier,
    IfExpression, IndexExpression, InfixExpression, IntegerLiteral, LoopExpression,
    PrefixExpression, StringLiteral,
};
pub use operators::{InfixOp, PrefixOp};

use crate::{Token, TypeTag};

/// Root node: the ordered top-level statements of one source unit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new(statements: Vec<Statement>) -> Self {
        Program { statements }
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// Statement node.
#[derive(Clone, Debug, PartialEq)]
pub enum Statement {
    Declaration(Declaration),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
}

impl Statement {
    /// The token that starts the statement.
    pub fn token(&self) -> &Token {
        match self {
            Statement::Declaration(s) => &s.token,
            Statement::Return(s) => &s.token,
            Statement::Expression(s) => &s.token,
        }
    }
}

/// `имя: тип = значение;`
#[derive(Clone, Debug, PartialEq)]
pub struct Declaration {
    /// The identifier token that starts the declaration.
    pub token: Token,
    pub name: Identifier,
    pub declared: TypeTag,
    pub value: Expression,
}

/// `вернуть значение;`: `value` is `None` for a bare `вернуть;`.
#[derive(Clone, Debug, PartialEq)]
pub struct ReturnStatement {
    pub token: Token,
    pub value: Option<Expression>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExpressionStatement {
    /// First token of the expression.
    pub token: Token,
    pub expression: Expression,
}

/// `{ statements }`
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    /// The `{` token.
    pub token: Token,
    pub statements: Vec<Statement>,
}

/// Write `items` separated by `sep`.
pub(crate) fn write_joined<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
    sep: &str,
) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// Write `statements` separated by `sep`, terminating every expression
/// statement that has a successor.
fn write_statements(
    f: &mut fmt::Formatter<'_>,
    statements: &[Statement],
    sep: &str,
) -> fmt::Result {
    let mut iter = statements.iter().peekable();
    while let Some(statement) = iter.next() {
        write!(f, "{statement}")?;
        if iter.peek().is_some() {
            if matches!(statement, Statement::Expression(_)) {
                f.write_str(";")?;
            }
            f.write_str(sep)?;
        }
    }
    Ok(())
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_statements(f, &self.statements, "\n")
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Declaration(s) => write!(f, "{}: {} = {};", s.name, s.declared, s.value),
            Statement::Return(s) => match &s.value {
                Some(value) => write!(f, "вернуть {value};"),
                None => f.write_str("вернуть;"),
            },
            Statement::Expression(s) => write!(f, "{}", s.expression),
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.statements.is_empty() {
            return f.write_str("{ }");
        }
        f.write_str("{ ")?;
        write_statements(f, &self.statements, " ")?;
        f.write_str(" }")
    }
}
