//! Expression nodes.
//!
//! Every node keeps the token that introduced it. `Display` renders the
//! canonical source form: operator applications are fully parenthesized so
//! the rendering shows exactly how the parser grouped them.

use std::fmt;
use std::rc::Rc;

use super::operators::{InfixOp, PrefixOp};
use super::{write_joined, Block};
use crate::Token;

/// Expression node.
#[derive(Clone, Debug, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    Integer(IntegerLiteral),
    Str(StringLiteral),
    Boolean(BooleanLiteral),
    Array(ArrayLiteral),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
    If(IfExpression),
    Loop(LoopExpression),
    /// Shared so a closure value can hold the literal after the program
    /// that contained it is dropped (REPL sessions).
    Function(Rc<FunctionLiteral>),
    Call(CallExpression),
    Index(IndexExpression),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identifier {
    pub token: Token,
    pub name: String,
}

impl Identifier {
    /// Build an identifier whose name is its token's literal.
    pub fn from_token(token: Token) -> Self {
        let name = token.literal.clone();
        Identifier { token, name }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StringLiteral {
    pub token: Token,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BooleanLiteral {
    pub token: Token,
    pub value: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ArrayLiteral {
    /// The `[` token.
    pub token: Token,
    pub elements: Vec<Expression>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PrefixExpression {
    pub token: Token,
    pub op: PrefixOp,
    pub right: Box<Expression>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InfixExpression {
    /// The operator token.
    pub token: Token,
    pub left: Box<Expression>,
    pub op: InfixOp,
    pub right: Box<Expression>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct IfExpression {
    pub token: Token,
    pub condition: Box<Expression>,
    pub consequence: Block,
    pub alternative: Option<Block>,
}

/// `цикл (условие) { ... }`
#[derive(Clone, Debug, PartialEq)]
pub struct LoopExpression {
    pub token: Token,
    pub condition: Box<Expression>,
    pub body: Block,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FunctionLiteral {
    pub token: Token,
    pub parameters: Vec<Identifier>,
    pub body: Block,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CallExpression {
    /// The `(` token.
    pub token: Token,
    pub function: Box<Expression>,
    pub arguments: Vec<Expression>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct IndexExpression {
    /// The `[` token.
    pub token: Token,
    pub left: Box<Expression>,
    pub index: Box<Expression>,
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(e) => e.fmt(f),
            Expression::Integer(e) => write!(f, "{}", e.value),
            Expression::Str(e) => write!(f, "\"{}\"", e.value),
            Expression::Boolean(e) => f.write_str(if e.value { "истина" } else { "ложь" }),
            Expression::Array(e) => {
                f.write_str("[")?;
                write_joined(f, &e.elements, ", ")?;
                f.write_str("]")
            }
            Expression::Prefix(e) => write!(f, "({}{})", e.op, e.right),
            Expression::Infix(e) => write!(f, "({} {} {})", e.left, e.op, e.right),
            Expression::If(e) => {
                write!(f, "если ({}) {}", e.condition, e.consequence)?;
                if let Some(alt) = &e.alternative {
                    write!(f, " иначе {alt}")?;
                }
                Ok(())
            }
            Expression::Loop(e) => write!(f, "цикл ({}) {}", e.condition, e.body),
            Expression::Function(e) => e.fmt(f),
            Expression::Call(e) => {
                write!(f, "{}(", e.function)?;
                write_joined(f, &e.arguments, ", ")?;
                f.write_str(")")
            }
            Expression::Index(e) => write!(f, "({}[{}])", e.left, e.index),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for FunctionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("функция(")?;
        write_joined(f, &self.parameters, ", ")?;
        write!(f, ") {}", self.body)
    }
}
