//! Slovo IR - shared data types for the Slovo interpreter.
//!
//! This crate holds the types every later phase agrees on:
//! - `Token` / `TokenKind`: lexical categories and the keyword table
//! - `Span`: byte ranges into the source text
//! - `TypeTag`: the type names accepted by a declaration
//! - `ast`: statement and expression nodes, each rendering its canonical
//!   source form through `Display`
//!
//! Nothing here performs I/O or evaluation.

pub mod ast;
mod span;
mod token;
mod types;

pub use ast::{
    ArrayLiteral, Block, BooleanLiteral, CallExpression, Declaration, Expression,
    ExpressionStatement, FunctionLiteral, Identifier, IfExpression, IndexExpression, InfixExpression,
    InfixOp, IntegerLiteral, LoopExpression, PrefixExpression, PrefixOp, Program, ReturnStatement,
    Statement, StringLiteral,
};
pub use span::Span;
pub use token::{Token, TokenKind};
pub use types::TypeTag;
