//! Prefix and infix operators.

use std::fmt;

use crate::TokenKind;

/// Prefix operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PrefixOp {
    /// `-x`
    Neg,
    /// `!x`
    Not,
}

impl PrefixOp {
    pub fn from_token_kind(kind: TokenKind) -> Option<PrefixOp> {
        match kind {
            TokenKind::Minus => Some(PrefixOp::Neg),
            TokenKind::Bang => Some(PrefixOp::Not),
            _ => None,
        }
    }

    pub const fn as_symbol(self) -> &'static str {
        match self {
            PrefixOp::Neg => "-",
            PrefixOp::Not => "!",
        }
    }
}

/// Infix operators, including assignment.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum InfixOp {
    Assign,
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    Add,
    Sub,
    Mul,
    Div,
}

impl InfixOp {
    pub fn from_token_kind(kind: TokenKind) -> Option<InfixOp> {
        let op = match kind {
            TokenKind::Assign => InfixOp::Assign,
            TokenKind::Eq => InfixOp::Eq,
            TokenKind::NotEq => InfixOp::NotEq,
            TokenKind::Lt => InfixOp::Lt,
            TokenKind::Gt => InfixOp::Gt,
            TokenKind::LtEq => InfixOp::LtEq,
            TokenKind::GtEq => InfixOp::GtEq,
            TokenKind::Plus => InfixOp::Add,
            TokenKind::Minus => InfixOp::Sub,
            TokenKind::Star => InfixOp::Mul,
            TokenKind::Slash => InfixOp::Div,
            _ => return None,
        };
        Some(op)
    }

    /// Returns the source-level symbol for this operator.
    ///
    /// Used both for canonical rendering and in error messages.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            InfixOp::Assign => "=",
            InfixOp::Eq => "==",
            InfixOp::NotEq => "!=",
            InfixOp::Lt => "<",
            InfixOp::Gt => ">",
            InfixOp::LtEq => "<=",
            InfixOp::GtEq => ">=",
            InfixOp::Add => "+",
            InfixOp::Sub => "-",
            InfixOp::Mul => "*",
            InfixOp::Div => "/",
        }
    }

    pub const fn is_comparison(self) -> bool {
        matches!(
            self,
            InfixOp::Eq | InfixOp::NotEq | InfixOp::Lt | InfixOp::Gt | InfixOp::LtEq | InfixOp::GtEq
        )
    }
}

impl fmt::Display for PrefixOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

impl fmt::Display for InfixOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}
