//! Binding strength of infix continuations.

use slovo_ir::TokenKind;

/// Precedence ladder, weakest first.
///
/// `parse_expression(min)` keeps folding while the upcoming operator binds
/// tighter than `min`. Call and index share the top rung.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub(crate) enum Precedence {
    Lowest,
    /// `=`, right associative
    Assign,
    /// `==` `!=`
    Equals,
    /// `<` `>` `<=` `>=`
    LessGreater,
    /// `+` `-`
    Sum,
    /// `*` `/`
    Product,
    /// `-x` `!x`
    Prefix,
    /// `f(x)` `a[i]`
    Call,
}

impl Precedence {
    /// Precedence of `kind` in infix position; `Lowest` if it cannot
    /// continue an expression.
    pub(crate) fn of(kind: TokenKind) -> Precedence {
        match kind {
            TokenKind::Assign => Precedence::Assign,
            TokenKind::Eq | TokenKind::NotEq => Precedence::Equals,
            TokenKind::Lt | TokenKind::Gt | TokenKind::LtEq | TokenKind::GtEq => {
                Precedence::LessGreater
            }
            TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
            TokenKind::Star | TokenKind::Slash => Precedence::Product,
            TokenKind::LParen | TokenKind::LBracket => Precedence::Call,
            _ => Precedence::Lowest,
        }
    }
}
