//! Token types for the Slovo lexer.

mod kind;

pub use kind::TokenKind;

use std::fmt;

use crate::Span;

/// A token: its category, the exact source text it was read from, and
/// where that text sits in the source.
///
/// Tokens are produced once by the lexer and never modified afterwards.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, literal: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            literal: literal.into(),
            span,
        }
    }

    /// Create a token with no source location (tests, synthesized nodes).
    ///
    /// Fixed-spelling kinds get their canonical spelling as literal.
    pub fn dummy(kind: TokenKind) -> Self {
        Token {
            kind,
            literal: kind.spelling().unwrap_or_default().to_string(),
            span: Span::DUMMY,
        }
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?}) @ {}", self.kind, self.literal, self.span)
    }
}

#[cfg(test)]
mod tests;
