//! Parse diagnostics.
//!
//! Errors are values: the parser records one per failed statement and keeps
//! going, so a single pass reports every independent mistake.

use std::fmt;

use slovo_ir::{Span, Token, TokenKind};

/// What went wrong.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A required token was missing.
    UnexpectedToken { expected: TokenKind, found: TokenKind },
    /// The token cannot start an expression.
    NoPrefixRule { found: TokenKind, literal: String },
    /// A string literal ran to end of input.
    UnterminatedString,
    /// The word after `:` in a declaration is not a type name.
    ExpectedTypeName { found: TokenKind },
    /// Integer literal does not fit in 64 bits, or is written with digits
    /// other than ASCII ones.
    IntegerOutOfRange { literal: String },
    /// Left side of `=` is not a plain name.
    InvalidAssignTarget { target: String },
}

/// A diagnostic with the location it refers to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    #[cold]
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { kind, span }
    }

    #[cold]
    pub fn unexpected(expected: TokenKind, found: &Token) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedToken {
                expected,
                found: found.kind,
            },
            found.span,
        )
    }

    /// No expression can start with `found`. Unterminated strings get their
    /// own message.
    #[cold]
    pub fn no_prefix_rule(found: &Token) -> Self {
        let kind = if found.is(TokenKind::Illegal) && found.literal.starts_with('"') {
            ParseErrorKind::UnterminatedString
        } else {
            ParseErrorKind::NoPrefixRule {
                found: found.kind,
                literal: found.literal.clone(),
            }
        };
        Self::new(kind, found.span)
    }

    #[cold]
    pub fn expected_type_name(found: &Token) -> Self {
        Self::new(ParseErrorKind::ExpectedTypeName { found: found.kind }, found.span)
    }

    #[cold]
    pub fn integer_out_of_range(token: &Token) -> Self {
        Self::new(
            ParseErrorKind::IntegerOutOfRange {
                literal: token.literal.clone(),
            },
            token.span,
        )
    }

    #[cold]
    pub fn invalid_assign_target(target: impl fmt::Display, span: Span) -> Self {
        Self::new(
            ParseErrorKind::InvalidAssignTarget {
                target: target.to_string(),
            },
            span,
        )
    }

    /// One-based line and column of the error in `source`.
    pub fn line_col(&self, source: &str) -> (usize, usize) {
        self.span.line_col(source)
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::UnexpectedToken { expected, found } => {
                write!(f, "ожидался {expected}, получен {found}")
            }
            ParseErrorKind::NoPrefixRule { found, literal } => match found {
                TokenKind::Eof => f.write_str("неожиданный конец ввода"),
                TokenKind::Illegal => write!(f, "недопустимый символ `{literal}`"),
                _ => write!(f, "нет правила разбора для {found}"),
            },
            ParseErrorKind::UnterminatedString => f.write_str("незакрытая строка"),
            ParseErrorKind::ExpectedTypeName { found } => write!(
                f,
                "ожидалось имя типа (число, строка, булево, массив, функция), получен {found}"
            ),
            ParseErrorKind::IntegerOutOfRange { literal } => {
                write!(f, "не удалось разобрать {literal} как целое число")
            }
            ParseErrorKind::InvalidAssignTarget { target } => {
                write!(f, "нельзя присвоить значение выражению {target}")
            }
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for ParseError {}
