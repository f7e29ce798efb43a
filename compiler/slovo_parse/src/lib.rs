//! Parser for Slovo.
//!
//! Pratt parser over the token stream of [`slovo_lexer::Lexer`], with one
//! token of lookahead. Parsing never stops at the first mistake: a failed
//! statement is recorded as a [`ParseError`], the parser skips to the next
//! `;` (or the end of the enclosing block) and carries on, so the resulting
//! [`Program`] is a best-effort tree beside a list of every diagnostic.

mod cursor;
mod error;
mod grammar;
mod precedence;

use slovo_ir::{Program, Token};
use slovo_lexer::Lexer;

pub use error::{ParseError, ParseErrorKind};

/// Result of parsing one source unit.
#[derive(Clone, Debug, Default)]
pub struct ParseOutput {
    pub program: Program,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

pub(crate) type ParseResult<T> = Result<T, ParseError>;

/// Parser state: the lexer, the current token, one token of lookahead and
/// the diagnostics collected so far.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    /// Next unconsumed token.
    cur: Token,
    peek: Token,
    errors: Vec<ParseError>,
    /// Number of enclosing `{ }` blocks; recovery stops at `}` only inside one.
    block_depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut lexer = Lexer::new(source);
        let cur = lexer.next_token();
        let peek = lexer.next_token();
        Parser {
            lexer,
            cur,
            peek,
            errors: Vec::new(),
            block_depth: 0,
        }
    }

    /// Diagnostics recorded so far, in source order.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }
}

/// Parse a whole source unit. Never panics; malformed input yields a partial
/// program and a non-empty error list.
pub fn parse(source: &str) -> ParseOutput {
    let mut parser = Parser::new(source);
    let program = parser.parse_program();
    ParseOutput {
        program,
        errors: parser.into_errors(),
    }
}

#[cfg(test)]
mod tests;
