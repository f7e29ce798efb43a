//! Token navigation on [`Parser`].

use std::mem;

use slovo_ir::{Token, TokenKind};
use tracing::trace;

use crate::{ParseError, ParseResult, Parser};

impl Parser<'_> {
    #[inline]
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.cur.is(kind)
    }

    #[inline]
    pub(crate) fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.is(kind)
    }

    #[inline]
    pub(crate) fn at_eof(&self) -> bool {
        self.cur.is(TokenKind::Eof)
    }

    /// Consume the current token and return it.
    pub(crate) fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        let peek = mem::replace(&mut self.peek, next);
        let token = mem::replace(&mut self.cur, peek);
        trace!(
            kind = ?token.kind,
            literal = %token.literal,
            span_start = token.span.start,
            span_end = token.span.end,
            "advance"
        );
        token
    }

    /// Consume the current token if it is `kind`.
    pub(crate) fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a `kind` token or fail with an expected-vs-found error.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> ParseResult<Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::unexpected(kind, &self.cur))
        }
    }

    /// Skip past the failed statement.
    ///
    /// Stops after the next `;`, at end of input, or in front of the `}`
    /// closing the current block. At top level a stray `}` is skipped.
    pub(crate) fn synchronize(&mut self) {
        loop {
            match self.cur.kind {
                TokenKind::Eof => return,
                TokenKind::Semicolon => {
                    self.advance();
                    return;
                }
                TokenKind::RBrace if self.block_depth > 0 => return,
                _ => {
                    self.advance();
                }
            }
        }
    }
}
