//! Statement-level grammar.

mod expr;

use slovo_ir::{
    Block, Declaration, ExpressionStatement, Identifier, Program, ReturnStatement, Statement,
    TokenKind, TypeTag,
};
use tracing::debug;

use crate::precedence::Precedence;
use crate::{ParseError, ParseResult, Parser};

impl Parser<'_> {
    /// Parse statements until end of input, recording and skipping failures.
    pub fn parse_program(&mut self) -> Program {
        let mut statements = Vec::new();
        while !self.at_eof() {
            if self.eat(TokenKind::Semicolon) {
                continue;
            }
            self.parse_statement_into(&mut statements);
        }
        Program::new(statements)
    }

    fn parse_statement_into(&mut self, statements: &mut Vec<Statement>) {
        match self.parse_statement() {
            Ok(stmt) => statements.push(stmt),
            Err(error) => {
                debug!(%error, span = %error.span, "statement skipped");
                self.errors.push(error);
                self.synchronize();
            }
        }
    }

    pub(crate) fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.cur.kind {
            TokenKind::Return => self.parse_return().map(Statement::Return),
            TokenKind::Ident if self.peek_is(TokenKind::Colon) => {
                self.parse_declaration().map(Statement::Declaration)
            }
            _ => self.parse_expression_statement().map(Statement::Expression),
        }
    }

    /// `имя: тип = значение;`
    fn parse_declaration(&mut self) -> ParseResult<Declaration> {
        let token = self.advance();
        let name = Identifier::from_token(token.clone());
        self.expect(TokenKind::Colon)?;

        let Some(declared) = TypeTag::from_token_kind(self.cur.kind) else {
            return Err(ParseError::expected_type_name(&self.cur));
        };
        self.advance();

        self.expect(TokenKind::Assign)?;
        let value = self.parse_expression(Precedence::Lowest)?;
        self.expect_terminator()?;

        Ok(Declaration {
            token,
            name,
            declared,
            value,
        })
    }

    /// `вернуть значение;` or bare `вернуть;`
    fn parse_return(&mut self) -> ParseResult<ReturnStatement> {
        let token = self.advance();
        let value = if self.at_statement_end() {
            None
        } else {
            Some(self.parse_expression(Precedence::Lowest)?)
        };
        self.expect_terminator()?;
        Ok(ReturnStatement { token, value })
    }

    fn parse_expression_statement(&mut self) -> ParseResult<ExpressionStatement> {
        let token = self.cur.clone();
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.eat(TokenKind::Semicolon);
        Ok(ExpressionStatement { token, expression })
    }

    /// `{ statement* }`. A missing `}` at end of input is tolerated.
    pub(crate) fn parse_block(&mut self) -> ParseResult<Block> {
        let token = self.expect(TokenKind::LBrace)?;

        self.block_depth += 1;
        let mut statements = Vec::new();
        while !self.check(TokenKind::RBrace) && !self.at_eof() {
            if self.eat(TokenKind::Semicolon) {
                continue;
            }
            self.parse_statement_into(&mut statements);
        }
        self.block_depth -= 1;

        self.eat(TokenKind::RBrace);
        Ok(Block { token, statements })
    }

    fn at_statement_end(&self) -> bool {
        matches!(
            self.cur.kind,
            TokenKind::Semicolon | TokenKind::RBrace | TokenKind::Eof
        )
    }

    /// `;` closing a declaration or return. It may be left out right before
    /// `}` or end of input.
    fn expect_terminator(&mut self) -> ParseResult<()> {
        match self.cur.kind {
            TokenKind::Semicolon => {
                self.advance();
                Ok(())
            }
            TokenKind::RBrace | TokenKind::Eof => Ok(()),
            _ => Err(ParseError::unexpected(TokenKind::Semicolon, &self.cur)),
        }
    }
}
