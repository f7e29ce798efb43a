//! Expression grammar: prefix forms and infix continuations.

use std::rc::Rc;

use slovo_ir::{
    ArrayLiteral, BooleanLiteral, CallExpression, Expression, FunctionLiteral, Identifier,
    IfExpression, IndexExpression, InfixExpression, InfixOp, IntegerLiteral, LoopExpression,
    PrefixExpression, PrefixOp, StringLiteral, TokenKind,
};
use slovo_stack::ensure_sufficient_stack;

use crate::precedence::Precedence;
use crate::{ParseError, ParseResult, Parser};

impl Parser<'_> {
    /// Parse one prefix form, then fold infix continuations that bind
    /// tighter than `min`.
    pub(crate) fn parse_expression(&mut self, min: Precedence) -> ParseResult<Expression> {
        ensure_sufficient_stack(|| self.parse_expression_inner(min))
    }

    fn parse_expression_inner(&mut self, min: Precedence) -> ParseResult<Expression> {
        let mut left = self.parse_prefix()?;

        loop {
            let precedence = Precedence::of(self.cur.kind);
            if precedence <= min {
                return Ok(left);
            }
            left = match self.cur.kind {
                TokenKind::LParen => self.parse_call(left)?,
                TokenKind::LBracket => self.parse_index(left)?,
                TokenKind::Assign => self.parse_assign(left)?,
                _ => self.parse_infix(left, precedence)?,
            };
        }
    }

    fn parse_prefix(&mut self) -> ParseResult<Expression> {
        match self.cur.kind {
            TokenKind::Ident => Ok(Expression::Identifier(Identifier::from_token(
                self.advance(),
            ))),
            TokenKind::Int => self.parse_integer(),
            TokenKind::Str => {
                let token = self.advance();
                let value = token.literal.clone();
                Ok(Expression::Str(StringLiteral { token, value }))
            }
            TokenKind::True | TokenKind::False => {
                let token = self.advance();
                let value = token.is(TokenKind::True);
                Ok(Expression::Boolean(BooleanLiteral { token, value }))
            }
            TokenKind::Bang | TokenKind::Minus => self.parse_prefix_operator(),
            TokenKind::LParen => self.parse_grouped(),
            TokenKind::LBracket => {
                let token = self.advance();
                let elements = self.parse_expression_list(TokenKind::RBracket)?;
                Ok(Expression::Array(ArrayLiteral { token, elements }))
            }
            TokenKind::If => self.parse_if(),
            TokenKind::Loop => self.parse_loop(),
            TokenKind::Function => self.parse_function(),
            _ => Err(ParseError::no_prefix_rule(&self.cur)),
        }
    }

    fn parse_integer(&mut self) -> ParseResult<Expression> {
        let token = self.advance();
        let Ok(value) = token.literal.parse::<i64>() else {
            return Err(ParseError::integer_out_of_range(&token));
        };
        Ok(Expression::Integer(IntegerLiteral { token, value }))
    }

    fn parse_prefix_operator(&mut self) -> ParseResult<Expression> {
        let token = self.advance();
        let Some(op) = PrefixOp::from_token_kind(token.kind) else {
            return Err(ParseError::no_prefix_rule(&token));
        };
        let right = self.parse_expression(Precedence::Prefix)?;
        Ok(Expression::Prefix(PrefixExpression {
            token,
            op,
            right: Box::new(right),
        }))
    }

    fn parse_grouped(&mut self) -> ParseResult<Expression> {
        self.advance();
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect(TokenKind::RParen)?;
        Ok(expr)
    }

    /// `( условие )`, shared by `если` and `цикл`.
    fn parse_condition(&mut self) -> ParseResult<Expression> {
        self.expect(TokenKind::LParen)?;
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect(TokenKind::RParen)?;
        Ok(condition)
    }

    fn parse_if(&mut self) -> ParseResult<Expression> {
        let token = self.advance();
        let condition = self.parse_condition()?;
        let consequence = self.parse_block()?;
        let alternative = if self.eat(TokenKind::Else) {
            Some(self.parse_block()?)
        } else {
            None
        };
        Ok(Expression::If(IfExpression {
            token,
            condition: Box::new(condition),
            consequence,
            alternative,
        }))
    }

    fn parse_loop(&mut self) -> ParseResult<Expression> {
        let token = self.advance();
        let condition = self.parse_condition()?;
        let body = self.parse_block()?;
        Ok(Expression::Loop(LoopExpression {
            token,
            condition: Box::new(condition),
            body,
        }))
    }

    /// `функция(a, b) { ... }`
    fn parse_function(&mut self) -> ParseResult<Expression> {
        let token = self.advance();
        self.expect(TokenKind::LParen)?;

        let mut parameters = Vec::new();
        if !self.eat(TokenKind::RParen) {
            loop {
                let name = self.expect(TokenKind::Ident)?;
                parameters.push(Identifier::from_token(name));
                if !self.eat(TokenKind::Comma) {
                    self.expect(TokenKind::RParen)?;
                    break;
                }
            }
        }

        let body = self.parse_block()?;
        Ok(Expression::Function(Rc::new(FunctionLiteral {
            token,
            parameters,
            body,
        })))
    }

    /// Comma-separated expressions up to and including `close`.
    fn parse_expression_list(&mut self, close: TokenKind) -> ParseResult<Vec<Expression>> {
        let mut items = Vec::new();
        if self.eat(close) {
            return Ok(items);
        }
        loop {
            items.push(self.parse_expression(Precedence::Lowest)?);
            if !self.eat(TokenKind::Comma) {
                self.expect(close)?;
                return Ok(items);
            }
        }
    }

    fn parse_infix(&mut self, left: Expression, precedence: Precedence) -> ParseResult<Expression> {
        let token = self.advance();
        let Some(op) = InfixOp::from_token_kind(token.kind) else {
            return Err(ParseError::no_prefix_rule(&token));
        };
        let right = self.parse_expression(precedence)?;
        Ok(Expression::Infix(InfixExpression {
            token,
            left: Box::new(left),
            op,
            right: Box::new(right),
        }))
    }

    /// `имя = значение`, right associative.
    fn parse_assign(&mut self, left: Expression) -> ParseResult<Expression> {
        if !matches!(left, Expression::Identifier(_)) {
            return Err(ParseError::invalid_assign_target(&left, self.cur.span));
        }
        let token = self.advance();
        let right = self.parse_expression(Precedence::Lowest)?;
        Ok(Expression::Infix(InfixExpression {
            token,
            left: Box::new(left),
            op: InfixOp::Assign,
            right: Box::new(right),
        }))
    }

    fn parse_call(&mut self, function: Expression) -> ParseResult<Expression> {
        let token = self.advance();
        let arguments = self.parse_expression_list(TokenKind::RParen)?;
        Ok(Expression::Call(CallExpression {
            token,
            function: Box::new(function),
            arguments,
        }))
    }

    fn parse_index(&mut self, left: Expression) -> ParseResult<Expression> {
        let token = self.advance();
        let index = self.parse_expression(Precedence::Lowest)?;
        self.expect(TokenKind::RBracket)?;
        Ok(Expression::Index(IndexExpression {
            token,
            left: Box::new(left),
            index: Box::new(index),
        }))
    }
}
