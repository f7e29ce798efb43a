//! Lexer for Slovo.
//!
//! Hand-written, one token per [`Lexer::next_token`] call. The source is
//! walked code point by code point so Cyrillic identifiers and keywords are
//! read exactly like Latin ones.
//!
//! The lexer never fails: anything it cannot classify comes back as a
//! [`TokenKind::Illegal`] token and the parser reports it.

mod cursor;

use slovo_ir::{Span, Token, TokenKind};

use cursor::Cursor;

/// Streaming lexer. Once the source is exhausted every call to
/// [`next_token`](Lexer::next_token) returns an EOF token.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Lexer {
            cursor: Cursor::new(source),
        }
    }

    /// Produce the next token.
    pub fn next_token(&mut self) -> Token {
        self.cursor.eat_while(is_whitespace);

        let start = self.cursor.pos();
        let Some(c) = self.cursor.current() else {
            return Token::new(TokenKind::Eof, "", Span::from_offsets(start, start));
        };

        let kind = match c {
            '=' => self.one_or_two(TokenKind::Assign, TokenKind::Eq),
            '!' => self.one_or_two(TokenKind::Bang, TokenKind::NotEq),
            '<' => self.one_or_two(TokenKind::Lt, TokenKind::LtEq),
            '>' => self.one_or_two(TokenKind::Gt, TokenKind::GtEq),
            '+' => self.single(TokenKind::Plus),
            '-' => self.single(TokenKind::Minus),
            '*' => self.single(TokenKind::Star),
            '/' => self.single(TokenKind::Slash),
            ':' => self.single(TokenKind::Colon),
            ',' => self.single(TokenKind::Comma),
            ';' => self.single(TokenKind::Semicolon),
            '(' => self.single(TokenKind::LParen),
            ')' => self.single(TokenKind::RParen),
            '{' => self.single(TokenKind::LBrace),
            '}' => self.single(TokenKind::RBrace),
            '[' => self.single(TokenKind::LBracket),
            ']' => self.single(TokenKind::RBracket),
            '"' => return self.string(start),
            c if is_letter(c) => {
                self.cursor.eat_while(is_letter);
                let text = self.cursor.slice_from(start);
                TokenKind::keyword(text).unwrap_or(TokenKind::Ident)
            }
            c if is_digit(c) => {
                self.cursor.eat_while(is_digit);
                TokenKind::Int
            }
            _ => self.single(TokenKind::Illegal),
        };

        self.token(kind, start)
    }

    fn token(&self, kind: TokenKind, start: usize) -> Token {
        let end = self.cursor.pos();
        Token::new(
            kind,
            self.cursor.slice_from(start),
            Span::from_offsets(start, end),
        )
    }

    #[inline]
    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.advance();
        kind
    }

    /// `short`, or `long` when the next code point is `=`.
    fn one_or_two(&mut self, short: TokenKind, long: TokenKind) -> TokenKind {
        if self.cursor.peek() == Some('=') {
            self.cursor.advance();
            self.cursor.advance();
            long
        } else {
            self.single(short)
        }
    }

    /// String literal. The token literal excludes the quotes; an unclosed
    /// literal becomes `Illegal` carrying everything from the opening quote.
    fn string(&mut self, start: usize) -> Token {
        self.cursor.advance();
        let body_start = self.cursor.pos();

        if !self.cursor.eat_until('"') {
            return self.token(TokenKind::Illegal, start);
        }

        let value = self.cursor.slice_from(body_start);
        self.cursor.advance();
        Token::new(
            TokenKind::Str,
            value,
            Span::from_offsets(start, self.cursor.pos()),
        )
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields tokens up to, not including, EOF.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (!token.is(TokenKind::Eof)).then_some(token)
    }
}

/// Lex a whole source into a token vector terminated by exactly one EOF.
pub fn lex(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.is(TokenKind::Eof);
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}

#[inline]
fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Any Unicode numeric code point. Only ASCII digits make a valid
/// integer; the parser reports the rest when it converts the literal.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_numeric()
}

/// Alphabetic code point from the Latin or Cyrillic blocks.
pub fn is_letter(c: char) -> bool {
    if c.is_ascii_alphabetic() {
        return true;
    }
    c.is_alphabetic()
        && matches!(
            u32::from(c),
            0x00C0..=0x024F     // Latin-1 Supplement letters, Latin Extended-A/B
            | 0x1E00..=0x1EFF   // Latin Extended Additional
            | 0x0400..=0x052F   // Cyrillic, Cyrillic Supplement
            | 0x1C80..=0x1C8F   // Cyrillic Extended-C
            | 0x2DE0..=0x2DFF   // Cyrillic Extended-A
            | 0xA640..=0xA69F // Cyrillic Extended-B
        )
}
