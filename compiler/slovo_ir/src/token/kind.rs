//! Token kinds and the keyword table.

use std::fmt;

/// Lexical category of a token.
///
/// The set is closed: operators, delimiters, literals, identifiers,
/// keywords (control and type names), end-of-input and illegal input.
/// Literal text lives on [`Token`](super::Token), so the kind stays `Copy`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// Unrecognized code point or unterminated string literal.
    Illegal,
    /// End of input. Returned forever once the source is exhausted.
    Eof,

    Ident,
    /// Integer literal (decimal digits; value parsed by the parser).
    Int,
    /// String literal (literal text excludes the quotes).
    Str,

    // Operators
    Assign,
    Eq,
    NotEq,
    Plus,
    Minus,
    Star,
    Slash,
    Bang,
    Lt,
    Gt,
    LtEq,
    GtEq,

    // Delimiters
    Colon,
    Comma,
    Semicolon,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,

    // Keywords
    Function, // функция
    True,     // истина
    False,    // ложь
    If,       // если
    Else,     // иначе
    Return,   // вернуть
    Loop,     // цикл

    // Type keywords
    IntType,   // число
    StrType,   // строка
    BoolType,  // булево
    ArrayType, // массив
}

impl TokenKind {
    /// Look up a reserved word.
    ///
    /// Returns `None` for ordinary identifiers. `функция` is both the
    /// function-literal keyword and the function type name; the parser
    /// tells the two uses apart by position.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        let kind = match text {
            "функция" => TokenKind::Function,
            "истина" => TokenKind::True,
            "ложь" => TokenKind::False,
            "если" => TokenKind::If,
            "иначе" => TokenKind::Else,
            "вернуть" => TokenKind::Return,
            "цикл" => TokenKind::Loop,
            "число" => TokenKind::IntType,
            "строка" => TokenKind::StrType,
            "булево" => TokenKind::BoolType,
            "массив" => TokenKind::ArrayType,
            _ => return None,
        };
        Some(kind)
    }

    /// Fixed spelling of operators, delimiters and keywords.
    ///
    /// Returns `None` for kinds whose text varies (identifiers, literals,
    /// illegal input) and for EOF.
    pub const fn spelling(self) -> Option<&'static str> {
        let s = match self {
            TokenKind::Assign => "=",
            TokenKind::Eq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Bang => "!",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::LtEq => "<=",
            TokenKind::GtEq => ">=",
            TokenKind::Colon => ":",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Function => "функция",
            TokenKind::True => "истина",
            TokenKind::False => "ложь",
            TokenKind::If => "если",
            TokenKind::Else => "иначе",
            TokenKind::Return => "вернуть",
            TokenKind::Loop => "цикл",
            TokenKind::IntType => "число",
            TokenKind::StrType => "строка",
            TokenKind::BoolType => "булево",
            TokenKind::ArrayType => "массив",
            TokenKind::Illegal
            | TokenKind::Eof
            | TokenKind::Ident
            | TokenKind::Int
            | TokenKind::Str => return None,
        };
        Some(s)
    }
}

/// Human-readable description used in parse diagnostics.
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Illegal => f.write_str("недопустимый символ"),
            TokenKind::Eof => f.write_str("конец ввода"),
            TokenKind::Ident => f.write_str("идентификатор"),
            TokenKind::Int => f.write_str("целое число"),
            TokenKind::Str => f.write_str("строковый литерал"),
            other => match other.spelling() {
                Some(s) => write!(f, "`{s}`"),
                None => write!(f, "{other:?}"),
            },
        }
    }
}
