//! Declared type names.

use std::fmt;

use crate::TokenKind;

/// Type named in a declaration (`имя: число = 5;`).
///
/// Checked against the runtime value at evaluation time; there is no
/// static inference.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeTag {
    Integer,
    String,
    Boolean,
    Array,
    /// Closures and builtins alike.
    Function,
}

impl TypeTag {
    /// Map a type keyword token to its tag.
    pub fn from_token_kind(kind: TokenKind) -> Option<TypeTag> {
        match kind {
            TokenKind::IntType => Some(TypeTag::Integer),
            TokenKind::StrType => Some(TypeTag::String),
            TokenKind::BoolType => Some(TypeTag::Boolean),
            TokenKind::ArrayType => Some(TypeTag::Array),
            TokenKind::Function => Some(TypeTag::Function),
            _ => None,
        }
    }

    /// Source spelling of the type name.
    pub const fn name(self) -> &'static str {
        match self {
            TypeTag::Integer => "число",
            TypeTag::String => "строка",
            TypeTag::Boolean => "булево",
            TypeTag::Array => "массив",
            TypeTag::Function => "функция",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
