use super::*;

#[test]
fn keyword_table_resolves_cyrillic_words() {
    assert_eq!(TokenKind::keyword("функция"), Some(TokenKind::Function));
    assert_eq!(TokenKind::keyword("истина"), Some(TokenKind::True));
    assert_eq!(TokenKind::keyword("ложь"), Some(TokenKind::False));
    assert_eq!(TokenKind::keyword("если"), Some(TokenKind::If));
    assert_eq!(TokenKind::keyword("иначе"), Some(TokenKind::Else));
    assert_eq!(TokenKind::keyword("вернуть"), Some(TokenKind::Return));
    assert_eq!(TokenKind::keyword("цикл"), Some(TokenKind::Loop));
    assert_eq!(TokenKind::keyword("число"), Some(TokenKind::IntType));
    assert_eq!(TokenKind::keyword("строка"), Some(TokenKind::StrType));
    assert_eq!(TokenKind::keyword("булево"), Some(TokenKind::BoolType));
    assert_eq!(TokenKind::keyword("массив"), Some(TokenKind::ArrayType));
}

#[test]
fn non_keywords_are_identifiers() {
    assert_eq!(TokenKind::keyword("фиб"), None);
    assert_eq!(TokenKind::keyword("if"), None);
    // Keywords are case-sensitive.
    assert_eq!(TokenKind::keyword("Если"), None);
}

#[test]
fn every_keyword_round_trips_through_spelling() {
    let keywords = [
        TokenKind::Function,
        TokenKind::True,
        TokenKind::False,
        TokenKind::If,
        TokenKind::Else,
        TokenKind::Return,
        TokenKind::Loop,
        TokenKind::IntType,
        TokenKind::StrType,
        TokenKind::BoolType,
        TokenKind::ArrayType,
    ];
    for kind in keywords {
        let spelling = kind.spelling().unwrap_or_default();
        assert_eq!(TokenKind::keyword(spelling), Some(kind), "{spelling}");
    }
}

#[test]
fn dummy_token_uses_canonical_spelling() {
    let tok = Token::dummy(TokenKind::LtEq);
    assert_eq!(tok.literal, "<=");
    assert!(tok.is(TokenKind::LtEq));
    assert_eq!(Token::dummy(TokenKind::Ident).literal, "");
}

#[test]
fn display_describes_kinds() {
    assert_eq!(TokenKind::RParen.to_string(), "`)`");
    assert_eq!(TokenKind::Eof.to_string(), "конец ввода");
    assert_eq!(TokenKind::Ident.to_string(), "идентификатор");
}
