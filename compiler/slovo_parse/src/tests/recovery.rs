//! Diagnostics and error recovery.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use slovo_ir::{Expression, Statement, TokenKind};

use crate::{parse, ParseErrorKind, Parser};

fn error_kinds(source: &str) -> Vec<ParseErrorKind> {
    parse(source).errors.into_iter().map(|e| e.kind).collect()
}

#[test]
fn unknown_type_name() {
    let output = parse("x: 5 = 3;");
    assert!(output.program.is_empty());
    assert_eq!(
        error_kinds("x: 5 = 3;"),
        vec![ParseErrorKind::ExpectedTypeName {
            found: TokenKind::Int
        }]
    );
}

#[test]
fn missing_type_name() {
    assert_eq!(
        error_kinds("x: = 3;"),
        vec![ParseErrorKind::ExpectedTypeName {
            found: TokenKind::Assign
        }]
    );
}

#[test]
fn missing_closing_paren() {
    let output = parse("(1 + 2");
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].to_string(), "ожидался `)`, получен конец ввода");
}

#[test]
fn missing_assign_in_declaration() {
    assert_eq!(
        error_kinds("x: число 5;"),
        vec![ParseErrorKind::UnexpectedToken {
            expected: TokenKind::Assign,
            found: TokenKind::Int
        }]
    );
}

#[test]
fn declaration_needs_terminator_between_statements() {
    assert_eq!(
        error_kinds("x: число = 5 y"),
        vec![ParseErrorKind::UnexpectedToken {
            expected: TokenKind::Semicolon,
            found: TokenKind::Ident
        }]
    );
}

#[test]
fn no_prefix_rule() {
    let output = parse("}; x");
    assert_eq!(
        output.errors[0].kind,
        ParseErrorKind::NoPrefixRule {
            found: TokenKind::RBrace,
            literal: "}".to_string()
        }
    );
    assert_eq!(output.errors[0].to_string(), "нет правила разбора для `}`");
    assert_eq!(output.program.to_string(), "x");
}

#[test]
fn illegal_character() {
    let output = parse("1 @ 2;");
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].to_string(), "недопустимый символ `@`");
}

#[test]
fn unterminated_string_is_reported() {
    let output = parse("x: строка = \"без конца");
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].kind, ParseErrorKind::UnterminatedString);
    assert_eq!(output.errors[0].span.start, "x: строка = ".len() as u32);
}

#[test]
fn integer_out_of_range() {
    let output = parse("99999999999999999999;");
    assert_eq!(
        output.errors[0].kind,
        ParseErrorKind::IntegerOutOfRange {
            literal: "99999999999999999999".to_string()
        }
    );
}

#[test]
fn non_ascii_digits_are_not_integers() {
    let output = parse("x: число = ١٢;");
    assert_eq!(output.errors.len(), 1);
    assert_eq!(
        output.errors[0].kind,
        ParseErrorKind::IntegerOutOfRange {
            literal: "١٢".to_string()
        }
    );
    assert_eq!(output.errors[0].to_string(), "не удалось разобрать ١٢ как целое число");
}

#[test]
fn invalid_assignment_target() {
    let output = parse("1 + 2 = 3;");
    assert_eq!(
        output.errors[0].kind,
        ParseErrorKind::InvalidAssignTarget {
            target: "(1 + 2)".to_string()
        }
    );
    assert_eq!(
        output.errors[0].to_string(),
        "нельзя присвоить значение выражению (1 + 2)"
    );
}

#[test]
fn errors_accumulate_across_statements() {
    let output = parse("x: 5 = 1; y: число = 2; z: = 3; w: число = 4;");
    assert_eq!(output.errors.len(), 2);
    assert_eq!(output.program.to_string(), "y: число = 2;\nw: число = 4;");
}

#[test]
fn recovery_inside_block_keeps_block() {
    let output = parse("f: функция = функция() { @; вернуть 1; };\nf()");
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.program.statements.len(), 2);

    let Statement::Declaration(decl) = &output.program.statements[0] else {
        panic!("expected declaration");
    };
    let Expression::Function(func) = &decl.value else {
        panic!("expected function literal");
    };
    assert_eq!(func.body.to_string(), "{ вернуть 1; }");
}

#[test]
fn error_in_nested_expression_stops_at_block_end() {
    let output = parse("если (x) { y = (1 + ; } z;");
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.program.to_string(), "если (x) { };\nz");
}

#[test]
fn unclosed_block_at_eof_is_tolerated() {
    let output = parse("если (x) { y");
    assert!(!output.has_errors());
    assert_eq!(output.program.to_string(), "если (x) { y }");
}

#[test]
fn bad_function_parameter() {
    assert_eq!(
        error_kinds("функция(1) { }"),
        vec![ParseErrorKind::UnexpectedToken {
            expected: TokenKind::Ident,
            found: TokenKind::Int
        }]
    );
}

#[test]
fn error_location() {
    let source = "x: число = 1;\ny: 5 = 2;";
    let output = parse(source);
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].line_col(source), (2, 4));
}

#[test]
fn parser_errors_accessor() {
    let mut parser = Parser::new("если x");
    let program = parser.parse_program();
    assert!(program.is_empty());
    assert_eq!(parser.errors().len(), 1);
}

#[test]
fn empty_source() {
    let output = parse("");
    assert!(!output.has_errors());
    assert!(output.program.is_empty());
    let output = parse("  \n\t ");
    assert!(output.program.is_empty());
}
