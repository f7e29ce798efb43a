//! REPL sessions driven from in-memory input.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::io::Cursor;

use pretty_assertions::assert_eq;
use rustyline::error::ReadlineError;
use slovo_eval::{buffer_handler, Value};
use slovoc::commands::{Repl, PROMPT};
use slovoc::{DriverError, Options};

fn session(input: &str) -> String {
    let out = buffer_handler();
    Repl::new(&Options::default(), out.clone())
        .run(Cursor::new(input.to_string()))
        .unwrap();
    out.get_output()
}

#[test]
fn bindings_persist_between_lines() {
    let output = session("x: число = 20;\nx + 22\n");
    assert_eq!(output, format!("{PROMPT}{PROMPT}42\n{PROMPT}\n"));
}

#[test]
fn parse_errors_are_tab_indented_and_the_session_continues() {
    let output = session("x: = 1;\n5\n");
    let lines: Vec<&str> = output.lines().collect();
    assert!(lines[0].starts_with(&format!("{PROMPT}\t")));
    assert!(lines[1].ends_with('5'));
}

#[test]
fn null_results_print_nothing() {
    let output = session("вывести(\"привет\")\n");
    assert_eq!(output, format!("{PROMPT}привет\n{PROMPT}\n"));
}

#[test]
fn evaluation_errors_are_shown_and_forgiven() {
    let output = session("нечто\n1\n");
    assert_eq!(
        output,
        format!("{PROMPT}нет переменной: нечто\n{PROMPT}1\n{PROMPT}\n")
    );
}

#[test]
fn closures_survive_their_line() {
    let out = buffer_handler();
    let mut repl = Repl::new(&Options::default(), out.clone());
    repl.eval_line("удвоить: функция = функция(x) { x * 2 };");
    repl.eval_line("удвоить(21)");
    assert_eq!(out.get_output(), "42\n");
    assert_eq!(repl.env().lookup("удвоить").map(|v| v.is_null()), Some(false));
    assert!(matches!(repl.env().lookup("удвоить"), Some(Value::Function(_))));
}

#[test]
fn line_editor_failures_are_driver_errors() {
    let err = DriverError::from(ReadlineError::Eof);
    assert!(matches!(err, DriverError::Readline(_)));
    assert!(err.to_string().starts_with("ошибка чтения строки"));
}
