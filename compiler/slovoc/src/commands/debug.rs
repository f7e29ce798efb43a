//! Debug commands: `lex` and `parse` for inspecting the front end.

use std::fmt::Write;
use std::path::Path;

use slovo_ir::Program;
use slovo_lexer::lex;
use slovo_parse::parse;

use super::{read_source, render_parse_errors};
use crate::DriverError;

/// One line per token: position, kind, and the text it was read from.
pub fn lex_source(source: &str) -> String {
    let mut out = String::new();
    for token in lex(source) {
        let (line, column) = token.span.line_col(source);
        let _ = writeln!(out, "{line}:{column}\t{:?}\t{:?}", token.kind, token.literal);
    }
    out
}

/// Canonical rendering, one statement per line.
pub fn render_program(program: &Program) -> String {
    if program.is_empty() {
        return String::new();
    }
    format!("{program}\n")
}

pub fn lex_file(path: &Path) -> Result<(), DriverError> {
    let source = read_source(path)?;
    print!("{}", lex_source(&source));
    Ok(())
}

/// Print what parsed; diagnostics come back as an error.
pub fn parse_file(path: &Path) -> Result<(), DriverError> {
    let source = read_source(path)?;
    let output = parse(&source);
    print!("{}", render_program(&output.program));
    if output.has_errors() {
        return Err(DriverError::Parse {
            diagnostics: render_parse_errors(&path.display().to_string(), &source, &output.errors),
        });
    }
    Ok(())
}
