//! Command handlers for the `slovo` CLI.
//!
//! Shared helpers for reading sources and rendering parse diagnostics live
//! here in the module root.

use std::path::Path;

use slovo_parse::ParseError;

use crate::DriverError;

mod debug;
mod repl;
mod run;

pub use debug::{lex_file, lex_source, parse_file, render_program};
pub use repl::{run_repl, Repl, PROMPT};
pub use run::{run_file, run_source};

/// Source files must end in `.slv`.
pub const EXTENSION: &str = "slv";

/// Read a whole source file, refusing other extensions.
pub fn read_source(path: &Path) -> Result<String, DriverError> {
    if path.extension().and_then(|ext| ext.to_str()) != Some(EXTENSION) {
        return Err(DriverError::WrongExtension {
            path: path.to_path_buf(),
        });
    }
    std::fs::read_to_string(path).map_err(|source| DriverError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// `label:line:column: message`, one entry per error.
pub fn render_parse_errors(label: &str, source: &str, errors: &[ParseError]) -> Vec<String> {
    errors
        .iter()
        .map(|err| {
            let (line, column) = err.line_col(source);
            format!("{label}:{line}:{column}: {err}")
        })
        .collect()
}
