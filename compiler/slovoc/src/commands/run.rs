//! The `run` command.

use std::path::Path;

use slovo_eval::{stdout_handler, Interpreter, SharedPrintHandler, Value};
use slovo_parse::parse;

use super::{read_source, render_parse_errors};
use crate::{DriverError, Options};

/// Parse and evaluate `source`.
///
/// Nothing is evaluated when the parser reports errors. An evaluation
/// error becomes [`DriverError::Eval`]; any other final value is returned.
pub fn run_source(
    source: &str,
    label: &str,
    options: &Options,
    handler: SharedPrintHandler,
) -> Result<Value, DriverError> {
    let output = parse(source);
    if output.has_errors() {
        return Err(DriverError::Parse {
            diagnostics: render_parse_errors(label, source, &output.errors),
        });
    }

    let mut interpreter = Interpreter::builder()
        .print_handler(handler)
        .max_call_depth(options.max_call_depth)
        .build();
    match interpreter.eval_program(&output.program) {
        Value::Error(err) => Err(err.into()),
        value => Ok(value),
    }
}

/// Run a `.slv` file, printing its final value unless it is Null.
pub fn run_file(path: &Path, options: &Options) -> Result<(), DriverError> {
    let source = read_source(path)?;
    let label = path.display().to_string();
    tracing::debug!(file = %label, bytes = source.len(), "running");

    let handler = stdout_handler();
    let value = run_source(&source, &label, options, handler.clone())?;
    if !value.is_null() {
        handler.println(&value.to_string());
    }
    Ok(())
}
