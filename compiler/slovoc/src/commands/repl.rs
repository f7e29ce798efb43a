//! The interactive read-eval-print loop.

use std::io::{BufRead, IsTerminal};

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use slovo_eval::{stdout_handler, Environment, Interpreter, SharedPrintHandler, Value};
use slovo_parse::parse;

use crate::{DriverError, Options};

pub const PROMPT: &str = ">> ";

/// A session: one interpreter whose root environment outlives every line.
///
/// Prompts, results and diagnostics go through the same print handler as
/// `вывести`, so they interleave in the order they happen.
pub struct Repl {
    interpreter: Interpreter,
    out: SharedPrintHandler,
}

impl Repl {
    pub fn new(options: &Options, out: SharedPrintHandler) -> Self {
        let interpreter = Interpreter::builder()
            .env(Environment::new())
            .print_handler(out.clone())
            .max_call_depth(options.max_call_depth)
            .build();
        Repl { interpreter, out }
    }

    /// Parse and evaluate one line.
    ///
    /// Parse errors are printed tab-indented and nothing is evaluated.
    /// Null results print nothing.
    pub fn eval_line(&mut self, line: &str) {
        let output = parse(line);
        if output.has_errors() {
            for err in &output.errors {
                self.out.println(&format!("\t{err}"));
            }
            return;
        }
        match self.interpreter.eval_program(&output.program) {
            Value::Null => {}
            value => self.out.println(&value.to_string()),
        }
    }

    /// Prompt, read, evaluate until `input` runs dry. Used for piped input,
    /// where there is nothing to edit.
    pub fn run(&mut self, mut input: impl BufRead) -> Result<(), DriverError> {
        let mut line = String::new();
        loop {
            self.out.print(PROMPT);
            line.clear();
            if input.read_line(&mut line)? == 0 {
                self.out.println("");
                return Ok(());
            }
            self.eval_line(line.trim_end_matches(['\r', '\n']));
        }
    }

    /// Interactive session with line editing and history. Ctrl+C drops the
    /// current line; Ctrl+D ends the session.
    pub fn run_interactive(&mut self, editor: &mut DefaultEditor) -> Result<(), DriverError> {
        loop {
            match editor.readline(PROMPT) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = editor.add_history_entry(line.as_str());
                    }
                    self.eval_line(&line);
                }
                Err(ReadlineError::Interrupted) => {}
                Err(ReadlineError::Eof) => return Ok(()),
                Err(err) => return Err(err.into()),
            }
        }
    }

    pub fn env(&self) -> &Environment {
        self.interpreter.env()
    }
}

/// Run a session on stdin and stdout: line editing on a terminal, plain
/// line reads otherwise.
pub fn run_repl(options: &Options) -> Result<(), DriverError> {
    let out = stdout_handler();
    let mut repl = Repl::new(options, out.clone());
    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        return repl.run(stdin.lock());
    }

    out.println(&format!(
        "Слово {}. Выход: Ctrl+D.",
        env!("CARGO_PKG_VERSION")
    ));
    let mut editor = DefaultEditor::new()?;
    repl.run_interactive(&mut editor)
}
