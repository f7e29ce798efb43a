//! Errors reported by the driver.

use std::io;
use std::path::PathBuf;

use rustyline::error::ReadlineError;
use slovo_eval::EvalError;
use thiserror::Error;

/// Everything that makes a `slovo` invocation exit with status 1.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("не удалось прочитать {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("ожидался файл с расширением .slv: {}", path.display())]
    WrongExtension { path: PathBuf },

    #[error("команда `{command}` требует путь к файлу")]
    MissingPath { command: &'static str },

    #[error("неизвестный параметр: {option}")]
    UnknownOption { option: String },

    #[error("неверное значение --max-depth: `{value}`")]
    InvalidDepth { value: String },

    #[error("лишний аргумент: {argument}")]
    UnexpectedArgument { argument: String },

    /// Rendered diagnostics, one per line, already prefixed with locations.
    #[error("{}", diagnostics.join("\n"))]
    Parse { diagnostics: Vec<String> },

    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error("ошибка ввода-вывода: {0}")]
    Io(#[from] io::Error),

    #[error("ошибка чтения строки: {0}")]
    Readline(#[from] ReadlineError),
}
