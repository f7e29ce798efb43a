//! Command-line parsing.
//!
//! Arguments are few enough to be matched by hand:
//!
//! ```text
//! slovo [repl]                      interactive session
//! slovo run <file.slv>              run a file
//! slovo <file.slv>                  same as `run`
//! slovo lex <file.slv>              token dump
//! slovo parse <file.slv>            canonical rendering and diagnostics
//! slovo help | --help | -h
//! slovo version | --version | -V
//!
//! options: --max-depth=<n>          call-depth limit
//! ```

use std::path::PathBuf;

use slovo_eval::DEFAULT_MAX_CALL_DEPTH;

use crate::DriverError;

/// What to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Repl,
    Run(PathBuf),
    Lex(PathBuf),
    Parse(PathBuf),
    Help,
    Version,
}

/// Settings shared by every command that evaluates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Options {
    pub max_call_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
        }
    }
}

/// A parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub command: Command,
    pub options: Options,
}

/// Parse the arguments after the program name.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Invocation, DriverError> {
    let mut options = Options::default();
    let mut positional = Vec::new();

    for arg in args {
        let arg = arg.as_ref();
        if let Some(value) = arg.strip_prefix("--max-depth=") {
            options.max_call_depth = value
                .parse()
                .map_err(|_| DriverError::InvalidDepth {
                    value: value.to_string(),
                })?;
        } else if matches!(arg, "-h" | "--help") {
            positional.push("help");
        } else if matches!(arg, "-V" | "--version") {
            positional.push("version");
        } else if arg.starts_with('-') {
            return Err(DriverError::UnknownOption {
                option: arg.to_string(),
            });
        } else {
            positional.push(arg);
        }
    }

    let mut rest = positional.into_iter();
    let command = match rest.next() {
        None | Some("repl") => Command::Repl,
        Some("help") => Command::Help,
        Some("version") => Command::Version,
        Some("run") => Command::Run(path_arg("run", rest.next())?),
        Some("lex") => Command::Lex(path_arg("lex", rest.next())?),
        Some("parse") => Command::Parse(path_arg("parse", rest.next())?),
        Some(file) => Command::Run(PathBuf::from(file)),
    };

    if let Some(extra) = rest.next() {
        return Err(DriverError::UnexpectedArgument {
            argument: extra.to_string(),
        });
    }

    Ok(Invocation { command, options })
}

fn path_arg(command: &'static str, arg: Option<&str>) -> Result<PathBuf, DriverError> {
    arg.map(PathBuf::from)
        .ok_or_else(|| DriverError::MissingPath { command })
}

/// Text printed by `slovo help`.
pub fn usage() -> String {
    format!(
        "\
Слово {version}

Использование:
  slovo [repl]              интерактивный режим
  slovo run <файл.slv>      выполнить файл
  slovo <файл.slv>          то же, что run
  slovo lex <файл.slv>      показать токены
  slovo parse <файл.slv>    показать разобранную программу
  slovo help                эта справка
  slovo version             версия

Параметры:
  --max-depth=<n>           предельная глубина вызовов (по умолчанию {depth})

Журнал: переменная окружения SLOVO_LOG (или RUST_LOG), например SLOVO_LOG=debug",
        version = env!("CARGO_PKG_VERSION"),
        depth = DEFAULT_MAX_CALL_DEPTH,
    )
}

#[cfg(test)]
mod tests;
