//! Slovo driver - the `slovo` command-line tool.
//!
//! The binary is a thin shell over this library: argument parsing in
//! [`cli`], one handler per command in [`commands`], and logging setup.
//! The pipeline is always the same: parse, and only if the parser reported
//! nothing, evaluate.

pub mod cli;
pub mod commands;
mod error;
mod tracing_setup;

pub use cli::{parse_args, Command, Invocation, Options};
pub use error::DriverError;
pub use tracing_setup::init_tracing;

/// Execute a parsed command line.
pub fn dispatch(invocation: &Invocation) -> Result<(), DriverError> {
    let options = &invocation.options;
    match &invocation.command {
        Command::Repl => commands::run_repl(options),
        Command::Run(path) => commands::run_file(path, options),
        Command::Lex(path) => commands::lex_file(path),
        Command::Parse(path) => commands::parse_file(path),
        Command::Help => {
            println!("{}", cli::usage());
            Ok(())
        }
        Command::Version => {
            println!("slovo {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
