#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;

use super::*;

fn command(args: &[&str]) -> Command {
    parse_args(args).unwrap().command
}

#[test]
fn no_arguments_start_the_repl() {
    assert_eq!(command(&[]), Command::Repl);
    assert_eq!(command(&["repl"]), Command::Repl);
}

#[test]
fn file_commands() {
    assert_eq!(command(&["run", "a.slv"]), Command::Run("a.slv".into()));
    assert_eq!(command(&["a.slv"]), Command::Run("a.slv".into()));
    assert_eq!(command(&["lex", "a.slv"]), Command::Lex("a.slv".into()));
    assert_eq!(command(&["parse", "a.slv"]), Command::Parse("a.slv".into()));
}

#[test]
fn help_and_version_flags() {
    assert_eq!(command(&["--help"]), Command::Help);
    assert_eq!(command(&["-V"]), Command::Version);
    assert!(usage().contains("--max-depth"));
}

#[test]
fn max_depth_option() {
    let invocation = parse_args(&["--max-depth=50", "run", "a.slv"]).unwrap();
    assert_eq!(invocation.options.max_call_depth, 50);
    assert_eq!(
        parse_args(&["repl"]).unwrap().options.max_call_depth,
        DEFAULT_MAX_CALL_DEPTH
    );
}

#[test]
fn bad_arguments() {
    assert!(matches!(
        parse_args(&["--max-depth=много"]),
        Err(DriverError::InvalidDepth { .. })
    ));
    assert!(matches!(
        parse_args(&["--fast"]),
        Err(DriverError::UnknownOption { .. })
    ));
    assert!(matches!(
        parse_args(&["run"]),
        Err(DriverError::MissingPath { command: "run" })
    ));
    assert!(matches!(
        parse_args(&["run", "a.slv", "b.slv"]),
        Err(DriverError::UnexpectedArgument { .. })
    ));
}
