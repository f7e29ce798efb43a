//! Slovo CLI

use slovoc::{dispatch, init_tracing, parse_args};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = parse_args(&args).and_then(|invocation| dispatch(&invocation));

    if let Err(err) = result {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
