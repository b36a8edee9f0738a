// src/main.rs
use clap::Parser as _;
use ltt::{Args, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Unknown flags and missing option values exit 1; --help and
    // --version exit 0.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(err) = run(args) {
        eprintln!("Error: {err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
