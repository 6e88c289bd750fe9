//! Genesis CLI binary.
//!
//! This is the entry point for the `genesis` command-line tool. It builds the
//! command registry, separates global options from the command line,
//! initializes logging via `tracing`, and dispatches to the matching command
//! handler. Errors are rendered on standard error and mapped to exit codes.

mod commands;
mod logging;

use std::process::ExitCode;

use genesis_util::errors::{GenesisError, GenesisResult};
use genesis_util::term;
use miette::Diagnostic;

fn main() -> ExitCode {
    match argv().and_then(run) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::from(err.exit_code())
        }
    }
}

/// Command-line arguments, minus the program name. Every argument must be
/// valid UTF-8.
fn argv() -> GenesisResult<Vec<String>> {
    std::env::args_os()
        .skip(1)
        .map(|arg| {
            arg.into_string().map_err(|bad| {
                GenesisError::usage(format!(
                    "argument '{}' is not valid UTF-8",
                    bad.to_string_lossy()
                ))
            })
        })
        .collect()
}

fn run(argv: Vec<String>) -> GenesisResult<()> {
    let router = commands::registry()?;
    let (options, invocation) = router.resolve(argv)?;
    logging::init(&options);
    router.dispatch(&invocation, &options)
}

fn report(err: &GenesisError) {
    match err {
        GenesisError::Prerequisites { diagnostics } => {
            for diagnostic in diagnostics {
                let mut lines = diagnostic.lines();
                if let Some(headline) = lines.next() {
                    term::alert(headline);
                }
                lines.for_each(term::detail);
            }
            eprintln!();
            term::red_line("GENESIS PREREQ CHECKS FAILED!!");
            if let Some(help) = err.help() {
                term::red_line(&help.to_string());
            }
        }
        GenesisError::Usage { message, .. } => {
            eprintln!("USAGE: {message}");
            if let Some(help) = err.help() {
                term::detail(&help.to_string());
            }
        }
        _ => {
            term::alert(&err.to_string());
            if let Some(help) = err.help() {
                term::detail(&help.to_string());
            }
        }
    }
}
