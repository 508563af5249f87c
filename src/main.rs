//! CLI entry point for equal-sum partitioning

use bitpartition::io::cli::{Cli, Runner, exit_code_for};
use bitpartition::io::configuration::RUNTIME_ERROR_EXIT_CODE;
use clap::Parser;
use std::process::ExitCode;

// Allow print for reporting the failure that ended the run
#[allow(clippy::print_stderr)]
fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            let code = exit_code_for(&error);
            // A usage message that cannot be shown is itself a failure
            let code = error.print().map_or(RUNTIME_ERROR_EXIT_CODE, |()| code);
            return ExitCode::from(code);
        }
    };

    match Runner::new(cli).run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::from(RUNTIME_ERROR_EXIT_CODE)
        }
    }
}
