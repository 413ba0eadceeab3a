//! Command-line interface: argument parsing, command handlers and terminal output.

use anyhow::Result;

pub mod args;
mod commands;
mod context;
mod exit_status;
mod prompt;
mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    run::run(args, verbose)
}
