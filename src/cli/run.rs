use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{extract::extract, init::init, inline::inline},
    exit_status::ExitStatus,
};

/// Dispatch to the command handler.
pub fn run(Arguments { command }: Arguments, verbose: bool) -> Result<ExitStatus> {
    match command {
        Some(Command::Extract(cmd)) => extract(cmd, verbose),
        Some(Command::Inline(cmd)) => inline(cmd, verbose),
        Some(Command::Init) => init(),
        None => bail!("No command provided. Use --help to see available commands."),
    }
}
