//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Forward path. Extract literals from a component, emit
//!   translation table fragments and rewrite literals to accessor calls
//! - `inline`: Reverse path. Replace accessor calls with text from a static table
//! - `init`: Initialize locswap configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::table::TableFormat;
use crate::core::translate::MissingKeyFallback;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Extract(cmd)) => cmd.common.verbose,
            Some(Command::Inline(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    /// Component source file
    pub file: PathBuf,

    /// Key namespace (default: file name without "Admin", lowercased)
    pub namespace: Option<String>,

    /// Glossary JSON used as the translation provider
    #[arg(long)]
    pub glossary: Option<PathBuf>,

    /// Source locale (overrides config file)
    #[arg(long)]
    pub source_locale: Option<String>,

    /// Destination locale (overrides config file)
    #[arg(long)]
    pub dest_locale: Option<String>,

    /// Directory for table fragments (overrides config file)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Table fragment format (overrides config file)
    #[arg(long, value_enum)]
    pub format: Option<TableFormat>,

    /// Rewrite the source file without asking
    #[arg(short, long, conflicts_with = "dry_run")]
    pub yes: bool,

    /// Preview the source rewrite without asking or writing
    #[arg(long)]
    pub dry_run: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct InlineCommand {
    /// Files or directories to convert
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Destination-locale table (flat or nested JSON)
    #[arg(long)]
    pub table: PathBuf,

    /// Text used for keys missing from the table (overrides config file)
    #[arg(long, value_enum)]
    pub fallback: Option<MissingKeyFallback>,

    /// Preview conversions without writing
    #[arg(long)]
    pub dry_run: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract literals, emit translation tables and replace literals with accessor calls
    Extract(ExtractCommand),
    /// Replace accessor calls with text from a static table and remove the accessor
    Inline(InlineCommand),
    /// Initialize a new .locswaprc.json configuration file
    Init,
}
