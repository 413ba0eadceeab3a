use std::{env, path::PathBuf};

use anyhow::{Context as _, Result};

use super::args::CommonArgs;
use super::report;
use crate::config::{CONFIG_FILE_NAME, Config, load_config};

/// Configuration and environment shared by the commands.
pub struct CommandContext {
    pub config: Config,
    /// Working directory; config discovery and literal ignores start here.
    pub base_dir: PathBuf,
}

impl CommandContext {
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let base_dir = env::current_dir().context("Failed to get current directory")?;
        let loaded = load_config(&base_dir)?;

        if common.verbose {
            match &loaded.path {
                Some(path) => println!("Using config {}", path.display()),
                None => report::warn(&format!("no {} found, using defaults", CONFIG_FILE_NAME)),
            }
        }

        Ok(Self {
            config: loaded.config,
            base_dir,
        })
    }
}
