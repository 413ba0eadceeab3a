//! Translation resolution.
//!
//! Translations come from one of two places:
//!
//! - a live [`Provider`] (forward path), wrapped by [`TranslationResolver`]
//!   which turns provider failures into reported fallbacks;
//! - a [`StaticTable`] (reverse path), looked up by key with a fallback policy.

mod command;
mod glossary;
mod resolver;
mod static_table;

use std::path::Path;

use anyhow::Result;
use enum_dispatch::enum_dispatch;

use crate::config::Config;

pub use command::CommandProvider;
pub use glossary::GlossaryProvider;
pub use resolver::{TranslationFailure, TranslationResolver};
pub use static_table::{MissingKeyFallback, StaticTable};

/// Translation provider boundary: `(text, source, dest) -> text`, fallible.
#[enum_dispatch]
pub trait Translate {
    fn translate(&self, text: &str, source_locale: &str, dest_locale: &str) -> Result<String>;
}

/// Providers selectable from configuration.
#[enum_dispatch(Translate)]
#[derive(Debug)]
pub enum Provider {
    Glossary(GlossaryProvider),
    Command(CommandProvider),
    Identity(IdentityProvider),
}

impl Provider {
    /// Pick the provider: an explicit glossary wins, then the configured
    /// glossary, then the configured command, else identity.
    pub fn from_config(config: &Config, glossary_override: Option<&Path>) -> Result<Self> {
        let glossary = glossary_override.or(config.glossary.as_deref());
        if let Some(path) = glossary {
            return Ok(Provider::Glossary(GlossaryProvider::load(path)?));
        }
        if let Some(argv) = &config.translate_command {
            return Ok(Provider::Command(CommandProvider::from_argv(argv)?));
        }
        Ok(Provider::Identity(IdentityProvider))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Provider::Glossary(_) => "glossary",
            Provider::Command(_) => "command",
            Provider::Identity(_) => "identity",
        }
    }
}

/// Returns the text unchanged, leaving translation to a human reviewer.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityProvider;

impl Translate for IdentityProvider {
    fn translate(&self, text: &str, _source_locale: &str, _dest_locale: &str) -> Result<String> {
        Ok(text.to_string())
    }
}
