use std::{collections::HashMap, fs, path::Path};

use anyhow::{Context, Result, anyhow, bail};
use serde_json::Value;

use super::Translate;

/// Provider backed by a JSON object mapping source text to translated text.
#[derive(Debug, Clone, Default)]
pub struct GlossaryProvider {
    entries: HashMap<String, String>,
}

impl GlossaryProvider {
    pub fn new(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read glossary: {}", path.display()))?;
        Self::from_json_str(&content)
            .with_context(|| format!("Failed to parse glossary: {}", path.display()))
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        let Value::Object(map) = value else {
            bail!("glossary root must be an object");
        };
        let entries = map
            .into_iter()
            .map(|(source, target)| match target {
                Value::String(text) => Ok((source, text)),
                other => Err(anyhow!("glossary value for \"{}\" is not a string: {}", source, other)),
            })
            .collect::<Result<HashMap<_, _>>>()?;
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Translate for GlossaryProvider {
    fn translate(&self, text: &str, _source_locale: &str, dest_locale: &str) -> Result<String> {
        self.entries
            .get(text)
            .cloned()
            .ok_or_else(|| anyhow!("no {} glossary entry", dest_locale))
    }
}
