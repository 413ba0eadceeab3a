use std::{collections::HashMap, fs, path::Path};

use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::key::unqualified;
use crate::utils::title_case_words;

/// What to render for a key that is absent from the table and has no inline fallback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum MissingKeyFallback {
    /// Unqualified key as space-separated title-cased words (`saveSettings` → `Save Settings`).
    #[default]
    #[value(name = "titleCase")]
    TitleCase,
    /// The key text unchanged.
    Key,
}

/// Read-only destination-locale table used by the reverse path.
#[derive(Debug, Clone, Default)]
pub struct StaticTable {
    entries: HashMap<String, String>,
    fallback: MissingKeyFallback,
}

impl StaticTable {
    pub fn new(
        entries: impl IntoIterator<Item = (String, String)>,
        fallback: MissingKeyFallback,
    ) -> Self {
        Self {
            entries: entries.into_iter().collect(),
            fallback,
        }
    }

    pub fn load(path: &Path, fallback: MissingKeyFallback) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read translation table: {}", path.display()))?;
        Self::from_json_str(&content, fallback)
            .with_context(|| format!("Failed to parse translation table: {}", path.display()))
    }

    /// Parse a flat or nested JSON object. Nested objects become dotted keys.
    pub fn from_json_str(json: &str, fallback: MissingKeyFallback) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        let Value::Object(map) = value else {
            bail!("translation table root must be an object");
        };
        let mut entries = HashMap::new();
        flatten_into(&map, "", &mut entries)?;
        Ok(Self { entries, fallback })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn fallback(&self) -> MissingKeyFallback {
        self.fallback
    }

    /// Look up by the full key, then by its unqualified portion.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .or_else(|| self.entries.get(unqualified(key)))
            .map(String::as_str)
    }

    /// Resolve a key: table entry, else the call site's inline fallback, else the policy.
    pub fn resolve(&self, key: &str, inline_fallback: Option<&str>) -> String {
        if let Some(text) = self.get(key) {
            return text.to_string();
        }
        if let Some(fallback) = inline_fallback {
            return fallback.to_string();
        }
        match self.fallback {
            MissingKeyFallback::TitleCase => title_case_words(unqualified(key)),
            MissingKeyFallback::Key => key.to_string(),
        }
    }
}

fn flatten_into(
    map: &Map<String, Value>,
    prefix: &str,
    out: &mut HashMap<String, String>,
) -> Result<()> {
    for (name, value) in map {
        let key = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{}.{}", prefix, name)
        };
        match value {
            Value::String(text) => {
                out.insert(key, text.clone());
            }
            Value::Object(inner) => flatten_into(inner, &key, out)?,
            other => bail!("value for \"{}\" must be a string or object, got {}", key, other),
        }
    }
    Ok(())
}
