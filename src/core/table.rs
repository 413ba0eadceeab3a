//! Translation sets and table fragment emission.
//!
//! A [`TranslationSet`] pairs every derived key with its source text and its
//! translation. Both locale tables are views over the same rows, so a key in
//! the destination table is always present in the source table.
//!
//! Fragments are meant to be merged by hand (or script) into the application's
//! locale files; nothing here touches those files.

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::extract::ExtractedString;
use super::key::TranslationKey;
use super::translate::{Translate, TranslationResolver};
use crate::utils::title_case_words;

/// Output flavour of an emitted fragment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum TableFormat {
    /// JavaScript object-literal fragment.
    #[default]
    Js,
    /// Nested JSON object.
    Json,
}

impl TableFormat {
    pub fn extension(self) -> &'static str {
        match self {
            TableFormat::Js => "txt",
            TableFormat::Json => "json",
        }
    }
}

/// A `(locale, key, text)` triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationEntry {
    pub locale: String,
    pub key: TranslationKey,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRow {
    pub key: TranslationKey,
    pub source_text: String,
    pub dest_text: String,
    /// True when the destination text is the source text substituted after a provider failure.
    pub fell_back: bool,
}

/// Two literals that derived the same key; the first one keeps the key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCollision {
    pub key: TranslationKey,
    pub kept: String,
    pub dropped: String,
}

/// One step of [`TranslationSet::build`], for progress reporting.
#[derive(Debug, Clone, Copy)]
pub struct Progress<'a> {
    pub index: usize,
    pub total: usize,
    pub source_text: &'a str,
    pub dest_text: &'a str,
    pub fell_back: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationSet {
    pub namespace: String,
    pub source_locale: String,
    pub dest_locale: String,
    pub rows: Vec<TranslationRow>,
    pub collisions: Vec<KeyCollision>,
}

impl TranslationSet {
    /// Derive keys and translate every extracted string, strictly in order.
    pub fn build<T: Translate>(
        strings: &[ExtractedString],
        namespace: &str,
        resolver: &mut TranslationResolver<T>,
        mut on_progress: impl FnMut(Progress<'_>),
    ) -> Self {
        // Keys first, so progress counts only the strings that get translated.
        let mut unique: Vec<(TranslationKey, &ExtractedString)> = Vec::with_capacity(strings.len());
        let mut collisions = Vec::new();
        let mut seen: HashSet<TranslationKey> = HashSet::new();
        for string in strings {
            let key = TranslationKey::derive(&string.text, namespace);
            if seen.insert(key.clone()) {
                unique.push((key, string));
            } else if let Some((_, kept)) = unique.iter().find(|(k, _)| *k == key) {
                collisions.push(KeyCollision {
                    key,
                    kept: kept.text.clone(),
                    dropped: string.text.clone(),
                });
            }
        }

        let total = unique.len();
        let mut rows: Vec<TranslationRow> = Vec::with_capacity(total);
        for (i, (key, string)) in unique.into_iter().enumerate() {
            let failures_before = resolver.failures().len();
            let dest_text = resolver.resolve(&string.text);
            let fell_back = resolver.failures().len() > failures_before;
            on_progress(Progress {
                index: i + 1,
                total,
                source_text: &string.text,
                dest_text: &dest_text,
                fell_back,
            });

            rows.push(TranslationRow {
                key,
                source_text: string.text.clone(),
                dest_text,
                fell_back,
            });
        }

        Self {
            namespace: namespace.to_string(),
            source_locale: resolver.source_locale().to_string(),
            dest_locale: resolver.dest_locale().to_string(),
            rows,
            collisions,
        }
    }

    pub fn source_table(&self) -> LocaleTable<'_> {
        LocaleTable {
            set: self,
            side: Side::Source,
        }
    }

    pub fn dest_table(&self) -> LocaleTable<'_> {
        LocaleTable {
            set: self,
            side: Side::Dest,
        }
    }

    /// `(literal, key)` pairs for the forward rewrite, colliding literals included.
    pub fn replacements(&self) -> impl Iterator<Item = (&str, &TranslationKey)> {
        self.rows
            .iter()
            .map(|row| (row.source_text.as_str(), &row.key))
            .chain(
                self.collisions
                    .iter()
                    .map(|collision| (collision.dropped.as_str(), &collision.key)),
            )
    }

    pub fn failed_count(&self) -> usize {
        self.rows.iter().filter(|row| row.fell_back).count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Source,
    Dest,
}

/// One locale's view of a [`TranslationSet`].
#[derive(Debug, Clone, Copy)]
pub struct LocaleTable<'a> {
    set: &'a TranslationSet,
    side: Side,
}

impl<'a> LocaleTable<'a> {
    pub fn locale(&self) -> &'a str {
        match self.side {
            Side::Source => &self.set.source_locale,
            Side::Dest => &self.set.dest_locale,
        }
    }

    pub fn namespace(&self) -> &'a str {
        &self.set.namespace
    }

    /// `(key, text)` pairs in row order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a TranslationKey, &'a str)> + use<'a> {
        let side = self.side;
        let set = self.set;
        set.rows.iter().map(move |row| {
            let text = match side {
                Side::Source => row.source_text.as_str(),
                Side::Dest => row.dest_text.as_str(),
            };
            (&row.key, text)
        })
    }

    pub fn entries(&self) -> Vec<TranslationEntry> {
        self.iter()
            .map(|(key, text)| TranslationEntry {
                locale: self.locale().to_string(),
                key: key.clone(),
                text: text.to_string(),
            })
            .collect()
    }

    pub fn emit(&self, format: TableFormat) -> Result<String> {
        match format {
            TableFormat::Js => Ok(self.emit_js()),
            TableFormat::Json => self.emit_json(),
        }
    }

    /// Object-literal fragment: header comment, namespace group, one line per key.
    pub fn emit_js(&self) -> String {
        let namespace = self.namespace();
        let mut lines = vec![
            format!("    // {} Page", title_case_words(namespace)),
            format!("    {}: {{", namespace),
        ];
        for (key, text) in self.iter() {
            lines.push(format!(
                "        {}: '{}',",
                key.identifier(),
                escape_single_quoted(text)
            ));
        }
        lines.push("    }".to_string());
        lines.join("\n")
    }

    pub fn emit_json(&self) -> Result<String> {
        let mut group = Map::new();
        for (key, text) in self.iter() {
            group.insert(key.identifier().to_string(), Value::String(text.to_string()));
        }
        let mut root = Map::new();
        root.insert(self.namespace().to_string(), Value::Object(group));
        let content = serde_json::to_string_pretty(&Value::Object(root))
            .context("Failed to serialize table fragment")?;
        Ok(format!("{}\n", content))
    }
}

/// Escape text for a single-quoted JS string literal.
pub fn escape_single_quoted(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "\\n")
}

/// Write both locale fragments to `{dir}/{namespace}_{locale}.{ext}`.
///
/// Returns the written paths, source locale first.
pub fn emit_artifacts(set: &TranslationSet, dir: &Path, format: TableFormat) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let mut written = Vec::with_capacity(2);
    for table in [set.source_table(), set.dest_table()] {
        let path = dir.join(format!(
            "{}_{}.{}",
            set.namespace,
            table.locale(),
            format.extension()
        ));
        fs::write(&path, table.emit(format)?)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}
