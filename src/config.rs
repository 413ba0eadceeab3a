use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::table::TableFormat;
use crate::core::translate::MissingKeyFallback;

pub const CONFIG_FILE_NAME: &str = ".locswaprc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_source_locale")]
    pub source_locale: String,
    #[serde(default = "default_dest_locale")]
    pub dest_locale: String,
    #[serde(default = "default_accessor")]
    pub accessor: String,
    #[serde(default = "default_hook")]
    pub hook: String,
    #[serde(default = "default_import_source")]
    pub import_source: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_backup_suffix")]
    pub backup_suffix: String,
    #[serde(default)]
    pub table_format: TableFormat,
    #[serde(default)]
    pub extra_markers: Vec<String>,
    #[serde(default = "default_ignored_attributes")]
    pub ignored_attributes: Vec<String>,
    #[serde(default)]
    pub missing_key_fallback: MissingKeyFallback,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    /// JSON object of `source text → translation`; relative to the config file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glossary: Option<PathBuf>,
    /// External translator argv with `{source}`, `{dest}` and `{text}` placeholders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translate_command: Option<Vec<String>>,
}

fn default_source_locale() -> String {
    "en".to_string()
}

fn default_dest_locale() -> String {
    "fr".to_string()
}

fn default_accessor() -> String {
    "t".to_string()
}

fn default_hook() -> String {
    "useLanguage".to_string()
}

fn default_import_source() -> String {
    "../../contexts/LanguageContext".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("translation_output")
}

fn default_backup_suffix() -> String {
    ".backup".to_string()
}

fn default_ignored_attributes() -> Vec<String> {
    [
        "className",
        "class",
        "style",
        "id",
        "key",
        "type",
        "name",
        "href",
        "src",
        "to",
        "htmlFor",
        "target",
        "rel",
        "role",
        "variant",
        "size",
        "data-testid",
    ]
    .map(String::from)
    .to_vec()
}

fn default_extensions() -> Vec<String> {
    ["jsx", "tsx", "js", "ts"].map(String::from).to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_locale: default_source_locale(),
            dest_locale: default_dest_locale(),
            accessor: default_accessor(),
            hook: default_hook(),
            import_source: default_import_source(),
            output_dir: default_output_dir(),
            backup_suffix: default_backup_suffix(),
            table_format: TableFormat::default(),
            extra_markers: Vec::new(),
            ignored_attributes: default_ignored_attributes(),
            missing_key_fallback: MissingKeyFallback::default(),
            extensions: default_extensions(),
            ignores: Vec::new(),
            glossary: None,
            translate_command: None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'ignores': \"{}\"", pattern)
                })?;
            }
        }

        let required = [
            ("sourceLocale", &self.source_locale),
            ("destLocale", &self.dest_locale),
            ("accessor", &self.accessor),
            ("hook", &self.hook),
            ("backupSuffix", &self.backup_suffix),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                bail!("'{}' must not be empty", name);
            }
        }

        if self.source_locale == self.dest_locale {
            bail!(
                "'sourceLocale' and 'destLocale' must differ (both are \"{}\")",
                self.source_locale
            );
        }
        if self.extensions.is_empty() {
            bail!("'extensions' must list at least one file extension");
        }
        if self
            .translate_command
            .as_ref()
            .is_some_and(|argv| argv.is_empty())
        {
            bail!("'translateCommand' must name a program");
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Config file used, `None` when running on defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let mut config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;

            if let (Some(glossary), Some(dir)) = (&config.glossary, path.parent()) {
                config.glossary = Some(dir.join(glossary));
            }
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
