//! Source rewriting.
//!
//! Both directions are expressed as a list of [`RewriteOperation`]s applied in
//! order to the whole file content. Every operation is a pure text
//! substitution: it either changes the content or reports why it did not
//! (precondition already satisfied, or nothing matched).
//!
//! ```text
//! forward:  Untouched → AccessorInjected → LiteralsReplaced
//! reverse:  Untouched → AccessorStripped → LiteralsInlined
//! ```

mod forward;
mod operation;
mod reverse;

use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;

use super::extract::{ExtractOptions, LiteralExtractor};
use super::key::TranslationKey;
use crate::config::Config;

pub use forward::ForwardRewriter;
pub use operation::{OperationKind, RewriteOperation, RewriteReport, StepOutcome, StepReport};
pub use reverse::ReverseRewriter;

/// `import { a, b as c } from '...';`
static NAMED_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"import\s+\{([^}]*)\}\s*from\s*(['"][^'"\n]*['"])[ \t]*;?"#).unwrap()
});

/// Accessor naming, shared by both directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorConfig {
    /// Runtime lookup function, e.g. `t`.
    pub accessor: String,
    /// Hook returning the accessor, e.g. `useLanguage`.
    pub hook: String,
    /// Module the hook is imported from.
    pub import_source: String,
}

impl Default for AccessorConfig {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for AccessorConfig {
    fn from(config: &Config) -> Self {
        Self {
            accessor: config.accessor.clone(),
            hook: config.hook.clone(),
            import_source: config.import_source.clone(),
        }
    }
}

impl AccessorConfig {
    pub fn import_statement(&self) -> String {
        format!("import {{ {} }} from '{}';", self.hook, self.import_source)
    }

    pub fn binding_statement(&self) -> String {
        format!("const {{ {} }} = {}();", self.accessor, self.hook)
    }

    pub fn call(&self, key: &TranslationKey) -> String {
        format!("{}('{}')", self.accessor, key)
    }
}

/// Compiled patterns and filters for one accessor configuration.
pub(crate) struct RewriteContext {
    pub(crate) accessor: AccessorConfig,
    pub(crate) extractor: LiteralExtractor,
    binding: Regex,
    hook_call: Regex,
    call: Regex,
}

impl RewriteContext {
    pub(crate) fn new(accessor: AccessorConfig, options: ExtractOptions) -> Result<Self> {
        let acc = regex::escape(&accessor.accessor);
        let hook = regex::escape(&accessor.hook);

        let binding = Regex::new(&format!(
            r"const\s*\{{\s*{acc}\s*\}}\s*=\s*{hook}\s*\(\s*\)[ \t]*;?"
        ))
        .context("Failed to build accessor binding pattern")?;
        let hook_call = Regex::new(&format!(r"\b{hook}\s*\("))
            .context("Failed to build hook call pattern")?;
        let call = Regex::new(&format!(
            r#"(?P<open>\{{\s*)?{acc}\(\s*(?:'(?P<k1>[^'\n]+)'|"(?P<k2>[^"\n]+)")\s*\)(?:\s*\|\|\s*(?:'(?P<f1>(?:[^'\\\n]|\\.)*)'|"(?P<f2>(?:[^"\\\n]|\\.)*)"))?(?P<close>\s*\}})?"#
        ))
        .context("Failed to build accessor call pattern")?;

        Ok(Self {
            accessor,
            extractor: LiteralExtractor::new(options),
            binding,
            hook_call,
            call,
        })
    }

    pub(crate) fn from_config(config: &Config) -> Result<Self> {
        Self::new(AccessorConfig::from(config), ExtractOptions::from(config))
    }

    /// Named imports that bring the hook into scope.
    fn hook_imports<'c>(&self, content: &'c str) -> Vec<HookImport<'c>> {
        NAMED_IMPORT
            .captures_iter(content)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let names: Vec<&str> = caps
                    .get(1)?
                    .as_str()
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .collect();
                let imports_hook = names
                    .iter()
                    .any(|name| name.split_whitespace().next() == Some(self.accessor.hook.as_str()));
                imports_hook.then(|| HookImport {
                    start: whole.start(),
                    end: whole.end(),
                    names,
                    source: caps.get(2).map_or("", |m| m.as_str()),
                })
            })
            .collect()
    }

    pub(crate) fn has_import(&self, content: &str) -> bool {
        !self.hook_imports(content).is_empty()
    }

    pub(crate) fn has_binding(&self, content: &str) -> bool {
        self.binding.is_match(content)
    }
}

struct HookImport<'c> {
    start: usize,
    end: usize,
    names: Vec<&'c str>,
    source: &'c str,
}
