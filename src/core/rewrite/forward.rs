//! Literal → accessor call.

use std::sync::LazyLock;

use anyhow::Result;
use regex::Regex;

use super::operation::{Applied, apply_operations};
use super::{AccessorConfig, RewriteContext, RewriteOperation, RewriteReport};
use crate::config::Config;
use crate::core::extract::{ExtractOptions, attribute_name_before, literal_runs};
use crate::core::key::TranslationKey;

/// A complete `import ... 'module'` statement, possibly spanning lines.
static IMPORT_STATEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^import\s[^;]*?['"][^'"\n]*['"][ \t]*;?"#).unwrap()
});

/// Zero-argument function component: `const Name = () => {` or `function Name() {`.
static COMPONENT_SIGNATURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^([ \t]*)(?:export\s+(?:default\s+)?)?(?:const\s+[A-Z]\w*\s*=\s*\(\s*\)\s*=>\s*\{|function\s+[A-Z]\w*\s*\(\s*\)\s*\{)",
    )
    .unwrap()
});

/// `'use client';` style directive line.
static DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\s*(?:'use [\w ]+'|"use [\w ]+")\s*;?\s*$"#).unwrap());

pub struct ForwardRewriter {
    ctx: RewriteContext,
}

impl ForwardRewriter {
    pub fn new(accessor: AccessorConfig, options: ExtractOptions) -> Result<Self> {
        Ok(Self {
            ctx: RewriteContext::new(accessor, options)?,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            ctx: RewriteContext::from_config(config)?,
        })
    }

    pub fn accessor(&self) -> &AccessorConfig {
        &self.ctx.accessor
    }

    /// Import, binding, then one replacement per `(literal, key)` pair.
    pub fn plan<'a>(
        &self,
        replacements: impl IntoIterator<Item = (&'a str, &'a TranslationKey)>,
    ) -> Vec<RewriteOperation<'a>> {
        [RewriteOperation::InsertImport, RewriteOperation::InsertBinding]
            .into_iter()
            .chain(
                replacements
                    .into_iter()
                    .map(|(text, key)| RewriteOperation::ReplaceLiteral { text, key }),
            )
            .collect()
    }

    pub fn rewrite(&self, content: &str, plan: &[RewriteOperation<'_>]) -> RewriteReport {
        apply_operations(content, plan, &self.ctx)
    }
}

pub(super) fn insert_import(content: &str, ctx: &RewriteContext) -> Applied {
    if ctx.has_import(content) {
        return Applied::Satisfied;
    }
    let statement = ctx.accessor.import_statement();

    let content = match IMPORT_STATEMENT.find_iter(content).last() {
        Some(last) => format!(
            "{}\n{}{}",
            &content[..last.end()],
            statement,
            &content[last.end()..]
        ),
        None => {
            let at = after_directives(content);
            let head = &content[..at];
            let separator = if !head.is_empty() && !head.ends_with('\n') {
                "\n"
            } else {
                ""
            };
            format!("{}{}{}\n{}", head, separator, statement, &content[at..])
        }
    };
    Applied::Changed { content, count: 1 }
}

/// Byte offset just past the leading directive lines (blank lines included).
fn after_directives(content: &str) -> usize {
    let mut offset = 0;
    let mut end = 0;
    for line in content.split_inclusive('\n') {
        offset += line.len();
        if line.trim().is_empty() {
            continue;
        }
        if !DIRECTIVE.is_match(line) {
            break;
        }
        end = offset;
    }
    end
}

pub(super) fn insert_binding(content: &str, ctx: &RewriteContext) -> Applied {
    if ctx.has_binding(content) {
        return Applied::Satisfied;
    }
    let Some(caps) = COMPONENT_SIGNATURE.captures(content) else {
        return Applied::NoMatch;
    };
    let (Some(signature), Some(indent)) = (caps.get(0), caps.get(1)) else {
        return Applied::NoMatch;
    };

    let content = format!(
        "{}\n{}    {}{}",
        &content[..signature.end()],
        indent.as_str(),
        ctx.accessor.binding_statement(),
        &content[signature.end()..]
    );
    Applied::Changed { content, count: 1 }
}

pub(super) fn replace_literal(
    content: &str,
    ctx: &RewriteContext,
    text: &str,
    key: &TranslationKey,
) -> Applied {
    let call = ctx.accessor.call(key);
    let mut out = String::with_capacity(content.len());
    let mut cursor = 0;
    let mut count = 0;

    for run in literal_runs(content) {
        if run.text() != text || ctx.extractor.is_structural_position(content, run.start) {
            continue;
        }
        out.push_str(&content[cursor..run.start]);
        // A quoted attribute value needs an expression slot around the call.
        if attribute_name_before(content, run.start).is_some() {
            out.push('{');
            out.push_str(&call);
            out.push('}');
        } else {
            out.push_str(&call);
        }
        cursor = run.end;
        count += 1;
    }

    if count == 0 {
        return Applied::NoMatch;
    }
    out.push_str(&content[cursor..]);
    Applied::Changed {
        content: out,
        count,
    }
}
