//! Accessor call → literal.

use anyhow::Result;
use regex::Captures;

use super::operation::{Applied, apply_operations};
use super::{AccessorConfig, RewriteContext, RewriteOperation, RewriteReport};
use crate::config::Config;
use crate::core::extract::{ExtractOptions, attribute_name_before, unescape};
use crate::core::translate::StaticTable;
use crate::utils::is_ident_char;

/// Replacement for a removed accessor binding. Must not match the binding pattern.
pub const BINDING_REMOVED_COMMENT: &str = "// Localization binding removed: using hardcoded text";

pub struct ReverseRewriter {
    ctx: RewriteContext,
}

impl ReverseRewriter {
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

    /// Binding first, so a binding-only use of the hook does not keep the import alive.
    pub fn plan<'a>(&self, table: &'a StaticTable) -> Vec<RewriteOperation<'a>> {
        vec![
            RewriteOperation::NeutralizeBinding,
            RewriteOperation::NeutralizeImport,
            RewriteOperation::InlineCalls { table },
        ]
    }

    pub fn rewrite(&self, content: &str, plan: &[RewriteOperation<'_>]) -> RewriteReport {
        apply_operations(content, plan, &self.ctx)
    }
}

fn import_removed_comment(hook: &str) -> String {
    format!("// {} import removed: using hardcoded text", hook)
}

pub(super) fn neutralize_binding(content: &str, ctx: &RewriteContext) -> Applied {
    let count = ctx.binding.find_iter(content).count();
    if count == 0 {
        return Applied::Satisfied;
    }
    let content = ctx
        .binding
        .replace_all(content, BINDING_REMOVED_COMMENT)
        .into_owned();
    Applied::Changed { content, count }
}

pub(super) fn neutralize_import(content: &str, ctx: &RewriteContext) -> Applied {
    let imports = ctx.hook_imports(content);
    if imports.is_empty() {
        return Applied::Satisfied;
    }
    // Still called somewhere: removing the import would break the file.
    if ctx.hook_call.is_match(content) {
        return Applied::NoMatch;
    }

    let hook = ctx.accessor.hook.as_str();
    let mut out = content.to_string();
    for import in imports.iter().rev() {
        let remaining: Vec<&str> = import
            .names
            .iter()
            .copied()
            .filter(|name| name.split_whitespace().next() != Some(hook))
            .collect();
        let replacement = if remaining.is_empty() {
            import_removed_comment(hook)
        } else {
            format!("import {{ {} }} from {};", remaining.join(", "), import.source)
        };
        out.replace_range(import.start..import.end, &replacement);
    }
    Applied::Changed {
        content: out,
        count: imports.len(),
    }
}

pub(super) fn inline_calls(content: &str, ctx: &RewriteContext, table: &StaticTable) -> Applied {
    let mut count = 0;
    let content = ctx.call.replace_all(content, |caps: &Captures<'_>| {
        let whole = &caps[0];
        match inline_call(content, caps, table) {
            Some(replacement) => {
                count += 1;
                replacement
            }
            None => whole.to_string(),
        }
    });

    if count == 0 {
        return Applied::NoMatch;
    }
    Applied::Changed {
        content: content.into_owned(),
        count,
    }
}

/// Resolved text for one call match, shaped for the slot it sits in.
/// `None` when the match is not a standalone accessor call (`split(`, `obj.t(`).
fn inline_call(content: &str, caps: &Captures<'_>, table: &StaticTable) -> Option<String> {
    let whole = caps.get(0)?;
    let open = caps.name("open");
    let close = caps.name("close");

    if open.is_none() {
        let preceded_by_ident = content[..whole.start()]
            .chars()
            .next_back()
            .is_some_and(|c| is_ident_char(c) || c == '.');
        if preceded_by_ident {
            return None;
        }
    }

    let key = caps.name("k1").or_else(|| caps.name("k2"))?.as_str();
    let inline_fallback = caps
        .name("f1")
        .or_else(|| caps.name("f2"))
        .map(|m| unescape(m.as_str()));
    let text = table.resolve(key, inline_fallback.as_deref());

    let replacement = match (open, close) {
        (Some(_), Some(_)) if attribute_name_before(content, whole.start()).is_some() => {
            if text.contains('"') {
                format!("{{\"{}\"}}", escape_double_quoted(&text))
            } else {
                format!("\"{}\"", text)
            }
        }
        (Some(_), Some(_)) => format!("{{\"{}\"}}", escape_double_quoted(&text)),
        _ => format!(
            "{}\"{}\"{}",
            open.map_or("", |m| m.as_str()),
            escape_double_quoted(&text),
            close.map_or("", |m| m.as_str())
        ),
    };
    Some(replacement)
}

/// Escape text for a double-quoted JS string literal.
pub fn escape_double_quoted(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
