//! Rewrite operations and their reports.
//!
//! Operations are applied in order to the whole content. An operation never
//! fails: it either substitutes every occurrence it matches, finds its
//! postcondition already satisfied, or matches nothing and leaves the content
//! unchanged.

use std::fmt;

use super::{AccessorConfig, RewriteContext, forward, reverse};
use crate::core::key::TranslationKey;
use crate::core::translate::StaticTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    InsertImport,
    InsertBinding,
    ReplaceLiteral,
    NeutralizeImport,
    NeutralizeBinding,
    InlineCalls,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperationKind::InsertImport => "insert-import",
            OperationKind::InsertBinding => "insert-binding",
            OperationKind::ReplaceLiteral => "replace-literal",
            OperationKind::NeutralizeImport => "neutralize-import",
            OperationKind::NeutralizeBinding => "neutralize-binding",
            OperationKind::InlineCalls => "inline-calls",
        };
        write!(f, "{}", name)
    }
}

/// One logical edit of a source file.
#[derive(Debug, Clone, Copy)]
pub enum RewriteOperation<'a> {
    /// Add the hook import after the last import statement.
    InsertImport,
    /// Add the accessor binding at the top of the first component body.
    InsertBinding,
    /// Replace every non-structural occurrence of `text` with an accessor call.
    ReplaceLiteral {
        text: &'a str,
        key: &'a TranslationKey,
    },
    /// Comment out the hook import.
    NeutralizeImport,
    /// Comment out the accessor binding.
    NeutralizeBinding,
    /// Replace every accessor call with its resolved text.
    InlineCalls { table: &'a StaticTable },
}

/// Result of applying a single operation.
pub(super) enum Applied {
    Changed { content: String, count: usize },
    Satisfied,
    NoMatch,
}

impl RewriteOperation<'_> {
    pub fn kind(&self) -> OperationKind {
        match self {
            RewriteOperation::InsertImport => OperationKind::InsertImport,
            RewriteOperation::InsertBinding => OperationKind::InsertBinding,
            RewriteOperation::ReplaceLiteral { .. } => OperationKind::ReplaceLiteral,
            RewriteOperation::NeutralizeImport => OperationKind::NeutralizeImport,
            RewriteOperation::NeutralizeBinding => OperationKind::NeutralizeBinding,
            RewriteOperation::InlineCalls { .. } => OperationKind::InlineCalls,
        }
    }

    /// Human-readable summary for previews.
    pub fn describe(&self, accessor: &AccessorConfig) -> String {
        match self {
            RewriteOperation::InsertImport => format!("insert `{}`", accessor.import_statement()),
            RewriteOperation::InsertBinding => {
                format!("insert `{}`", accessor.binding_statement())
            }
            RewriteOperation::ReplaceLiteral { text, key } => {
                format!("'{}' → {}", text, accessor.call(key))
            }
            RewriteOperation::NeutralizeImport => {
                format!("comment out `{}` import", accessor.hook)
            }
            RewriteOperation::NeutralizeBinding => {
                format!("comment out `{}`", accessor.binding_statement())
            }
            RewriteOperation::InlineCalls { table } => format!(
                "inline `{}(...)` calls from {} table entries",
                accessor.accessor,
                table.len()
            ),
        }
    }

    pub(super) fn apply(&self, content: &str, ctx: &RewriteContext) -> Applied {
        match self {
            RewriteOperation::InsertImport => forward::insert_import(content, ctx),
            RewriteOperation::InsertBinding => forward::insert_binding(content, ctx),
            RewriteOperation::ReplaceLiteral { text, key } => {
                forward::replace_literal(content, ctx, text, key)
            }
            RewriteOperation::NeutralizeImport => reverse::neutralize_import(content, ctx),
            RewriteOperation::NeutralizeBinding => reverse::neutralize_binding(content, ctx),
            RewriteOperation::InlineCalls { table } => reverse::inline_calls(content, ctx, table),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Content changed; number of substitutions made.
    Applied(usize),
    /// Postcondition already held; nothing to do.
    Satisfied,
    /// Nothing matched; content left unchanged.
    NoMatch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub kind: OperationKind,
    pub description: String,
    pub outcome: StepOutcome,
}

/// Final content plus what each operation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteReport {
    pub content: String,
    pub steps: Vec<StepReport>,
}

impl RewriteReport {
    pub fn is_changed(&self) -> bool {
        self.steps
            .iter()
            .any(|step| matches!(step.outcome, StepOutcome::Applied(_)))
    }

    /// Total substitutions made by operations of `kind`.
    pub fn applied_count(&self, kind: OperationKind) -> usize {
        self.steps
            .iter()
            .filter(|step| step.kind == kind)
            .map(|step| match step.outcome {
                StepOutcome::Applied(count) => count,
                _ => 0,
            })
            .sum()
    }

    /// Whether an operation of `kind` ran and matched nothing.
    pub fn unmatched(&self, kind: OperationKind) -> bool {
        self.steps
            .iter()
            .any(|step| step.kind == kind && step.outcome == StepOutcome::NoMatch)
    }
}

pub(super) fn apply_operations(
    content: &str,
    operations: &[RewriteOperation<'_>],
    ctx: &RewriteContext,
) -> RewriteReport {
    let mut current = content.to_string();
    let mut steps = Vec::with_capacity(operations.len());

    for op in operations {
        let outcome = match op.apply(&current, ctx) {
            Applied::Changed { content, count } => {
                current = content;
                StepOutcome::Applied(count)
            }
            Applied::Satisfied => StepOutcome::Satisfied,
            Applied::NoMatch => StepOutcome::NoMatch,
        };
        steps.push(StepReport {
            kind: op.kind(),
            description: op.describe(&ctx.accessor),
            outcome,
        });
    }

    RewriteReport {
        content: current,
        steps,
    }
}
