//! Extract command - the forward path for one component file.
//!
//! Extracts literals, derives keys, translates them, writes both locale table
//! fragments, then (after confirmation) rewrites the literals to accessor calls.
//!
//! Use `--yes` to rewrite without asking, `--dry-run` to only preview the rewrite.

use std::path::Path;

use anyhow::{Result, bail};
use colored::Colorize;

use super::super::{
    args::ExtractCommand,
    context::CommandContext,
    exit_status::ExitStatus,
    prompt,
    report::{self, FAILURE_MARK, SUCCESS_MARK},
};
use crate::core::{
    CommitOutcome, ExtractOptions, ForwardRewriter, LiteralExtractor, SourceFile, TranslationSet,
    rewrite::OperationKind,
    table::emit_artifacts,
    translate::{Provider, TranslationResolver},
};

/// Namespace from a file name: `AdminDashboard.jsx` → `dashboard`.
pub fn default_namespace(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let namespace = stem.replace("Admin", "").to_lowercase();
    if namespace.is_empty() {
        stem.to_lowercase()
    } else {
        namespace
    }
}

pub fn extract(cmd: ExtractCommand, verbose: bool) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;
    let mut config = ctx.config;
    if let Some(locale) = cmd.source_locale {
        config.source_locale = locale;
    }
    if let Some(locale) = cmd.dest_locale {
        config.dest_locale = locale;
    }
    if let Some(dir) = cmd.output_dir {
        config.output_dir = dir;
    }
    if let Some(format) = cmd.format {
        config.table_format = format;
    }
    config.validate()?;

    let namespace = cmd
        .namespace
        .unwrap_or_else(|| default_namespace(&cmd.file));
    if namespace.is_empty() || namespace.contains(|c: char| c == '.' || c.is_whitespace()) {
        bail!("Invalid namespace \"{}\": use a single word", namespace);
    }

    let mut source = SourceFile::open(&cmd.file)?;
    let provider = Provider::from_config(&config, cmd.glossary.as_deref())?;
    let file_label = cmd.file.display().to_string();

    println!("{}", "locswap extract".bold());
    println!("  file:      {}", file_label);
    println!("  namespace: {}", namespace);
    println!("  provider:  {}", provider.name());
    report::print_rule();

    let extractor = LiteralExtractor::new(ExtractOptions::from(&config));
    let strings = extractor.extract(source.content());
    if strings.is_empty() {
        println!(
            "{} No extractable strings found in {}",
            FAILURE_MARK.red(),
            file_label
        );
        return Ok(ExitStatus::Failure);
    }

    println!(
        "Found {} string(s) to translate ({} → {})",
        strings.len(),
        config.source_locale,
        config.dest_locale
    );
    let width = report::progress_width(strings.iter().map(|s| s.text.as_str()));
    let mut resolver =
        TranslationResolver::new(provider, &config.source_locale, &config.dest_locale);
    let set = TranslationSet::build(&strings, &namespace, &mut resolver, |progress| {
        report::print_progress(&progress, width)
    });
    report::print_collisions(&set.collisions);

    let written = emit_artifacts(&set, &config.output_dir, config.table_format)?;
    report::print_written(&written);
    if set.failed_count() > 0 {
        report::warn(&format!(
            "{} string(s) kept their {} text in the {} table",
            set.failed_count(),
            config.source_locale,
            config.dest_locale
        ));
    }

    let rewriter = ForwardRewriter::from_config(&config)?;
    let plan = rewriter.plan(set.replacements());
    let rewrite = rewriter.rewrite(source.content(), &plan);

    println!();
    if cmd.dry_run {
        println!("Dry run: {} would be rewritten as follows:", file_label);
        report::print_steps(&rewrite);
        return Ok(ExitStatus::Success);
    }
    if !cmd.yes && !prompt::confirm(&format!("Update {} with translation calls?", file_label))? {
        println!("Skipped rewriting {}", file_label);
        return Ok(ExitStatus::Success);
    }

    if verbose {
        report::print_steps(&rewrite);
    }
    if rewrite.unmatched(OperationKind::InsertBinding) {
        report::warn(&format!(
            "no zero-argument component found in {}; add `{}` by hand",
            file_label,
            rewriter.accessor().binding_statement()
        ));
    }

    let replaced = rewrite.applied_count(OperationKind::ReplaceLiteral);
    match source.commit(rewrite.content, &config.backup_suffix)? {
        CommitOutcome::Written { backup } => {
            println!(
                "{} Updated {} ({} literal(s) replaced)",
                SUCCESS_MARK.green(),
                file_label,
                replaced
            );
            println!("   backup: {}", backup.display());
        }
        CommitOutcome::Unchanged => {
            println!("{} {} is already up to date", SUCCESS_MARK.green(), file_label);
        }
    }
    println!("Merge the table fragments into your locale files.");

    Ok(ExitStatus::Success)
}
