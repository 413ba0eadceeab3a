//! Inline command - the reverse path over a batch of files.
//!
//! Every accessor call is replaced by its text from a static table and the
//! accessor import and binding are commented out. Each file is converted
//! independently: a failure is reported and the batch moves on.

use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};

use super::super::{
    args::InlineCommand,
    context::CommandContext,
    exit_status::ExitStatus,
    report,
};
use crate::core::{
    CommitOutcome, ReverseRewriter, SourceFile,
    file_scanner::scan_paths,
    rewrite::{OperationKind, RewriteOperation},
    translate::StaticTable,
};

/// What happened to one file.
struct FileConversion {
    inlined: usize,
    /// `None` when the file needed no change.
    backup: Option<PathBuf>,
}

pub fn inline(cmd: InlineCommand, verbose: bool) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;
    let config = ctx.config;

    let fallback = cmd.fallback.unwrap_or(config.missing_key_fallback);
    let table = StaticTable::load(&cmd.table, fallback)?;
    if verbose {
        println!(
            "Loaded {} entries from {}",
            table.len(),
            cmd.table.display()
        );
    }

    let rewriter = ReverseRewriter::from_config(&config)?;
    let plan = rewriter.plan(&table);

    let scan = scan_paths(
        &ctx.base_dir,
        &cmd.paths,
        &config.extensions,
        &config.ignores,
        verbose,
    );
    let total = scan.files.len() + scan.missing.len();
    if total == 0 {
        report::warn("no source files matched the given paths");
        return Ok(ExitStatus::Failure);
    }

    for path in &scan.missing {
        report::print_file_failed(path, &anyhow!("file not found"));
    }

    let mut converted = 0;
    for path in &scan.files {
        let result = convert_file(
            path,
            &rewriter,
            &plan,
            &config.backup_suffix,
            cmd.dry_run,
            verbose,
        );
        match result {
            Ok(conversion) => {
                converted += 1;
                if cmd.dry_run {
                    println!(
                        "Dry run: {} ({} call(s) to inline)",
                        path.display(),
                        conversion.inlined
                    );
                } else {
                    report::print_file_converted(
                        path,
                        conversion.inlined,
                        conversion.backup.as_deref(),
                        verbose,
                    );
                }
            }
            Err(err) => report::print_file_failed(path, &err),
        }
    }

    println!();
    report::print_batch_summary(converted, total);

    Ok(if converted == total {
        ExitStatus::Success
    } else {
        ExitStatus::Failure
    })
}

fn convert_file(
    path: &Path,
    rewriter: &ReverseRewriter,
    plan: &[RewriteOperation<'_>],
    backup_suffix: &str,
    dry_run: bool,
    verbose: bool,
) -> Result<FileConversion> {
    let mut source = SourceFile::open(path)?;
    let rewrite = rewriter.rewrite(source.content(), plan);
    let inlined = rewrite.applied_count(OperationKind::InlineCalls);

    if verbose || dry_run {
        report::print_steps(&rewrite);
    }
    if dry_run {
        return Ok(FileConversion {
            inlined,
            backup: None,
        });
    }

    let backup = match source.commit(rewrite.content, backup_suffix)? {
        CommitOutcome::Written { backup } => Some(backup),
        CommitOutcome::Unchanged => None,
    };
    Ok(FileConversion { inlined, backup })
}
