//! Terminal output for the CLI commands.
//!
//! Progress and summaries go to stdout, warnings to stderr. Separate from core
//! logic so locswap can be used as a library.

use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::core::rewrite::{RewriteReport, StepOutcome};
use crate::core::table::{KeyCollision, Progress};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

const RULE_WIDTH: usize = 60;

/// Print a `warning:` line to stderr.
pub fn warn(message: &str) {
    eprintln!("{} {}", "warning:".bold().yellow(), message);
}

pub fn print_rule() {
    println!("{}", "=".repeat(RULE_WIDTH).dimmed());
}

/// Display width of the quoted source column, so arrows line up.
pub fn progress_width<'a>(texts: impl IntoIterator<Item = &'a str>) -> usize {
    texts
        .into_iter()
        .map(|text| UnicodeWidthStr::width(text) + 2)
        .max()
        .unwrap_or(0)
}

/// `[i/n] 'source' → 'translation'`, source column padded to `width`.
pub fn format_progress(progress: &Progress<'_>, width: usize) -> String {
    let counter = format!("[{}/{}]", progress.index, progress.total);
    let source = format!("'{}'", progress.source_text);
    let padding = width.saturating_sub(UnicodeWidthStr::width(source.as_str()));
    let dest = format!("'{}'", progress.dest_text);
    let dest = if progress.fell_back {
        dest.yellow()
    } else {
        dest.normal()
    };
    format!(
        "  {} {}{} {} {}",
        counter.dimmed(),
        source,
        " ".repeat(padding),
        "→".cyan(),
        dest
    )
}

pub fn print_progress(progress: &Progress<'_>, width: usize) {
    println!("{}", format_progress(progress, width));
}

pub fn print_collisions(collisions: &[KeyCollision]) {
    for collision in collisions {
        warn(&format!(
            "'{}' derives key '{}' already used by '{}'; it will share that key",
            collision.dropped, collision.key, collision.kept
        ));
    }
}

pub fn print_written(paths: &[PathBuf]) {
    println!();
    println!("{} Translation tables written:", SUCCESS_MARK.green());
    for path in paths {
        println!("   - {}", path.display());
    }
}

/// One line per operation; used for dry runs and `-v`.
pub fn print_steps(report: &RewriteReport) {
    print_steps_to(report, &mut io::stdout().lock());
}

pub fn print_steps_to<W: Write>(report: &RewriteReport, writer: &mut W) {
    for step in &report.steps {
        let outcome = match step.outcome {
            StepOutcome::Applied(count) => format!("applied ×{}", count).green(),
            StepOutcome::Satisfied => "already present".dimmed(),
            StepOutcome::NoMatch => "no match".yellow(),
        };
        let _ = writeln!(
            writer,
            "  {} {} ({})",
            step.kind.to_string().cyan(),
            step.description,
            outcome
        );
    }
}

/// Outcome of converting one file in a batch.
pub fn print_file_converted(path: &Path, replacements: usize, backup: Option<&Path>, verbose: bool) {
    match backup {
        Some(backup) => {
            println!(
                "{} Converted {} ({} call(s) inlined)",
                SUCCESS_MARK.green(),
                path.display(),
                replacements
            );
            if verbose {
                println!("   backup: {}", backup.display());
            }
        }
        None => println!(
            "{} {} already converted",
            SUCCESS_MARK.green(),
            path.display()
        ),
    }
}

pub fn print_file_failed(path: &Path, err: &anyhow::Error) {
    eprintln!(
        "{} {} {}: {:#}",
        FAILURE_MARK.red(),
        "Error converting".bold().red(),
        path.display(),
        err
    );
}

pub fn print_batch_summary(converted: usize, total: usize) {
    print_batch_summary_to(converted, total, &mut io::stdout().lock());
}

pub fn print_batch_summary_to<W: Write>(converted: usize, total: usize, writer: &mut W) {
    let message = format!("Converted {}/{} file(s)", converted, total);
    let _ = if converted == total {
        writeln!(writer, "{} {}", SUCCESS_MARK.green(), message.green())
    } else {
        writeln!(writer, "{} {}", FAILURE_MARK.red(), message.red())
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rewrite::{OperationKind, StepReport};

    fn plain<F: FnOnce()>(f: F) {
        colored::control::set_override(false);
        f();
    }

    #[test]
    fn test_progress_width_uses_display_width() {
        assert_eq!(progress_width(["abc", "日本語"]), 8);
        assert_eq!(progress_width(["é"]), 3);
        assert_eq!(progress_width(std::iter::empty()), 0);
    }

    #[test]
    fn test_format_progress_pads_source_column() {
        plain(|| {
            let progress = Progress {
                index: 1,
                total: 2,
                source_text: "Save",
                dest_text: "Enregistrer",
                fell_back: false,
            };
            assert_eq!(
                format_progress(&progress, 10),
                "  [1/2] 'Save'     → 'Enregistrer'"
            );
        });
    }

    #[test]
    fn test_batch_summary() {
        plain(|| {
            let mut out = Vec::new();
            print_batch_summary_to(2, 3, &mut out);
            print_batch_summary_to(3, 3, &mut out);
            assert_eq!(
                String::from_utf8(out).unwrap(),
                "✘ Converted 2/3 file(s)\n✓ Converted 3/3 file(s)\n"
            );
        });
    }

    #[test]
    fn test_print_steps() {
        plain(|| {
            let report = RewriteReport {
                content: String::new(),
                steps: vec![
                    StepReport {
                        kind: OperationKind::InsertImport,
                        description: "insert `x`".to_string(),
                        outcome: StepOutcome::Satisfied,
                    },
                    StepReport {
                        kind: OperationKind::ReplaceLiteral,
                        description: "'Save' → t('a.save')".to_string(),
                        outcome: StepOutcome::Applied(2),
                    },
                ],
            };
            let mut out = Vec::new();
            print_steps_to(&report, &mut out);
            assert_eq!(
                String::from_utf8(out).unwrap(),
                "  insert-import insert `x` (already present)\n  replace-literal 'Save' → t('a.save') (applied ×2)\n"
            );
        });
    }
}
