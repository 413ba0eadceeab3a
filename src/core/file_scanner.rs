use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal directory paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning input paths.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Files to process, sorted and deduplicated.
    pub files: Vec<PathBuf>,
    /// Inputs that do not exist.
    pub missing: Vec<PathBuf>,
    pub skipped_count: usize,
}

/// Expand `inputs` into source files.
///
/// Files named explicitly are always kept. Directories are walked and only
/// files with one of `extensions` that match no ignore pattern are kept.
/// Literal ignores are path prefixes relative to `base_dir`.
pub fn scan_paths(
    base_dir: &Path,
    inputs: &[PathBuf],
    extensions: &[String],
    ignore_patterns: &[String],
    verbose: bool,
) -> ScanResult {
    let mut files: BTreeSet<PathBuf> = BTreeSet::new();
    let mut missing = Vec::new();
    let mut skipped_count = 0;

    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();
    for p in ignore_patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid ignore pattern '{}': {}",
                            "warning:".bold().yellow(),
                            p,
                            e
                        );
                    }
                }
            }
        } else {
            literal_ignore_paths.push(relative_to(Path::new(p), base_dir).to_path_buf());
        }
    }

    let is_ignored = |path: &Path| {
        let relative = relative_to(path, base_dir);
        literal_ignore_paths
            .iter()
            .any(|ignore_path| relative.starts_with(ignore_path))
            || glob_patterns
                .iter()
                .any(|p| p.matches_path(path) || p.matches_path(relative))
    };

    for input in inputs {
        if input.is_file() {
            files.insert(input.clone());
            continue;
        }
        if !input.exists() {
            missing.push(input.clone());
            continue;
        }

        for entry in WalkDir::new(input) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    if verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };
            let path = entry.path();
            if is_ignored(path) {
                continue;
            }
            if path.is_file() && has_extension(path, extensions) {
                files.insert(path.to_path_buf());
            }
        }
    }

    ScanResult {
        files: files.into_iter().collect(),
        missing,
        skipped_count,
    }
}

/// `path` relative to `base_dir`, or without a leading `./`.
fn relative_to<'p>(path: &'p Path, base_dir: &Path) -> &'p Path {
    path.strip_prefix(base_dir)
        .or_else(|_| path.strip_prefix("."))
        .unwrap_or(path)
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext))
}
