//! Source files and backup-then-write commits.

use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};

/// A component source file held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    path: PathBuf,
    content: String,
}

/// Result of [`SourceFile::commit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// New content equals the current content; nothing written.
    Unchanged,
    /// Backup written, then the new content.
    Written { backup: PathBuf },
}

impl SourceFile {
    pub fn open(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
            content,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Original path with `suffix` appended (`Page.jsx` → `Page.jsx.backup`).
    pub fn backup_path(&self, suffix: &str) -> PathBuf {
        let mut path: OsString = self.path.as_os_str().to_owned();
        path.push(suffix);
        PathBuf::from(path)
    }

    /// Replace the file content.
    ///
    /// The current content is first written to the backup path and read back;
    /// the source path is only written once the backup matches byte for byte.
    /// Any failure before that point leaves the source file untouched.
    pub fn commit(&mut self, content: String, backup_suffix: &str) -> Result<CommitOutcome> {
        if content == self.content {
            return Ok(CommitOutcome::Unchanged);
        }

        let backup = self.backup_path(backup_suffix);
        fs::write(&backup, &self.content)
            .with_context(|| format!("Failed to write backup: {}", backup.display()))?;
        let persisted = fs::read(&backup)
            .with_context(|| format!("Failed to verify backup: {}", backup.display()))?;
        if persisted != self.content.as_bytes() {
            bail!("Backup does not match original content: {}", backup.display());
        }

        fs::write(&self.path, &content)
            .with_context(|| format!("Failed to write file: {}", self.path.display()))?;
        self.content = content;

        Ok(CommitOutcome::Written { backup })
    }
}
