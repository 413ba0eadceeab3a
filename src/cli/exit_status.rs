use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed; every file was processed
/// - `Failure` (1): Command completed but had nothing to do or some files failed
/// - `Error` (2): Command aborted (unreadable input, invalid config, backup failure, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed; every file was processed.
    Success,
    /// Command completed but had nothing to do or some files failed.
    Failure,
    /// Command aborted.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
