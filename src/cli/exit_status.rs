use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Every requested stage completed
/// - `Skipped` (1): The template was written but translation was skipped (no API key)
/// - `Error` (2): A stage failed (missing source root or version, I/O, translation error)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Every requested stage completed.
    Success,
    /// Translation was skipped for lack of credentials.
    Skipped,
    /// A stage failed.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Skipped => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
