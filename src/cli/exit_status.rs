use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// Per-archive failures are recorded in ledgers and never change the status.
///
/// - `Success` (0): Command ran to completion
/// - `Failure` (1): Command refused to act (e.g. config file already exists)
/// - `Error` (2): Command could not run (missing mods dir, unreadable report, bad config)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
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
