use std::process::ExitCode;

/// Exit status of the CLI.
///
/// - `Success` (0): all bundles were written
/// - `Error` (2): the run failed (config error, unreadable or malformed file, missing destination)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Run completed.
    Success,
    /// Run failed due to an error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
