use std::process::ExitCode;

/// Process exit status of a locov run.
///
/// - `Success` (0): every locale was audited and none fell below `minCoverage`
/// - `Failure` (1): at least one error-level issue, e.g. a locale below `minCoverage`
/// - `Error` (2): the audit could not run (bad config, missing locales dir, unreadable reference)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    /// Pick the status for a finished audit from its error-level issue count.
    pub fn from_error_count(error_count: usize) -> Self {
        if error_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }

    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}
