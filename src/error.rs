//! Process exit codes for the CLI.

/// Exit codes for the dupelens binary.
///
/// - 0: Completed normally, duplicates found
/// - 1: Unexpected failure
/// - 2: Completed normally, no duplicates
/// - 130: Interrupted by user (128 + SIGINT)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Scan completed and duplicates were found.
    Success = 0,
    /// An unexpected error occurred.
    GeneralError = 1,
    /// Scan completed but no duplicates were found.
    NoDuplicates = 2,
    /// Scan was interrupted by the user.
    Interrupted = 130,
}

impl ExitCode {
    /// Numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}
