#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Report written. Assertion failures inside the report do not change this.
    Success = 0,

    /// Results directory, run directory or log file is missing.
    InputNotFound = 20,

    /// Invalid CLI flags.
    InvalidInput = 30,

    /// Reading the log failed.
    RuntimeError = 40,

    /// Creating the output directory or writing the report failed.
    WriteFailure = 41,
}

impl ExitCode {
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}
