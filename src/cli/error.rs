use std::process::ExitCode;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to initialize logs: {0}")]
    Tracing(String),

    #[error("{0}")]
    Command(String),
}

impl From<CliError> for ExitCode {
    /// Converts the error to an exit code, following the BSD [sysexits]
    /// convention where one applies.
    ///
    /// [sysexits]: https://man.freebsd.org/cgi/man.cgi?query=sysexits
    fn from(value: CliError) -> Self {
        match value {
            CliError::Tracing(_) => Self::from(70),
            CliError::Command(_) => Self::from(1),
        }
    }
}
