use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum KptError {
    /// The kpt binary could not be executed at all.
    #[error("failed to run kpt: {0}")]
    Spawn(#[from] std::io::Error),

    /// kpt ran but reported a failure.
    #[error("`kpt {command}` failed ({status}): {stderr}")]
    Command {
        command: String,
        status: ExitStatus,
        stderr: String,
    },
}
