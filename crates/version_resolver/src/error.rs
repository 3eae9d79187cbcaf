// crates/version_resolver/src/error.rs

use std::io;
use std::process::ExitStatus;

use thiserror::Error;

/// The only way a resolution can fail: the version command could not be run
/// or it exited unsuccessfully.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The shell could not be spawned at all.
    #[error("failed to execute `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    /// The command ran but exited with a non-zero status.
    #[error("`{command}` exited with {status}: {stderr}")]
    Failed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },
}

impl CommandError {
    /// The command line that produced this error.
    pub fn command(&self) -> &str {
        match self {
            CommandError::Spawn { command, .. } | CommandError::Failed { command, .. } => command,
        }
    }
}
