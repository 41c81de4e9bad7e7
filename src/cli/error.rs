//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::config::ConfigLoadError;
use crate::domain::SnapshotError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("{0}")]
    Config(#[from] ConfigLoadError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("cannot read input: {0}")]
    Stdin(#[source] std::io::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Config(_) => crate::exitcode::SOFTWARE,
            CliError::Stdin(_) => crate::exitcode::IOERR,
            CliError::Infra(e) => match e {
                InfraError::Io { .. } => crate::exitcode::IOERR,
                InfraError::Snapshot(SnapshotError::Read(_)) => crate::exitcode::IOERR,
                InfraError::Snapshot(_) => crate::exitcode::DATAERR,
            },
        }
    }
}
