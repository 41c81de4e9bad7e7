//! Infrastructure-level errors (wraps domain errors)

use thiserror::Error;

use crate::domain::SnapshotError;

/// Infrastructure errors wrap domain errors and add file-boundary concerns.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("{0}")]
    Snapshot(#[from] SnapshotError),

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl InfraError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

/// Result type for infrastructure layer operations.
pub type InfraResult<T> = Result<T, InfraError>;
