//! Domain-level errors: snapshot decoding failures

use thiserror::Error;

/// Decoding a pre-order snapshot stream is all-or-nothing; any of these
/// leaves the caller's existing tree untouched.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("malformed token {token:?} at line {line}: expected an integer or '#'")]
    MalformedToken { line: usize, token: String },

    #[error("snapshot truncated: stream ended at line {line} with the tree incomplete")]
    UnexpectedEof { line: usize },

    #[error("trailing token at line {line} after the tree was complete")]
    TrailingTokens { line: usize },

    #[error("failed to read snapshot stream")]
    Read(#[from] std::io::Error),
}

/// Result type for snapshot encode/decode operations.
pub type SnapshotResult<T> = Result<T, SnapshotError>;
