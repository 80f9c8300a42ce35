//! Error types for diff reconciliation.

use mapsync_types::ElementKey;
use thiserror::Error;

/// Result type for diff operations.
pub type DiffResult<T> = Result<T, DiffError>;

/// Errors that can occur while ingesting upload diffs.
#[derive(Debug, Error)]
pub enum DiffError {
    /// The diff names an element type this client does not know.
    #[error("unknown element type: {0}")]
    UnknownElementType(String),

    /// The diff carries a server id but no server version.
    #[error("malformed diff for {key}: server id without server version")]
    MalformedDiff { key: ElementKey },

    /// The diff document could not be decoded.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
