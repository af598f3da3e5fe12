//! Error types for the recovery engine.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while recovering reservations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The artifact name pattern failed to compile.
    #[error("invalid artifact name pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The results directory exists but cannot be listed. The one fatal
    /// condition of a run.
    #[error("failed to list results directory {path}: {source}")]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Artifact content was not a valid result document.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A foundation-type invariant was violated (empty id, no addresses).
    #[error(transparent)]
    Type(#[from] reclaim_types::TypeError),

    /// CIDR parsing or boundary computation failed.
    #[error(transparent)]
    Range(#[from] reclaim_range::RangeError),

    /// The store rejected or could not complete a reservation.
    #[error(transparent)]
    Store(#[from] reclaim_store::StoreError),

    /// I/O failure reading an artifact.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for engine operations.
pub type EngineResult<T> = std::result::Result<T, EngineError>;
