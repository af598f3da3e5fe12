//! Error types for store operations.

use thiserror::Error;

/// Errors that can occur during reservation operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The address is already reserved by a different owner.
    #[error("address {address} already reserved by {holder}")]
    Conflict { address: String, holder: String },

    /// A request arrived with no address entries.
    #[error("reservation request carries no addresses")]
    EmptyRequest,

    /// Ledger (de)serialization failure.
    #[error("ledger serialization error: {0}")]
    Serialization(String),

    /// A shared lock was poisoned by a panicking writer.
    #[error("store lock poisoned: {0}")]
    LockPoisoned(String),

    /// I/O error while reading or rewriting the ledger.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
