//! Error types for the foundation crate.

use thiserror::Error;

/// Errors arising from constructing or validating foundation types.
#[derive(Debug, Error)]
pub enum TypeError {
    /// An attachment identifier was empty or carried illegal characters.
    #[error("invalid attachment id {id:?}: {reason}")]
    InvalidAttachmentId { id: String, reason: String },

    /// A decoded result document had no assigned addresses.
    #[error("attachment result contains no assigned addresses")]
    NoAssignedAddress,
}
