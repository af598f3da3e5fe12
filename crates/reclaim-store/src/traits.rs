//! The [`Reserver`] trait defining the allocation-store contract.

use reclaim_types::{Action, AttachmentId, ReservationRequest};

use crate::error::StoreResult;

/// Outcome of a successful reservation call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReservationOutcome {
    /// The address was newly marked allocated for this owner.
    Created,
    /// The same owner already held this address; nothing changed.
    AlreadyReserved,
}

/// An allocation store that can replay reservations.
///
/// All implementations must satisfy these invariants:
/// - Reservations are tagged with the owning [`AttachmentId`]; repeating a
///   call with the same owner and address succeeds without creating a second
///   allocation (the owner id is the de-duplication key).
/// - At most one owner wins any given address; a second owner is rejected
///   with a conflict error, never silently overwritten.
/// - Cross-process exclusion is the store's job. Callers issue requests
///   serially and perform no locking of their own.
pub trait Reserver: Send + Sync {
    /// Apply `action` for the addresses in `request` on behalf of `owner`.
    ///
    /// The recovery workflow only issues [`Action::Reserve`]. The request's
    /// datastore selector and connection parameters are pass-through context
    /// for cluster-backed implementations.
    fn reserve(
        &self,
        action: Action,
        request: &ReservationRequest,
        owner: &AttachmentId,
    ) -> StoreResult<ReservationOutcome>;
}
