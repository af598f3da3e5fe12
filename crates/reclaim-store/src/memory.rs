//! In-memory reservation store for testing and dry runs.
//!
//! [`InMemoryStore`] keeps allocations in a `HashMap` behind a `RwLock`. It
//! implements the full [`Reserver`] contract and is what `--dry-run` wires
//! into the batch runner. Data is lost when the store is dropped.

use std::collections::HashMap;
use std::sync::RwLock;

use reclaim_types::{Action, AttachmentId, ReservationRequest};

use crate::error::{StoreError, StoreResult};
use crate::traits::{ReservationOutcome, Reserver};

/// An in-memory implementation of [`Reserver`].
#[derive(Debug, Default)]
pub struct InMemoryStore {
    allocations: RwLock<HashMap<String, AttachmentId>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The owner currently holding `address`, if any.
    pub fn owner_of(&self, address: &str) -> StoreResult<Option<AttachmentId>> {
        let allocations = self
            .allocations
            .read()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;
        Ok(allocations.get(address).cloned())
    }

    /// Number of allocations currently recorded.
    pub fn len(&self) -> StoreResult<usize> {
        let allocations = self
            .allocations
            .read()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;
        Ok(allocations.len())
    }

    /// Whether the store holds no allocations.
    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl Reserver for InMemoryStore {
    fn reserve(
        &self,
        action: Action,
        request: &ReservationRequest,
        owner: &AttachmentId,
    ) -> StoreResult<ReservationOutcome> {
        let Action::Reserve = action;
        if request.addresses.is_empty() {
            return Err(StoreError::EmptyRequest);
        }

        let mut allocations = self
            .allocations
            .write()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;

        // Reject conflicts before mutating anything, so a multi-address
        // request never lands half-applied.
        for entry in &request.addresses {
            if let Some(holder) = allocations.get(&entry.address) {
                if holder != owner {
                    return Err(StoreError::Conflict {
                        address: entry.address.clone(),
                        holder: holder.to_string(),
                    });
                }
            }
        }

        let mut outcome = ReservationOutcome::AlreadyReserved;
        for entry in &request.addresses {
            if allocations
                .insert(entry.address.clone(), owner.clone())
                .is_none()
            {
                outcome = ReservationOutcome::Created;
            }
        }
        Ok(outcome)
    }
}
