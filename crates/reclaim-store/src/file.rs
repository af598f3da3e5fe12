//! File-backed reservation ledger.
//!
//! [`FileStore`] persists allocations as a single JSON document, rewritten
//! atomically (write to a temporary file in the same directory, fsync, then
//! rename over the ledger). It gives a run durable, re-runnable semantics on
//! hosts where no cluster-backed store is wired in.
//!
//! The ledger format:
//!
//! ```json
//! {
//!   "allocations": {
//!     "24.51.17.125": { "owner": "abc123", "range": "24.51.17.120/29" }
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use reclaim_types::{Action, AttachmentId, ReservationRequest};

use crate::error::{StoreError, StoreResult};
use crate::traits::{ReservationOutcome, Reserver};

/// One allocation row in the ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub owner: AttachmentId,
    pub range: String,
}

/// The on-disk document. A BTreeMap keeps the file diffable across runs.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Ledger {
    allocations: BTreeMap<String, LedgerEntry>,
}

/// A [`Reserver`] backed by a JSON ledger file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Open a ledger at `path`. The file is created on first reservation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The ledger's path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The entry recorded for `address`, if any.
    pub fn entry(&self, address: &str) -> StoreResult<Option<LedgerEntry>> {
        Ok(self.load()?.allocations.get(address).cloned())
    }

    /// Number of allocations in the ledger.
    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.load()?.allocations.len())
    }

    /// Whether the ledger holds no allocations.
    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }

    fn load(&self) -> StoreResult<Ledger> {
        match fs::read(&self.path) {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| StoreError::Serialization(e.to_string())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Ledger::default()),
            Err(e) => Err(e.into()),
        }
    }

    fn persist(&self, ledger: &Ledger) -> StoreResult<()> {
        let parent = self.path.parent().unwrap_or_else(|| Path::new("."));
        let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
        serde_json::to_writer_pretty(&mut tmp, ledger)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        tmp.write_all(b"\n")?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        debug!(path = %self.path.display(), entries = ledger.allocations.len(), "ledger rewritten");
        Ok(())
    }
}

impl Reserver for FileStore {
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

        let mut ledger = self.load()?;

        for entry in &request.addresses {
            if let Some(existing) = ledger.allocations.get(&entry.address) {
                if &existing.owner != owner {
                    return Err(StoreError::Conflict {
                        address: entry.address.clone(),
                        holder: existing.owner.to_string(),
                    });
                }
            }
        }

        let mut outcome = ReservationOutcome::AlreadyReserved;
        for entry in &request.addresses {
            let row = LedgerEntry {
                owner: owner.clone(),
                range: request.range.clone(),
            };
            if ledger.allocations.insert(entry.address.clone(), row).is_none() {
                outcome = ReservationOutcome::Created;
            }
        }

        if outcome == ReservationOutcome::Created {
            self.persist(&ledger)?;
        }
        Ok(outcome)
    }
}
