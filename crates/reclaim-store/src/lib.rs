//! The reservation store contract for `reclaim`.
//!
//! The allocation store is an external system; this crate defines the narrow
//! [`Reserver`] capability the recovery workflow consumes, plus two
//! implementations of it:
//!
//! - [`InMemoryStore`] for tests and dry runs
//! - [`FileStore`], a durable JSON ledger, for runs without a cluster-backed
//!   store wired in
//!
//! Both honor the same contract: reservations are keyed by owning attachment
//! id, repeating a reservation with the same owner is a no-op success, and a
//! second owner for the same address is a conflict.

pub mod error;
pub mod file;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use file::FileStore;
pub use memory::InMemoryStore;
pub use traits::{ReservationOutcome, Reserver};
