//! Foundation types for `reclaim`.
//!
//! This crate provides the data model shared by every other reclaim crate.
//!
//! # Key Types
//!
//! - [`AttachmentId`] — Opaque identifier of a network attachment, extracted
//!   from a result-file name; the ownership/idempotency key for reservations
//! - [`AttachmentResult`] — Decoded form of an on-disk CNI result document
//! - [`ReservationRequest`] — The allocator configuration handed to a store
//!   when replaying a single reservation
//! - [`Datastore`] — Backend selector carried inside a request

pub mod attachment;
pub mod error;
pub mod request;

pub use attachment::{AttachmentId, AttachmentResult, InterfaceEntry, IpEntry, RouteEntry};
pub use error::TypeError;
pub use request::{
    Action, Datastore, KubernetesConfig, ReservationRequest, ReservedAddress,
};
