//! CIDR parsing and range-boundary computation for `reclaim`.
//!
//! Given an assigned address in CIDR form ("24.51.17.125/29"), this crate
//! reconstructs the context the allocator needs: the containing network
//! ("24.51.17.120/29") and the first and last addresses of that range.
//!
//! Boundary computation sits behind the [`RangeBounder`] trait so tests and
//! alternative allocators can substitute their own arithmetic.

pub mod bounds;
pub mod cidr;
pub mod error;

pub use bounds::{AddressRange, CidrBounder, RangeBounder};
pub use cidr::{parse_cidr, Network};
pub use error::{RangeError, RangeResult};
