//! The [`RangeBounder`] trait and its concrete CIDR arithmetic.

use std::net::IpAddr;

use serde::{Deserialize, Serialize};

use crate::cidr::Network;
use crate::error::{RangeError, RangeResult};

/// A reconstructed address range: the containing CIDR plus its bounds.
///
/// Derived per artifact and handed to the reservation dispatcher; never
/// persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRange {
    /// The range in CIDR form, e.g. "24.51.17.120/29".
    pub cidr: String,
    /// First address of the range (network base).
    pub first: IpAddr,
    /// Last address of the range.
    pub last: IpAddr,
}

/// Boundary computation for an address range.
///
/// Implementations take the network base address and the network itself and
/// return the first and last addresses of the usable range, or an error for
/// degenerate networks. Modeled as a capability so tests can substitute a
/// fake.
pub trait RangeBounder: Send + Sync {
    fn bounds(&self, base: IpAddr, network: &Network) -> RangeResult<(IpAddr, IpAddr)>;
}

/// Plain CIDR arithmetic: first = network base, last = broadcast (v4) or the
/// highest address (v6).
///
/// Networks with fewer than two host bits beyond a distinct base/last pair
/// are rejected: v4 prefixes above /30 and v6 prefixes above /126 cannot
/// describe a range worth reserving from.
#[derive(Clone, Copy, Debug, Default)]
pub struct CidrBounder;

impl RangeBounder for CidrBounder {
    fn bounds(&self, base: IpAddr, network: &Network) -> RangeResult<(IpAddr, IpAddr)> {
        if base != network.base() {
            return Err(RangeError::BaseMismatch {
                base: base.to_string(),
                network: network.to_string(),
            });
        }
        let max_usable = match base {
            IpAddr::V4(_) => 30,
            IpAddr::V6(_) => 126,
        };
        if network.prefix() > max_usable {
            return Err(RangeError::DegenerateNetwork {
                network: network.to_string(),
            });
        }
        Ok((network.base(), network.last_address()))
    }
}
