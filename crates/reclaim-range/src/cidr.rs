//! CIDR parsing and network arithmetic.
//!
//! [`parse_cidr`] mirrors the usual split of a CIDR string into the host
//! address that was written and the network that contains it: parsing
//! "24.51.17.125/29" yields host 24.51.17.125 and network 24.51.17.120/29.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use serde::{Deserialize, Serialize};

use crate::error::{RangeError, RangeResult};

/// An IP network: masked base address plus prefix length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Network {
    base: IpAddr,
    prefix: u8,
}

impl Network {
    /// Build a network from any address inside it and a prefix length.
    ///
    /// The address is masked down to the network base, so
    /// `Network::new(24.51.17.125, 29)` is the 24.51.17.120/29 network.
    pub fn new(addr: IpAddr, prefix: u8) -> RangeResult<Self> {
        let max = Self::family_bits(addr);
        if prefix > max {
            return Err(RangeError::InvalidPrefix { prefix, max });
        }
        let base = match addr {
            IpAddr::V4(v4) => IpAddr::V4(Ipv4Addr::from(u32::from(v4) & mask_v4(prefix))),
            IpAddr::V6(v6) => IpAddr::V6(Ipv6Addr::from(u128::from(v6) & mask_v6(prefix))),
        };
        Ok(Self { base, prefix })
    }

    /// The masked base (network) address.
    pub fn base(&self) -> IpAddr {
        self.base
    }

    /// The prefix length.
    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// The highest address of the network (the v4 broadcast address).
    pub fn last_address(&self) -> IpAddr {
        match self.base {
            IpAddr::V4(v4) => {
                IpAddr::V4(Ipv4Addr::from(u32::from(v4) | !mask_v4(self.prefix)))
            }
            IpAddr::V6(v6) => {
                IpAddr::V6(Ipv6Addr::from(u128::from(v6) | !mask_v6(self.prefix)))
            }
        }
    }

    /// Whether `ip` lies inside this network. Always false across families.
    pub fn contains(&self, ip: IpAddr) -> bool {
        match (self.base, ip) {
            (IpAddr::V4(base), IpAddr::V4(ip)) => {
                u32::from(ip) & mask_v4(self.prefix) == u32::from(base)
            }
            (IpAddr::V6(base), IpAddr::V6(ip)) => {
                u128::from(ip) & mask_v6(self.prefix) == u128::from(base)
            }
            _ => false,
        }
    }

    fn family_bits(addr: IpAddr) -> u8 {
        match addr {
            IpAddr::V4(_) => 32,
            IpAddr::V6(_) => 128,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.prefix)
    }
}

fn mask_v4(prefix: u8) -> u32 {
    if prefix == 0 {
        0
    } else {
        u32::MAX << (32 - prefix)
    }
}

fn mask_v6(prefix: u8) -> u128 {
    if prefix == 0 {
        0
    } else {
        u128::MAX << (128 - prefix)
    }
}

/// Parse a CIDR string into the written host address and its network.
pub fn parse_cidr(input: &str) -> RangeResult<(IpAddr, Network)> {
    let (addr_part, prefix_part) = input.split_once('/').ok_or_else(|| {
        RangeError::InvalidCidr {
            input: input.to_string(),
            reason: "missing '/'".to_string(),
        }
    })?;
    let host: IpAddr = addr_part.parse().map_err(|e| RangeError::InvalidCidr {
        input: input.to_string(),
        reason: format!("bad address: {e}"),
    })?;
    let prefix: u8 = prefix_part.parse().map_err(|e| RangeError::InvalidCidr {
        input: input.to_string(),
        reason: format!("bad prefix: {e}"),
    })?;
    let network = Network::new(host, prefix)?;
    Ok((host, network))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_host_and_network() {
        let (host, network) = parse_cidr("24.51.17.125/29").unwrap();
        assert_eq!(host, "24.51.17.125".parse::<IpAddr>().unwrap());
        assert_eq!(network.to_string(), "24.51.17.120/29");
        assert_eq!(network.prefix(), 29);
    }

    #[test]
    fn network_base_is_masked() {
        let (_, network) = parse_cidr("10.1.2.3/16").unwrap();
        assert_eq!(network.base(), "10.1.0.0".parse::<IpAddr>().unwrap());
    }

    #[test]
    fn last_address_is_broadcast() {
        let (_, network) = parse_cidr("24.51.17.125/29").unwrap();
        assert_eq!(
            network.last_address(),
            "24.51.17.127".parse::<IpAddr>().unwrap()
        );
    }

    #[test]
    fn zero_prefix_spans_everything() {
        let (_, network) = parse_cidr("203.0.113.9/0").unwrap();
        assert_eq!(network.base(), "0.0.0.0".parse::<IpAddr>().unwrap());
        assert_eq!(
            network.last_address(),
            "255.255.255.255".parse::<IpAddr>().unwrap()
        );
    }

    #[test]
    fn v6_networks_work() {
        let (host, network) = parse_cidr("2001:db8::9/64").unwrap();
        assert_eq!(host, "2001:db8::9".parse::<IpAddr>().unwrap());
        assert_eq!(network.base(), "2001:db8::".parse::<IpAddr>().unwrap());
        assert_eq!(
            network.last_address(),
            "2001:db8::ffff:ffff:ffff:ffff".parse::<IpAddr>().unwrap()
        );
    }

    #[test]
    fn contains_respects_the_mask() {
        let (_, network) = parse_cidr("24.51.17.125/29").unwrap();
        assert!(network.contains("24.51.17.120".parse().unwrap()));
        assert!(network.contains("24.51.17.127".parse().unwrap()));
        assert!(!network.contains("24.51.17.128".parse().unwrap()));
        assert!(!network.contains("2001:db8::1".parse().unwrap()));
    }

    #[test]
    fn rejects_missing_slash() {
        assert!(matches!(
            parse_cidr("24.51.17.125").unwrap_err(),
            RangeError::InvalidCidr { .. }
        ));
    }

    #[test]
    fn rejects_garbage_address_and_prefix() {
        assert!(parse_cidr("not-an-ip/24").is_err());
        assert!(parse_cidr("10.0.0.1/notnum").is_err());
        assert!(parse_cidr("10.0.0.1/33").is_err());
        assert!(parse_cidr("2001:db8::1/129").is_err());
    }

    proptest! {
        #[test]
        fn host_always_lies_between_base_and_last(addr: u32, prefix in 0u8..=32) {
            let host = IpAddr::V4(Ipv4Addr::from(addr));
            let network = Network::new(host, prefix).unwrap();
            prop_assert!(network.contains(host));
            let base = match network.base() {
                IpAddr::V4(v4) => u32::from(v4),
                _ => unreachable!(),
            };
            let last = match network.last_address() {
                IpAddr::V4(v4) => u32::from(v4),
                _ => unreachable!(),
            };
            prop_assert!(base <= addr && addr <= last);
        }
    }
}
