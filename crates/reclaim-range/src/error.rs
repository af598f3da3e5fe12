//! Error types for range operations.

use thiserror::Error;

/// Errors that can occur while parsing CIDRs or deriving range bounds.
#[derive(Debug, Error)]
pub enum RangeError {
    /// The input was not an "address/prefix" CIDR string.
    #[error("invalid CIDR {input:?}: {reason}")]
    InvalidCidr { input: String, reason: String },

    /// The prefix length exceeds what the address family allows.
    #[error("prefix length {prefix} out of range for this family (max {max})")]
    InvalidPrefix { prefix: u8, max: u8 },

    /// The network is too small to hold a usable first/last address pair.
    #[error("network {network} is degenerate: no usable address range")]
    DegenerateNetwork { network: String },

    /// The supplied base address does not match the network.
    #[error("base address {base} does not match network {network}")]
    BaseMismatch { base: String, network: String },
}

/// Convenience type alias for range operations.
pub type RangeResult<T> = std::result::Result<T, RangeError>;
