//! Errors raised while parsing or splitting an address space.

use super::Ipv4;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressSpaceError {
    /// The address or mask text is not a valid IPv4 network.
    InvalidAddress { input: String, reason: String },
    /// Numeric prefix length larger than 32.
    InvalidPrefix(u32),
    /// Address has bits set to the right of the prefix, e.g. `10.8.0.1/24`.
    HostBitsSet { input: String },
    /// Extending the prefix far enough for `subnets` would pass /32.
    TooManySubnets {
        network: Ipv4,
        subnets: u64,
        prefix: u32,
    },
}

impl fmt::Display for AddressSpaceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AddressSpaceError::InvalidAddress { input, reason } => {
                write!(f, "'{input}' is not a valid IPv4 network: {reason}")
            }
            AddressSpaceError::InvalidPrefix(len) => {
                write!(f, "prefix length /{len} is invalid, must be 0-32")
            }
            AddressSpaceError::HostBitsSet { input } => write!(f, "'{input}' has host bits set"),
            AddressSpaceError::TooManySubnets {
                network,
                subnets,
                prefix,
            } => write!(
                f,
                "{network} is too small for {subnets} subnets (would need prefix /{prefix})"
            ),
        }
    }
}

impl Error for AddressSpaceError {}
