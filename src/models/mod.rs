//! Domain models for the subnet calculator.
//!
//! - [`Ipv4`] - IPv4 network with CIDR notation support
//! - [`AddressSpaceError`] - why an address space could not be used

mod error;
mod ipv4;

// Re-export public types
pub use error::AddressSpaceError;
pub use ipv4::{cut_addr, get_cidr_mask, ip_after_subnet, mask_to_prefix, Ipv4, MAX_LENGTH};
