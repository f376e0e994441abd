//! IPv4 network and CIDR notation utilities.
//!
//! Provides the [`Ipv4`] network value along with the bit arithmetic used to
//! derive masks, broadcast addresses and neighbouring subnets.

use super::AddressSpaceError;
use lazy_static::lazy_static;
use regex::Regex;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

lazy_static! {
    // rejects more than one '/'
    static ref CIDR_RE: Regex =
        Regex::new(r"^(?P<addr>[^/]*)(?:/(?P<mask>[^/]*))?$").expect("Invalid Regex?");
}

// Callers keep `len <= MAX_LENGTH`; larger values saturate to a full mask.
fn mask_bits(len: u8) -> u32 {
    let right_len = MAX_LENGTH.saturating_sub(len);
    let all_bits = u32::MAX as u64;
    ((all_bits >> right_len) << right_len) as u32
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use vpn_subnets::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, AddressSpaceError> {
    if len > MAX_LENGTH {
        Err(AddressSpaceError::InvalidPrefix(len.into()))
    } else {
        Ok(mask_bits(len))
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, AddressSpaceError> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Returns the network address of the block following the `/cidr` block that
/// holds `addr`, or `None` when that would run past 255.255.255.255.
pub fn ip_after_subnet(addr: Ipv4Addr, cidr: u8) -> Option<Ipv4Addr> {
    if cidr > MAX_LENGTH {
        return None;
    }
    let subnet_size = 1u64 << (MAX_LENGTH - cidr);
    let network_bits = (u32::from(addr) & mask_bits(cidr)) as u64;
    let next_bits = network_bits + subnet_size;
    u32::try_from(next_bits).ok().map(Ipv4Addr::from)
}

/// Prefix length of a dotted netmask, `None` unless its ones are contiguous
/// from the left.
pub fn mask_to_prefix(mask: Ipv4Addr) -> Option<u8> {
    let bits = u32::from(mask);
    let ones = bits.leading_ones();
    if bits.checked_shl(ones).unwrap_or(0) == 0 {
        Some(ones as u8)
    } else {
        None
    }
}

/// An IPv4 network in CIDR notation.
///
/// Always a proper network: the prefix is at most 32 and no bits are set to
/// the right of it.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    pub(crate) addr: Ipv4Addr,
    pub(crate) mask: u8,
}

impl Ipv4 {
    /// Parse a network from text such as `10.0.0.0/24`, `10.0.0.0/255.255.255.0`,
    /// `10.0.0.0/0.0.0.255` or a bare `10.0.0.1` (a /32).
    ///
    /// Parsing is strict: `10.0.0.1/24` is rejected because host bits are set,
    /// and so is any surrounding whitespace.
    pub fn new(addr_cidr: &str) -> Result<Ipv4, AddressSpaceError> {
        let invalid = |reason: String| AddressSpaceError::InvalidAddress {
            input: addr_cidr.to_string(),
            reason,
        };

        let caps = CIDR_RE
            .captures(addr_cidr)
            .ok_or_else(|| invalid("expected x.x.x.x/y".to_string()))?;
        let addr_str = caps.name("addr").map_or("", |m| m.as_str());
        let addr: Ipv4Addr = addr_str
            .parse()
            .map_err(|_| invalid(format!("invalid address '{addr_str}'")))?;

        let mask = match caps.name("mask") {
            None => MAX_LENGTH,
            Some(m) => parse_mask(m.as_str()).map_err(|e| match e {
                AddressSpaceError::InvalidAddress { reason, .. } => invalid(reason),
                other => other,
            })?,
        };

        if cut_addr(addr, mask)? != addr {
            return Err(AddressSpaceError::HostBitsSet {
                input: addr_cidr.to_string(),
            });
        }
        Ok(Ipv4 { addr, mask })
    }

    /// The lowest (network) address in the subnet.
    pub fn network(&self) -> Ipv4Addr {
        self.addr
    }

    /// The subnet mask length (0-32).
    pub fn prefix(&self) -> u8 {
        self.mask
    }

    /// The prefix as a dotted netmask, e.g. `255.255.255.128`.
    pub fn netmask(&self) -> Ipv4Addr {
        Ipv4Addr::from(mask_bits(self.mask))
    }

    /// The highest (broadcast) address in the subnet.
    pub fn broadcast(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) | !mask_bits(self.mask))
    }

    /// First address that can be handed to a host.
    ///
    /// /31 and /32 have no network/broadcast pair to skip, so the network
    /// address itself is returned.
    pub fn first_host(&self) -> Ipv4Addr {
        if self.mask >= MAX_LENGTH - 1 {
            self.addr
        } else {
            Ipv4Addr::from(u32::from(self.addr) + 1)
        }
    }

    /// Number of addresses in the block, network and broadcast included.
    pub fn num_addresses(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.mask)
    }
}

fn parse_mask(mask: &str) -> Result<u8, AddressSpaceError> {
    let invalid = |reason: String| AddressSpaceError::InvalidAddress {
        input: mask.to_string(),
        reason,
    };

    if !mask.is_empty() && mask.bytes().all(|b| b.is_ascii_digit()) {
        let len: u32 = mask
            .parse()
            .map_err(|_| invalid(format!("prefix '{mask}' is out of range")))?;
        if len > MAX_LENGTH as u32 {
            return Err(AddressSpaceError::InvalidPrefix(len));
        }
        return Ok(len as u8);
    }

    // dotted form: netmask first, then hostmask
    let dotted: Ipv4Addr = mask
        .parse()
        .map_err(|_| invalid(format!("'{mask}' is not a valid netmask")))?;
    mask_to_prefix(dotted)
        .or_else(|| mask_to_prefix(Ipv4Addr::from(!u32::from(dotted))))
        .ok_or_else(|| invalid(format!("'{mask}' is not a valid netmask")))
}

impl FromStr for Ipv4 {
    type Err = AddressSpaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4::new(s)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
