//! Human-readable subnet lines.

use crate::models::Ipv4;

/// Format one subnet for a person reading the terminal.
///
/// `index` is the 1-based position of the subnet in the split.
pub fn format_subnet(index: u64, subnet: &Ipv4) -> String {
    format!(
        "Subnet #{index}: {netmask} or {cidr} server host: {host}",
        netmask = subnet.netmask(),
        cidr = subnet,
        host = subnet.first_host(),
    )
}
