//! Script consumable subnet lines.

use crate::models::Ipv4;

/// `<network> <netmask> <first host>`, separated by single spaces.
pub fn format_batch(subnet: &Ipv4) -> String {
    format!(
        "{} {} {}",
        subnet.network(),
        subnet.netmask(),
        subnet.first_host()
    )
}
