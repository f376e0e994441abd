//! Splitting an address space into equally sized subnets.

use crate::models::{ip_after_subnet, AddressSpaceError, Ipv4, MAX_LENGTH};

/// Number of extra network bits needed for at least `subnets` subnets.
///
/// This is the bit length of `subnets - 1`, so exact powers of two are not
/// rounded up: 4 subnets need 2 bits, 5 need 3.
pub fn extra_bits(subnets: u64) -> u32 {
    if subnets <= 1 {
        0
    } else {
        u64::BITS - (subnets - 1).leading_zeros()
    }
}

/// Split `space` into the next power of two >= `subnets` equal subnets.
///
/// Fails before anything is enumerated when the resulting prefix would be
/// longer than /32.
pub fn split_subnets(space: Ipv4, subnets: u64) -> Result<Subnets, AddressSpaceError> {
    let bits = extra_bits(subnets);
    let prefix = space.prefix() as u32 + bits;
    if prefix > MAX_LENGTH as u32 {
        return Err(AddressSpaceError::TooManySubnets {
            network: space,
            subnets,
            prefix,
        });
    }
    log::debug!(
        "split {space} into {} subnets of /{prefix} ({subnets} requested)",
        1u64 << bits
    );

    Ok(Subnets {
        next: Some(Ipv4 {
            addr: space.network(),
            mask: prefix as u8,
        }),
        remaining: 1u64 << bits,
    })
}

/// Lazily yields the subnets of a split in ascending address order.
#[derive(Debug, Clone)]
pub struct Subnets {
    next: Option<Ipv4>,
    remaining: u64,
}

impl Iterator for Subnets {
    type Item = Ipv4;

    fn next(&mut self) -> Option<Ipv4> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next?;
        self.remaining -= 1;
        self.next = ip_after_subnet(current.addr, current.mask).map(|addr| Ipv4 {
            addr,
            mask: current.mask,
        });
        log::trace!("subnet {current}");
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    fn next_power_of_two(n: u64) -> u64 {
        n.max(1).next_power_of_two()
    }

    #[test]
    fn test_extra_bits() {
        assert_eq!(extra_bits(0), 0);
        assert_eq!(extra_bits(1), 0);
        assert_eq!(extra_bits(2), 1);
        assert_eq!(extra_bits(3), 2);
        assert_eq!(extra_bits(4), 2);
        assert_eq!(extra_bits(5), 3);
        assert_eq!(extra_bits(1024), 10);
        assert_eq!(extra_bits(1025), 11);
        assert_eq!(extra_bits(1 << 32), 32);
        assert_eq!(extra_bits(u64::MAX), 64);
    }

    #[test]
    fn test_split_two() {
        let space = Ipv4::new("10.8.0.0/24").unwrap();
        let subnets: Vec<Ipv4> = split_subnets(space, 2).unwrap().collect();
        assert_eq!(
            subnets,
            vec![
                Ipv4::new("10.8.0.0/25").unwrap(),
                Ipv4::new("10.8.0.128/25").unwrap()
            ]
        );
        assert_eq!(subnets[0].first_host(), Ipv4Addr::new(10, 8, 0, 1));
        assert_eq!(subnets[1].first_host(), Ipv4Addr::new(10, 8, 0, 129));
    }

    #[test]
    fn test_split_rounds_up_to_power_of_two() {
        let space = Ipv4::new("10.8.0.0/24").unwrap();
        let subnets: Vec<Ipv4> = split_subnets(space, 3).unwrap().collect();
        assert_eq!(subnets.len(), 4);
        assert!(subnets.iter().all(|s| s.prefix() == 26));
        assert_eq!(subnets[3], Ipv4::new("10.8.0.192/26").unwrap());
    }

    #[test]
    fn test_split_one_is_identity() {
        let space = Ipv4::new("10.8.0.0/16").unwrap();
        let subnets: Vec<Ipv4> = split_subnets(space, 1).unwrap().collect();
        assert_eq!(subnets, vec![space]);
    }

    #[test]
    fn test_split_count_and_partition() {
        for cidr in ["10.8.0.0/24", "192.168.4.0/22", "172.16.0.0/28"] {
            let space = Ipv4::new(cidr).unwrap();
            let max = space.num_addresses();
            for n in 1..=max {
                let subnets: Vec<Ipv4> = split_subnets(space, n).unwrap().collect();
                assert_eq!(subnets.len() as u64, next_power_of_two(n), "{cidr} n={n}");

                // contiguous, disjoint and covering the whole space
                assert_eq!(subnets[0].network(), space.network());
                for pair in subnets.windows(2) {
                    assert_eq!(
                        u32::from(pair[0].broadcast()) + 1,
                        u32::from(pair[1].network())
                    );
                }
                assert_eq!(subnets.last().unwrap().broadcast(), space.broadcast());
                let total: u64 = subnets.iter().map(|s| s.num_addresses()).sum();
                assert_eq!(total, max);
            }
        }
    }

    #[test]
    fn test_split_to_end_of_address_space() {
        let space = Ipv4::new("255.255.255.0/24").unwrap();
        let subnets: Vec<Ipv4> = split_subnets(space, 256).unwrap().collect();
        assert_eq!(subnets.len(), 256);
        assert_eq!(subnets[255], Ipv4::new("255.255.255.255/32").unwrap());
    }

    #[test]
    fn test_split_whole_internet_is_lazy() {
        let space = Ipv4::new("0.0.0.0/0").unwrap();
        let mut subnets = split_subnets(space, 1 << 32).unwrap();
        if let Ok(total) = usize::try_from(1u64 << 32) {
            assert_eq!(subnets.size_hint(), (total, Some(total)));
        }
        assert_eq!(subnets.next(), Some(Ipv4::new("0.0.0.0/32").unwrap()));
        assert_eq!(subnets.next(), Some(Ipv4::new("0.0.0.1/32").unwrap()));
    }

    #[test]
    fn test_split_too_many() {
        let space = Ipv4::new("10.8.0.0/30").unwrap();
        assert_eq!(
            split_subnets(space, 100).unwrap_err(),
            AddressSpaceError::TooManySubnets {
                network: space,
                subnets: 100,
                prefix: 37
            }
        );
        assert!(split_subnets(space, 4).is_ok());
        assert!(split_subnets(space, 5).is_err());
    }
}
