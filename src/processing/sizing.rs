//! Prefix sizing for host counts.

use crate::error::SubnetError;
use crate::models::{check_prefix, MAX_LENGTH};

/// Usable host addresses for a prefix.
///
/// Up to /30 this is the block size minus network and broadcast. A /31 has
/// no conventional hosts and a /32 counts the single address itself.
pub fn usable_hosts(prefix: u8) -> Result<u64, SubnetError> {
    match check_prefix(prefix, 0, MAX_LENGTH)? {
        31 => Ok(0),
        32 => Ok(1),
        p => Ok((1u64 << (MAX_LENGTH - p)) - 2),
    }
}

/// Smallest prefix whose block holds `hosts` usable addresses.
///
/// Sizing always reserves a network and broadcast address, so the result is
/// never longer than /30, even for a single host.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::processing::minimal_prefix_for_hosts;
/// assert_eq!(minimal_prefix_for_hosts(1).unwrap(), 30);
/// assert_eq!(minimal_prefix_for_hosts(50).unwrap(), 26);
/// ```
pub fn minimal_prefix_for_hosts(hosts: u32) -> Result<u8, SubnetError> {
    let invalid = || SubnetError::InvalidHostCount {
        id: 0,
        hosts: hosts as u64,
    };
    if hosts == 0 {
        return Err(invalid());
    }

    let needed = hosts as u64 + 2;
    let mut bits: u8 = 0;
    while (1u64 << bits) < needed {
        bits += 1;
    }
    if bits > MAX_LENGTH {
        // more hosts than the whole address space can hold
        return Err(invalid());
    }
    Ok(MAX_LENGTH - bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usable_hosts() {
        assert_eq!(usable_hosts(0).unwrap(), 4294967294);
        assert_eq!(usable_hosts(8).unwrap(), 16777214);
        assert_eq!(usable_hosts(24).unwrap(), 254);
        assert_eq!(usable_hosts(26).unwrap(), 62);
        assert_eq!(usable_hosts(28).unwrap(), 14);
        assert_eq!(usable_hosts(30).unwrap(), 2);
        assert_eq!(usable_hosts(31).unwrap(), 0);
        assert_eq!(usable_hosts(32).unwrap(), 1);
        assert!(usable_hosts(33).is_err());
    }

    #[test]
    fn test_minimal_prefix_for_hosts() {
        assert_eq!(minimal_prefix_for_hosts(1).unwrap(), 30);
        assert_eq!(minimal_prefix_for_hosts(2).unwrap(), 30);
        assert_eq!(minimal_prefix_for_hosts(3).unwrap(), 29);
        assert_eq!(minimal_prefix_for_hosts(10).unwrap(), 28);
        assert_eq!(minimal_prefix_for_hosts(14).unwrap(), 28);
        assert_eq!(minimal_prefix_for_hosts(15).unwrap(), 27);
        assert_eq!(minimal_prefix_for_hosts(50).unwrap(), 26);
        assert_eq!(minimal_prefix_for_hosts(254).unwrap(), 24);
        assert_eq!(minimal_prefix_for_hosts(255).unwrap(), 23);
        assert_eq!(minimal_prefix_for_hosts(4294967294).unwrap(), 0);
    }

    #[test]
    fn test_minimal_prefix_never_31_or_32() {
        for hosts in 1..=2 {
            let prefix = minimal_prefix_for_hosts(hosts).unwrap();
            assert_eq!(prefix, 30);
            assert_eq!(usable_hosts(prefix).unwrap(), 2);
        }
    }

    #[test]
    fn test_minimal_prefix_invalid() {
        assert_eq!(
            minimal_prefix_for_hosts(0),
            Err(SubnetError::InvalidHostCount { id: 0, hosts: 0 })
        );
        assert!(minimal_prefix_for_hosts(u32::MAX).is_err());
    }

    #[test]
    fn test_minimal_prefix_fits() {
        for hosts in [1u32, 2, 3, 7, 100, 1000, 65534, 65535] {
            let prefix = minimal_prefix_for_hosts(hosts).unwrap();
            assert!(usable_hosts(prefix).unwrap() >= hosts as u64);
            assert!(usable_hosts(prefix + 1).unwrap() < hosts as u64 || prefix == 30);
        }
    }
}
