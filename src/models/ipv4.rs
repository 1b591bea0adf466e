//! IPv4 address arithmetic.
//!
//! All calculations convert [`Ipv4Addr`] to a `u32` and work on unsigned
//! 32-bit values, widening to `u64` where a shift or sum could leave the
//! 32-bit range.

use crate::error::SubnetError;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Longest prefix that still leaves a network and broadcast address plus hosts.
pub const MAX_HOST_PREFIX: u8 = 30;

/// Check that `prefix` lies in `min..=max`.
pub fn check_prefix(prefix: u8, min: u8, max: u8) -> Result<u8, SubnetError> {
    if prefix < min || prefix > max {
        Err(SubnetError::InvalidPrefix {
            prefix: prefix.to_string(),
            min,
            max,
        })
    } else {
        Ok(prefix)
    }
}

/// Parse a dotted-quad address.
///
/// Each of the four components must be plain ASCII digits with a value up
/// to 255. Leading zeros are accepted (`010` is 10).
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::models::parse_address;
/// assert_eq!(parse_address("192.168.001.10").unwrap().to_string(), "192.168.1.10");
/// assert!(parse_address("192.168.1").is_err());
/// ```
pub fn parse_address(text: &str) -> Result<Ipv4Addr, SubnetError> {
    let text = text.trim();
    let parts: Vec<&str> = text.split('.').collect();
    if parts.len() != 4 {
        return Err(SubnetError::InvalidAddress(text.to_string()));
    }

    let mut octets = [0u8; 4];
    for (octet, part) in octets.iter_mut().zip(parts.iter()) {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SubnetError::InvalidAddress(text.to_string()));
        }
        // u8 parsing rejects anything above 255, including very long digit runs
        let trimmed = part.trim_start_matches('0');
        *octet = if trimmed.is_empty() {
            0
        } else {
            trimmed
                .parse::<u8>()
                .map_err(|_| SubnetError::InvalidAddress(text.to_string()))?
        };
    }
    Ok(Ipv4Addr::from(octets))
}

/// Format an address as a dotted quad.
pub fn format_address(addr: Ipv4Addr) -> String {
    addr.to_string()
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::models::mask_for_prefix;
/// assert_eq!(mask_for_prefix(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn mask_for_prefix(prefix: u8) -> Result<u32, SubnetError> {
    let prefix = check_prefix(prefix, 0, MAX_LENGTH)?;
    let right_len = MAX_LENGTH - prefix;
    let all_bits = u32::MAX as u64;

    // shifting by 32 is fine on a u64, prefix 0 ends up as 0
    let mask = (all_bits >> right_len) << right_len;

    Ok(mask as u32)
}

/// Bitwise complement of the subnet mask.
pub fn wildcard_for_prefix(prefix: u8) -> Result<u32, SubnetError> {
    Ok(!mask_for_prefix(prefix)?)
}

/// Get the network address for a given IP and prefix length.
pub fn network_address(addr: Ipv4Addr, prefix: u8) -> Result<Ipv4Addr, SubnetError> {
    let mask = mask_for_prefix(prefix)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address for a given network and prefix length.
pub fn broadcast_address(network: Ipv4Addr, prefix: u8) -> Result<Ipv4Addr, SubnetError> {
    let wildcard = wildcard_for_prefix(prefix)?;
    Ok(Ipv4Addr::from(u32::from(network) | wildcard))
}

/// Host portion of an address (the bits under the wildcard).
pub fn host_part(addr: Ipv4Addr, prefix: u8) -> Result<Ipv4Addr, SubnetError> {
    let wildcard = wildcard_for_prefix(prefix)?;
    Ok(Ipv4Addr::from(u32::from(addr) & wildcard))
}

/// Dotted binary form, e.g. `11000000.10101000.00000001.00000000`.
pub fn to_binary(addr: Ipv4Addr) -> String {
    addr.octets()
        .iter()
        .map(|o| format!("{o:08b}"))
        .collect::<Vec<String>>()
        .join(".")
}

/// Address `offset` positions after `addr`, wrapping at 32 bits.
pub fn offset_address(addr: Ipv4Addr, offset: u64) -> Ipv4Addr {
    let bits = (u32::from(addr) as u64).wrapping_add(offset);
    Ipv4Addr::from(bits as u32)
}
