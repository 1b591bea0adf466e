//! Network block (network address + prefix) with CIDR text support.

use super::ipv4::{
    broadcast_address, check_prefix, mask_for_prefix, network_address, offset_address,
    parse_address, wildcard_for_prefix, MAX_HOST_PREFIX, MAX_LENGTH,
};
use crate::error::SubnetError;
use crate::processing::usable_hosts;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// A normalized IPv4 network: the address always has its host bits cleared.
#[derive(Eq, Ord, PartialOrd, PartialEq, Debug, Copy, Clone, Hash)]
pub struct NetworkBlock {
    network: Ipv4Addr,
    prefix: u8,
}

impl NetworkBlock {
    /// Build the block containing `addr` at `prefix`.
    ///
    /// # Examples
    /// ```
    /// use ipv4_subnet_calc::models::NetworkBlock;
    /// let block = NetworkBlock::new("10.1.2.3".parse().unwrap(), 16).unwrap();
    /// assert_eq!(block.to_string(), "10.1.0.0/16");
    /// ```
    pub fn new(addr: Ipv4Addr, prefix: u8) -> Result<NetworkBlock, SubnetError> {
        let network = network_address(addr, prefix)?;
        Ok(NetworkBlock { network, prefix })
    }

    pub fn network(&self) -> Ipv4Addr {
        self.network
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Subnet mask as an address, e.g. 255.255.255.0.
    pub fn mask(&self) -> Ipv4Addr {
        // prefix was validated on construction
        Ipv4Addr::from(mask_for_prefix(self.prefix).unwrap_or(0))
    }

    pub fn wildcard(&self) -> Ipv4Addr {
        Ipv4Addr::from(wildcard_for_prefix(self.prefix).unwrap_or(u32::MAX))
    }

    /// Number of addresses in the block, 2^(32 - prefix).
    pub fn block_size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.prefix)
    }

    pub fn broadcast(&self) -> Ipv4Addr {
        broadcast_address(self.network, self.prefix).unwrap_or(self.network)
    }

    /// First address after the network address.
    pub fn first_host(&self) -> Ipv4Addr {
        offset_address(self.network, 1)
    }

    /// Last address before the broadcast address.
    pub fn last_host(&self) -> Ipv4Addr {
        offset_address(self.network, self.block_size().saturating_sub(2))
    }

    pub fn usable_hosts(&self) -> u64 {
        usable_hosts(self.prefix).unwrap_or(0)
    }

    /// Ensure the block leaves room for a network, a broadcast and hosts.
    pub fn require_host_prefix(&self) -> Result<(), SubnetError> {
        check_prefix(self.prefix, 1, MAX_HOST_PREFIX).map(|_| ())
    }
}

impl FromStr for NetworkBlock {
    type Err = SubnetError;

    /// Parse `a.b.c.d/p`. The address is normalized to its network.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (addr, prefix) = s
            .split_once('/')
            .ok_or_else(|| SubnetError::MissingPrefix(s.to_string()))?;
        let addr = parse_address(addr)?;
        let prefix = parse_prefix(prefix)?;
        NetworkBlock::new(addr, prefix)
    }
}

/// Parse prefix text such as `24` or ` 26 `.
pub fn parse_prefix(text: &str) -> Result<u8, SubnetError> {
    let text = text.trim();
    let invalid = || SubnetError::InvalidPrefix {
        prefix: text.to_string(),
        min: 0,
        max: MAX_LENGTH,
    };
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    match text.parse::<u8>() {
        Ok(value) if value <= MAX_LENGTH => Ok(value),
        _ => Err(invalid()),
    }
}

impl std::fmt::Display for NetworkBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.network, self.prefix)
    }
}

impl Serialize for NetworkBlock {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for NetworkBlock {
    fn deserialize<D>(deserializer: D) -> Result<NetworkBlock, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NetworkBlock::from_str(&s).map_err(de::Error::custom)
    }
}
