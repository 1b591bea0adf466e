//! Error types for the subnet calculators.

use crate::models::NetworkBlock;
use std::fmt;
use thiserror::Error;

/// Why an allocation did not fit inside its base network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overflow {
    /// VLSM: the packed blocks ran past the base broadcast address.
    Hosts {
        requested_hosts: u64,
        assigned_hosts: u64,
        base: NetworkBlock,
    },
    /// FLSM: splitting into `subnet_count` pieces leaves no room for hosts.
    Subnets {
        subnet_count: u32,
        new_prefix: u8,
        base: NetworkBlock,
    },
}

impl fmt::Display for Overflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Overflow::Hosts {
                requested_hosts,
                assigned_hosts,
                base,
            } => write!(
                f,
                "not enough space in {base} ({} - {}): {requested_hosts} hosts requested, {assigned_hosts} host addresses needed",
                base.network(),
                base.broadcast()
            ),
            Overflow::Subnets {
                subnet_count,
                new_prefix,
                base,
            } => write!(
                f,
                "{base} cannot be divided into {subnet_count} subnets (would need /{new_prefix}, max /30)"
            ),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubnetError {
    // Malformed dotted quad or octet out of range
    #[error("Invalid IPv4 address: {0}")]
    InvalidAddress(String),

    #[error("Invalid prefix /{prefix} (expected {min}-{max})")]
    InvalidPrefix { prefix: String, min: u8, max: u8 },

    // No inline /prefix, no explicit prefix and no classful default
    #[error("No prefix given for {0} and no classful default applies")]
    MissingPrefix(String),

    #[error("Invalid host count {hosts} for subnet {id}")]
    InvalidHostCount { id: usize, hosts: u64 },

    #[error("Invalid subnet count: {0}")]
    InvalidSubnetCount(u32),

    #[error("Capacity exceeded: {0}")]
    CapacityExceeded(Overflow),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overflow_message_names_base_range() {
        let base = NetworkBlock::new("192.168.1.0".parse().unwrap(), 28).unwrap();
        let err = SubnetError::CapacityExceeded(Overflow::Hosts {
            requested_hosts: 50,
            assigned_hosts: 62,
            base,
        });
        assert_eq!(
            err.to_string(),
            "Capacity exceeded: not enough space in 192.168.1.0/28 (192.168.1.0 - 192.168.1.15): 50 hosts requested, 62 host addresses needed"
        );
    }

    #[test]
    fn test_invalid_prefix_message() {
        let err = SubnetError::InvalidPrefix {
            prefix: "31".to_string(),
            min: 1,
            max: 30,
        };
        assert_eq!(err.to_string(), "Invalid prefix /31 (expected 1-30)");
    }
}
