//! Domain models for the subnet calculators.
//!
//! This module contains the core data structures and address arithmetic:
//! - [`NetworkBlock`] - IPv4 network with CIDR notation support
//! - [`HostRequest`] and [`SubnetAllocation`] - VLSM input and output records
//! - [`AddressClass`] and [`AddressKind`] - address classification

mod allocation;
mod block;
mod class;
mod ipv4;

// Re-export public types
pub use allocation::{requests_from_counts, HostRequest, SubnetAllocation};
pub use block::{parse_prefix, NetworkBlock};
pub use class::{address_kind, classify, suggested_prefix, AddressClass, AddressKind};
pub use ipv4::{
    broadcast_address, check_prefix, format_address, host_part, mask_for_prefix,
    network_address, offset_address, parse_address, to_binary, wildcard_for_prefix,
    MAX_HOST_PREFIX, MAX_LENGTH,
};
