//! Subnet calculation logic.
//!
//! This module contains the calculators built on the address models:
//! - [`sizing`] - Prefix sizing for host counts
//! - [`vlsm`] - Variable-length allocation of host requests
//! - [`flsm`] - Fixed-length division into equal subnets
//! - [`info`] - Single-address summary

mod flsm;
mod info;
mod sizing;
mod vlsm;

// Re-export public functions
pub use flsm::{
    additional_bits, count_for_hosts, divide, hosts_per_subnet_for_count, subnet_count_for_hosts,
    FlsmPlan, MAX_SUBNET_COUNT,
};
pub use info::{describe_address, AddressSummary};
pub use sizing::{minimal_prefix_for_hosts, usable_hosts};
pub use vlsm::{allocate, VlsmPlan};
