//! IPv4 subnet calculators: single address info, fixed-length (FLSM)
//! division and variable-length (VLSM) allocation.
//!
//! The calculators live in [`processing`] on top of the address arithmetic in
//! [`models`]; [`output`] renders their results and [`cli`] wires it together
//! for the binary.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{Overflow, SubnetError};
pub use input::{resolve_block, resolve_network, PlanFile};
pub use models::{HostRequest, NetworkBlock, SubnetAllocation};
pub use processing::{allocate, describe_address, divide, FlsmPlan, VlsmPlan};
