//! Input handling for the calculators.
//!
//! - [`network`] - Address/prefix resolution with the classful default
//! - [`plan`] - VLSM plan files (JSON)

mod network;
mod plan;

pub use network::{resolve_block, resolve_network, PrefixSource};
pub use plan::{parse_plan, read_plan_file, PlanFile};
