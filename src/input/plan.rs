//! VLSM plan files.
//!
//! A plan is a small JSON document:
//! ```json
//! { "network": "192.168.1.0/24", "hosts": [50, 10, 2] }
//! ```
//! `network` may omit the `/prefix` and give it in a separate `prefix` field,
//! or leave both out to fall back on the classful default.

use super::network::resolve_block;
use crate::error::SubnetError;
use crate::models::{requests_from_counts, HostRequest, NetworkBlock};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::path::Path;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PlanFile {
    /// Base network, `a.b.c.d` or `a.b.c.d/p`.
    pub network: String,
    #[serde(default)]
    pub prefix: Option<u8>,
    /// Requested hosts per subnet, in subnet order.
    pub hosts: Vec<u32>,
}

impl PlanFile {
    pub fn base(&self) -> Result<NetworkBlock, SubnetError> {
        resolve_block(&self.network, self.prefix)
    }

    pub fn requests(&self) -> Vec<HostRequest> {
        requests_from_counts(&self.hosts)
    }
}

/// Parse a plan from JSON text, reporting the path of a bad field.
pub fn parse_plan(json: &str) -> Result<PlanFile, Box<dyn Error>> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    let plan: PlanFile = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| format!("Error parsing plan: path={} error={}", e.path(), e.inner()))?;
    Ok(plan)
}

/// Read and parse a plan file.
pub fn read_plan_file(path: &str) -> Result<PlanFile, Box<dyn Error>> {
    if !Path::new(path).exists() {
        return Err(format!("Plan file does not exist: {path}").into());
    }
    log::info!("Reading plan file: {path}");
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("Error reading plan file {path}: {e}"))?;
    parse_plan(&json)
}
