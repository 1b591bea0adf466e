//! Variable-length subnet allocation.
//!
//! Requests are sized to their minimal prefix, sorted largest first and packed
//! back to back from the start of the base network. Largest-first keeps every
//! block aligned without padding, but it is a heuristic: some request sets
//! that could fit in another order are still reported as overflowing.

use super::sizing::{minimal_prefix_for_hosts, usable_hosts};
use crate::error::{Overflow, SubnetError};
use crate::models::{HostRequest, NetworkBlock, SubnetAllocation, MAX_LENGTH};
use serde::Serialize;
use std::cmp::Reverse;
use std::net::Ipv4Addr;

/// Allocate one block per request inside `base`.
///
/// Returns the allocations ordered by request id. Fails with
/// [`SubnetError::CapacityExceeded`] when the packed blocks run past the base
/// broadcast address.
pub fn allocate(
    base: NetworkBlock,
    requests: &[HostRequest],
) -> Result<Vec<SubnetAllocation>, SubnetError> {
    log::info!(
        "#Start allocate() base={} requests={}",
        base,
        requests.len()
    );
    base.require_host_prefix()?;
    if requests.is_empty() {
        return Err(SubnetError::InvalidSubnetCount(0));
    }

    // Size everything before touching the address space
    let mut sized = requests
        .iter()
        .map(|r| {
            minimal_prefix_for_hosts(r.hosts)
                .map(|prefix| (*r, prefix))
                .map_err(|_| SubnetError::InvalidHostCount {
                    id: r.id,
                    hosts: r.hosts as u64,
                })
        })
        .collect::<Result<Vec<(HostRequest, u8)>, SubnetError>>()?;

    // sort_by_key is stable, equal sizes keep input order
    sized.sort_by_key(|(r, _)| Reverse(r.hosts));

    let base_end = u32::from(base.broadcast()) as u64;
    let mut cursor = u32::from(base.network()) as u64;
    let mut overflow = false;
    let mut assigned_hosts: u64 = 0;
    let mut allocations = Vec::with_capacity(sized.len());

    for (request, prefix) in sized {
        let block_size = 1u64 << (MAX_LENGTH - prefix);
        assigned_hosts += usable_hosts(prefix)?;

        if cursor + block_size - 1 > base_end {
            if !overflow {
                log::warn!(
                    "subnet {} ({} hosts, /{}) does not fit in {}",
                    request.id,
                    request.hosts,
                    prefix,
                    base
                );
            }
            overflow = true;
        }

        // past the broadcast the cursor can run beyond 2^32, only the totals continue
        if !overflow {
            let block = NetworkBlock::new(Ipv4Addr::from(cursor as u32), prefix)?;
            log::debug!("subnet {} -> {}", request.id, block);
            allocations.push(SubnetAllocation::new(request, block));
        }
        cursor += block_size;
    }

    if overflow {
        let requested_hosts = requests.iter().map(|r| r.hosts as u64).sum();
        return Err(SubnetError::CapacityExceeded(Overflow::Hosts {
            requested_hosts,
            assigned_hosts,
            base,
        }));
    }

    allocations.sort_by_key(|a| a.id);
    Ok(allocations)
}

/// Allocation result with the totals shown next to the subnet table.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct VlsmPlan {
    pub base: NetworkBlock,
    /// Ordered by request id.
    pub allocations: Vec<SubnetAllocation>,
    pub total_requested: u64,
    /// Sum of usable hosts over all allocated blocks.
    pub total_assigned: u64,
    /// Usable hosts in the base network.
    pub total_available: u64,
    pub utilization_percent: f64,
}

impl VlsmPlan {
    pub fn build(base: NetworkBlock, requests: &[HostRequest]) -> Result<VlsmPlan, SubnetError> {
        let allocations = allocate(base, requests)?;

        let total_requested = requests.iter().map(|r| r.hosts as u64).sum();
        let total_assigned = allocations.iter().map(|a| a.usable_hosts).sum();
        let total_available = base.block_size().saturating_sub(2);
        let utilization_percent = if total_available > 0 {
            total_assigned as f64 / total_available as f64 * 100.0
        } else {
            0.0
        };

        Ok(VlsmPlan {
            base,
            allocations,
            total_requested,
            total_assigned,
            total_available,
            utilization_percent,
        })
    }

    /// Allocations in the order they were carved out (ascending address).
    pub fn allocation_order(&self) -> Vec<&SubnetAllocation> {
        let mut ordered: Vec<&SubnetAllocation> = self.allocations.iter().collect();
        ordered.sort_by_key(|a| a.network);
        ordered
    }
}
