//! Host requests and the subnets assigned to them.

use super::NetworkBlock;
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// One requested subnet, identified by its 1-based input position.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostRequest {
    pub id: usize,
    pub hosts: u32,
}

impl HostRequest {
    pub fn new(id: usize, hosts: u32) -> HostRequest {
        HostRequest { id, hosts }
    }
}

/// Turn plain host counts into requests numbered 1..=n in input order.
pub fn requests_from_counts(counts: &[u32]) -> Vec<HostRequest> {
    counts
        .iter()
        .enumerate()
        .map(|(i, &hosts)| HostRequest::new(i + 1, hosts))
        .collect()
}

/// A block assigned to a [`HostRequest`].
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubnetAllocation {
    /// Id of the originating request.
    pub id: usize,
    pub requested_hosts: u32,
    pub prefix: u8,
    pub network: NetworkBlock,
    pub mask: Ipv4Addr,
    pub first_host: Ipv4Addr,
    pub last_host: Ipv4Addr,
    pub broadcast: Ipv4Addr,
    pub usable_hosts: u64,
}

impl SubnetAllocation {
    pub fn new(request: HostRequest, network: NetworkBlock) -> SubnetAllocation {
        SubnetAllocation {
            id: request.id,
            requested_hosts: request.hosts,
            prefix: network.prefix(),
            network,
            mask: network.mask(),
            first_host: network.first_host(),
            last_host: network.last_host(),
            broadcast: network.broadcast(),
            usable_hosts: network.usable_hosts(),
        }
    }
}
