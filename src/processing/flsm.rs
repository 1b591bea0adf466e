//! Fixed-length subnet division.

use super::sizing::{minimal_prefix_for_hosts, usable_hosts};
use crate::error::{Overflow, SubnetError};
use crate::models::{offset_address, NetworkBlock, MAX_HOST_PREFIX, MAX_LENGTH};
use serde::Serialize;

/// Largest subnet count `divide` will enumerate.
pub const MAX_SUBNET_COUNT: u32 = 1 << 20;

/// Extra prefix bits needed to address `count` subnets, ceil(log2(count)).
pub fn additional_bits(count: u32) -> u8 {
    if count <= 1 {
        0
    } else {
        (32 - (count - 1).leading_zeros()) as u8
    }
}

/// Prefix each of `count` equal subnets of a /`base_prefix` would get.
fn split_prefix(base_prefix: u8, count: u32) -> u32 {
    base_prefix as u32 + additional_bits(count) as u32
}

/// Split `base` into `subnet_count` equal, contiguous blocks.
///
/// The new prefix is the base prefix plus ceil(log2(subnet_count)); it must
/// stay at /30 or shorter so every subnet keeps two usable hosts. A count of
/// one returns the base network unchanged.
pub fn divide(base: NetworkBlock, subnet_count: u32) -> Result<Vec<NetworkBlock>, SubnetError> {
    log::info!("#Start divide() base={} count={}", base, subnet_count);
    base.require_host_prefix()?;
    if subnet_count == 0 || subnet_count > MAX_SUBNET_COUNT {
        log::warn!("subnet count {} outside 1-{}", subnet_count, MAX_SUBNET_COUNT);
        return Err(SubnetError::InvalidSubnetCount(subnet_count));
    }

    let new_prefix = split_prefix(base.prefix(), subnet_count);
    if new_prefix > MAX_HOST_PREFIX as u32 {
        log::warn!("{} cannot hold {} subnets", base, subnet_count);
        return Err(SubnetError::CapacityExceeded(Overflow::Subnets {
            subnet_count,
            new_prefix: new_prefix as u8,
            base,
        }));
    }
    let new_prefix = new_prefix as u8;
    let block_size = 1u64 << (MAX_LENGTH - new_prefix);

    (0..subnet_count as u64)
        .map(|i| NetworkBlock::new(offset_address(base.network(), i * block_size), new_prefix))
        .collect()
}

/// Division result plus the intermediate values behind it.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FlsmPlan {
    pub base: NetworkBlock,
    pub subnet_count: u32,
    pub additional_bits: u8,
    pub new_prefix: u8,
    pub block_size: u64,
    pub usable_hosts_per_subnet: u64,
    pub subnets: Vec<NetworkBlock>,
}

impl FlsmPlan {
    pub fn build(base: NetworkBlock, subnet_count: u32) -> Result<FlsmPlan, SubnetError> {
        let subnets = divide(base, subnet_count)?;
        let additional_bits = additional_bits(subnet_count);
        let new_prefix = base.prefix() + additional_bits;

        Ok(FlsmPlan {
            base,
            subnet_count,
            additional_bits,
            new_prefix,
            block_size: 1u64 << (MAX_LENGTH - new_prefix),
            // divide already rejected counts that leave no hosts
            usable_hosts_per_subnet: hosts_per_subnet_for_count(base.prefix(), subnet_count)
                .unwrap_or_default(),
            subnets,
        })
    }
}

/// Usable hosts per subnet when a /`base_prefix` is split into `count`.
///
/// `None` when the count is zero or the split would go past /30.
pub fn hosts_per_subnet_for_count(base_prefix: u8, count: u32) -> Option<u64> {
    if count == 0 {
        return None;
    }
    let new_prefix = split_prefix(base_prefix, count);
    if new_prefix > MAX_HOST_PREFIX as u32 {
        return None;
    }
    usable_hosts(new_prefix as u8).ok()
}

/// Number of subnets a /`base_prefix` yields when each must hold `hosts`.
///
/// `None` when `hosts` is not a valid request or needs a block larger than
/// the base network.
pub fn subnet_count_for_hosts(base_prefix: u8, hosts: u32) -> Option<u64> {
    let new_prefix = minimal_prefix_for_hosts(hosts).ok()?;
    if new_prefix < base_prefix {
        return None;
    }
    Some(1u64 << (new_prefix - base_prefix))
}

/// Subnet count for `divide` when every subnet must hold `hosts`.
///
/// Fails with [`SubnetError::InvalidHostCount`] for an unusable host count
/// and [`SubnetError::CapacityExceeded`] when one such subnet is already
/// larger than `base`.
pub fn count_for_hosts(base: NetworkBlock, hosts: u32) -> Result<u32, SubnetError> {
    base.require_host_prefix()?;
    let prefix = minimal_prefix_for_hosts(hosts)?;
    let count = subnet_count_for_hosts(base.prefix(), hosts).ok_or_else(|| {
        SubnetError::CapacityExceeded(Overflow::Hosts {
            requested_hosts: hosts as u64,
            assigned_hosts: usable_hosts(prefix).unwrap_or_default(),
            base,
        })
    })?;
    let count = u32::try_from(count).map_err(|_| SubnetError::InvalidSubnetCount(u32::MAX))?;
    log::info!("{} hosts per subnet -> {} subnets of {}", hosts, count, base);
    Ok(count)
}
