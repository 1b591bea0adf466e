//! Single-address subnet information.

use super::sizing::usable_hosts;
use crate::error::SubnetError;
use crate::models::{
    address_kind, broadcast_address, classify, host_part, mask_for_prefix, network_address,
    offset_address, wildcard_for_prefix, AddressClass, AddressKind, MAX_LENGTH,
};
use serde::Serialize;
use std::net::Ipv4Addr;

/// Everything the info calculator reports for one address and prefix.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressSummary {
    pub address: Ipv4Addr,
    pub prefix: u8,
    pub mask: Ipv4Addr,
    pub wildcard: Ipv4Addr,
    pub network: Ipv4Addr,
    /// Host bits of `address`.
    pub host: Ipv4Addr,
    /// `None` for a /31.
    pub first_host: Option<Ipv4Addr>,
    pub last_host: Option<Ipv4Addr>,
    pub broadcast: Ipv4Addr,
    pub usable_hosts: u64,
    pub class: AddressClass,
    pub kind: AddressKind,
}

/// Describe `address` within its /`prefix` network.
pub fn describe_address(address: Ipv4Addr, prefix: u8) -> Result<AddressSummary, SubnetError> {
    log::debug!("describe_address({address}/{prefix})");
    let network = network_address(address, prefix)?;
    let broadcast = broadcast_address(network, prefix)?;

    let (first_host, last_host) = match prefix {
        MAX_LENGTH => (Some(address), Some(address)),
        31 => (None, None),
        _ => (
            Some(offset_address(network, 1)),
            Some(Ipv4Addr::from(u32::from(broadcast) - 1)),
        ),
    };

    Ok(AddressSummary {
        address,
        prefix,
        mask: Ipv4Addr::from(mask_for_prefix(prefix)?),
        wildcard: Ipv4Addr::from(wildcard_for_prefix(prefix)?),
        network,
        host: host_part(address, prefix)?,
        first_host,
        last_host,
        broadcast,
        usable_hosts: usable_hosts(prefix)?,
        class: classify(address),
        kind: address_kind(address),
    })
}
