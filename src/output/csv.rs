//! CSV output formatting for calculated subnets.

use super::terminal::format_field;
use crate::processing::{AddressSummary, FlsmPlan, VlsmPlan};

/// CSV for a VLSM plan, one row per allocation in request order.
///
/// # Arguments
/// * `plan` - The allocated plan
/// * `generated_at` - Timestamp written into the leading comment line
pub fn vlsm_csv(plan: &VlsmPlan, generated_at: &str) -> String {
    log::info!("#Start vlsm_csv() rows={}", plan.allocations.len());
    let mut out = vec![
        format!("# Generated at: {generated_at}"),
        format!(
            "# Base network: {} requested={} assigned={} available={} utilization={:.2}%",
            plan.base,
            plan.total_requested,
            plan.total_assigned,
            plan.total_available,
            plan.utilization_percent
        ),
        r#""id","requested","hosts","subnet_cidr","mask","first_host","last_host","broadcast""#
            .to_string(),
    ];

    for a in &plan.allocations {
        out.push(format!(
            "{id},{requested},{hosts},{cidr},{mask},{first},{last},{broadcast}",
            id = format_field(a.id, 4),
            requested = format_field(a.requested_hosts, 11),
            hosts = format_field(a.usable_hosts, 7),
            cidr = format_field(a.network, 18),
            mask = format_field(a.mask, 17),
            first = format_field(a.first_host, 17),
            last = format_field(a.last_host, 17),
            broadcast = format_field(a.broadcast, 17),
        ));
    }
    out.join("\n") + "\n"
}

/// CSV for an FLSM plan, one row per subnet in address order.
pub fn flsm_csv(plan: &FlsmPlan, generated_at: &str) -> String {
    log::info!("#Start flsm_csv() rows={}", plan.subnets.len());
    let mut out = vec![
        format!("# Generated at: {generated_at}"),
        format!(
            "# Base network: {} subnets={} prefix=/{} hosts_per_subnet={}",
            plan.base, plan.subnet_count, plan.new_prefix, plan.usable_hosts_per_subnet
        ),
        r#""id","subnet_cidr","mask","first_host","last_host","broadcast""#.to_string(),
    ];

    for (i, s) in plan.subnets.iter().enumerate() {
        out.push(format!(
            "{id},{cidr},{mask},{first},{last},{broadcast}",
            id = format_field(i + 1, 4),
            cidr = format_field(s, 18),
            mask = format_field(s.mask(), 17),
            first = format_field(s.first_host(), 17),
            last = format_field(s.last_host(), 17),
            broadcast = format_field(s.broadcast(), 17),
        ));
    }
    out.join("\n") + "\n"
}

/// Two column `item,value` CSV for a single address.
pub fn summary_csv(s: &AddressSummary, generated_at: &str) -> String {
    let opt = |a: Option<std::net::Ipv4Addr>| a.map(|a| a.to_string()).unwrap_or_default();
    let rows = [
        ("address", s.address.to_string()),
        ("prefix", s.prefix.to_string()),
        ("mask", s.mask.to_string()),
        ("wildcard", s.wildcard.to_string()),
        ("network", s.network.to_string()),
        ("host", s.host.to_string()),
        ("first_host", opt(s.first_host)),
        ("last_host", opt(s.last_host)),
        ("broadcast", s.broadcast.to_string()),
        ("usable_hosts", s.usable_hosts.to_string()),
        ("class", s.class.to_string()),
        ("kind", s.kind.to_string()),
    ];

    let mut out = vec![
        format!("# Generated at: {generated_at}"),
        r#""item","value""#.to_string(),
    ];
    out.extend(
        rows.iter()
            .map(|(item, value)| format!("{},{}", format_field(item, 14), format_field(value, 17))),
    );
    out.join("\n") + "\n"
}
