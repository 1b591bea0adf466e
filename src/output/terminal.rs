//! Terminal output: plain text tables and a coloured status banner.

use crate::models::to_binary;
use crate::processing::{AddressSummary, FlsmPlan, VlsmPlan};
use colored::Colorize;
use itertools::Itertools;
use std::net::Ipv4Addr;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let quoted = format!("\"{}\"", value.to_string());
    format!("{quoted:>width$}")
}

/// One line status banner, green on success and red on failure.
pub fn banner(text: &str, ok: bool) -> String {
    if ok {
        format!("{} {}", "OK".on_green(), text.green())
    } else {
        format!("{} {}", "ERROR".on_red(), text.red())
    }
}

/// Render rows under a header with left-aligned, padded columns.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }

    let line = |cells: Vec<&str>| {
        cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{c:<w$}"))
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut out = Vec::with_capacity(rows.len() + 2);
    out.push(line(headers.to_vec()));
    out.push(widths.iter().map(|w| "-".repeat(*w)).join("-+-"));
    for row in rows {
        out.push(line(row.iter().map(String::as_str).collect()));
    }
    out.join("\n") + "\n"
}

fn optional(addr: Option<Ipv4Addr>) -> (String, String) {
    match addr {
        Some(a) => (a.to_string(), to_binary(a)),
        None => ("not applicable".to_string(), "-".to_string()),
    }
}

/// Decimal and binary table for the single-address calculator.
pub fn render_summary(s: &AddressSummary) -> String {
    let row = |item: &str, addr: Ipv4Addr| vec![item.to_string(), addr.to_string(), to_binary(addr)];
    let (first, first_bin) = optional(s.first_host);
    let (last, last_bin) = optional(s.last_host);

    let rows = vec![
        row("IPv4 address", s.address),
        row("Subnet mask", s.mask),
        row("Wildcard mask", s.wildcard),
        row("Network address", s.network),
        row("Host address", s.host),
        vec!["First host".to_string(), first, first_bin],
        vec!["Last host".to_string(), last, last_bin],
        row("Broadcast address", s.broadcast),
        vec![
            "Usable hosts".to_string(),
            s.usable_hosts.to_string(),
            String::new(),
        ],
        vec![
            "Address type".to_string(),
            format!("{}, class {}", s.kind, s.class),
            String::new(),
        ],
    ];

    format!(
        "{}/{}\n{}",
        s.address,
        s.prefix,
        render_table(&["Item", "Decimal", "Binary"], &rows)
    )
}

pub fn render_flsm(plan: &FlsmPlan) -> String {
    let mask = plan.subnets.first().map(|s| s.mask().to_string()).unwrap_or_default();
    let rows: Vec<Vec<String>> = plan
        .subnets
        .iter()
        .enumerate()
        .map(|(i, s)| {
            vec![
                format!("Subnet {}", i + 1),
                s.to_string(),
                s.mask().to_string(),
                s.first_host().to_string(),
                s.last_host().to_string(),
                s.broadcast().to_string(),
            ]
        })
        .collect();

    format!(
        "Created {} subnet(s) of {} with prefix /{}\nHosts per subnet: {}\nSubnet mask: {}\n\n{}",
        plan.subnet_count,
        plan.base,
        plan.new_prefix,
        plan.usable_hosts_per_subnet,
        mask,
        render_table(
            &["Subnet", "Network", "Mask", "First host", "Last host", "Broadcast"],
            &rows
        )
    )
}

pub fn render_vlsm(plan: &VlsmPlan) -> String {
    let base = plan.base;
    let base_rows = vec![vec![
        base.to_string(),
        base.mask().to_string(),
        base.broadcast().to_string(),
    ]];
    let rows: Vec<Vec<String>> = plan
        .allocations
        .iter()
        .map(|a| {
            vec![
                format!("Subnet {}", a.id),
                a.requested_hosts.to_string(),
                a.usable_hosts.to_string(),
                a.network.to_string(),
                a.mask.to_string(),
                a.first_host.to_string(),
                a.last_host.to_string(),
                a.broadcast.to_string(),
            ]
        })
        .collect();

    format!(
        "Using {:.2}% of the available hosts\nRequested hosts: {}\nAssigned hosts: {}\nAvailable hosts: {}\n\n{}\n{}",
        plan.utilization_percent,
        plan.total_requested,
        plan.total_assigned,
        plan.total_available,
        render_table(&["Network", "Mask", "Broadcast"], &base_rows),
        render_table(
            &[
                "Subnet",
                "Requested",
                "Hosts",
                "Network",
                "Mask",
                "First host",
                "Last host",
                "Broadcast"
            ],
            &rows
        )
    )
}
