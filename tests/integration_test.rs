//! Integration tests for ipv4-subnet-calc
//!
//! These tests go through the public API the way the binary does: resolve the
//! input text, run a calculator and inspect the returned records.

use ipv4_subnet_calc::input::read_plan_file;
use ipv4_subnet_calc::models::{
    address_kind, mask_for_prefix, network_address, parse_address, requests_from_counts,
    wildcard_for_prefix, AddressKind,
};
use ipv4_subnet_calc::processing::minimal_prefix_for_hosts;
use ipv4_subnet_calc::{
    allocate, describe_address, divide, resolve_block, resolve_network, Overflow, SubnetError,
    VlsmPlan,
};
use std::net::Ipv4Addr;

#[test]
fn test_address_round_trip() {
    for text in ["0.0.0.0", "10.20.30.40", "192.168.1.255", "255.255.255.255"] {
        let addr = parse_address(text).expect("valid address");
        assert_eq!(addr.to_string(), text);
    }
    assert_eq!(
        parse_address("010.001.000.009").unwrap(),
        Ipv4Addr::new(10, 1, 0, 9)
    );
}

#[test]
fn test_mask_and_wildcard_complement() {
    for prefix in 0..=32u8 {
        let mask = mask_for_prefix(prefix).unwrap();
        let wildcard = wildcard_for_prefix(prefix).unwrap();
        assert_eq!(mask & wildcard, 0, "/{prefix}");
        assert_eq!(mask | wildcard, u32::MAX, "/{prefix}");
        assert_eq!(mask.count_ones(), prefix as u32);
    }
}

#[test]
fn test_network_address_idempotent() {
    let addr = Ipv4Addr::new(172, 16, 45, 200);
    for prefix in 0..=32u8 {
        let once = network_address(addr, prefix).unwrap();
        assert_eq!(network_address(once, prefix).unwrap(), once);
    }
}

#[test]
fn test_flsm_four_way_split() {
    let base = resolve_block("192.168.1.0/24", None).unwrap();
    let subnets = divide(base, 4).expect("Failed to divide");
    let starts: Vec<String> = subnets.iter().map(|s| s.to_string()).collect();
    assert_eq!(
        starts,
        vec![
            "192.168.1.0/26",
            "192.168.1.64/26",
            "192.168.1.128/26",
            "192.168.1.192/26"
        ]
    );
    assert!(subnets.iter().all(|s| s.usable_hosts() == 62));
}

#[test]
fn test_vlsm_example() {
    let base = resolve_block("192.168.1.0", Some(24)).unwrap();
    let allocations = allocate(base, &requests_from_counts(&[50, 10, 2])).unwrap();

    let summary: Vec<(usize, String, u64)> = allocations
        .iter()
        .map(|a| (a.id, a.network.to_string(), a.usable_hosts))
        .collect();
    assert_eq!(
        summary,
        vec![
            (1, "192.168.1.0/26".to_string(), 62),
            (2, "192.168.1.64/28".to_string(), 14),
            (3, "192.168.1.80/30".to_string(), 2),
        ]
    );
    assert_eq!(allocations.iter().map(|a| a.usable_hosts).sum::<u64>(), 78);
}

#[test]
fn test_vlsm_plan_from_file() {
    let plan = read_plan_file("src/tests/test_data/vlsm_plan_01.json")
        .expect("Error reading plan file");
    let vlsm = VlsmPlan::build(plan.base().unwrap(), &plan.requests()).unwrap();
    assert_eq!(vlsm.total_requested, 62);
    assert_eq!(vlsm.total_assigned, 78);
    assert_eq!(vlsm.total_available, 254);
    assert!((vlsm.utilization_percent - 78.0 / 254.0 * 100.0).abs() < 1e-9);
}

#[test]
fn test_vlsm_overflow_from_file() {
    let plan = read_plan_file("src/tests/test_data/vlsm_plan_03_overflow.json")
        .expect("Error reading plan file");
    let base = plan.base().unwrap();
    assert_eq!(base.to_string(), "192.168.1.0/28");

    let err = VlsmPlan::build(base, &plan.requests()).unwrap_err();
    assert_eq!(
        err,
        SubnetError::CapacityExceeded(Overflow::Hosts {
            requested_hosts: 50,
            assigned_hosts: 62,
            base,
        })
    );
}

#[test]
fn test_equal_requests_keep_input_order() {
    let base = resolve_block("10.0.0.0/24", None).unwrap();
    let allocations = allocate(base, &requests_from_counts(&[20, 20, 20])).unwrap();
    let networks: Vec<Ipv4Addr> = allocations.iter().map(|a| a.network.network()).collect();
    assert_eq!(
        networks,
        vec![
            Ipv4Addr::new(10, 0, 0, 0),
            Ipv4Addr::new(10, 0, 0, 32),
            Ipv4Addr::new(10, 0, 0, 64)
        ]
    );
}

#[test]
fn test_single_host_gets_a_30() {
    assert_eq!(minimal_prefix_for_hosts(1), Ok(30));
}

#[test]
fn test_address_kinds() {
    for text in ["10.0.0.1", "172.16.0.1", "192.168.0.1"] {
        assert_eq!(address_kind(parse_address(text).unwrap()), AddressKind::Private);
    }
    assert_eq!(
        address_kind(Ipv4Addr::new(127, 0, 0, 1)),
        AddressKind::Loopback
    );
    assert_eq!(address_kind(Ipv4Addr::new(8, 8, 8, 8)), AddressKind::Public);
}

#[test]
fn test_info_edge_prefixes() {
    let (addr, prefix, _) = resolve_network("10.0.0.6/31", None).unwrap();
    let s = describe_address(addr, prefix).unwrap();
    assert_eq!(s.first_host, None);
    assert_eq!(s.last_host, None);

    let (addr, prefix, _) = resolve_network("10.0.0.6", Some(32)).unwrap();
    let s = describe_address(addr, prefix).unwrap();
    assert_eq!(s.first_host, Some(addr));
    assert_eq!(s.last_host, Some(addr));
}
