//! Step by step walk-through of how a plan was calculated.

use crate::models::{offset_address, MAX_LENGTH};
use crate::processing::{FlsmPlan, VlsmPlan};

/// Steps behind an FLSM division, one line each.
pub fn explain_flsm(plan: &FlsmPlan) -> Vec<String> {
    let mask = plan
        .subnets
        .first()
        .map(|s| s.mask().to_string())
        .unwrap_or_default();
    vec![
        format!(
            "1. The base network {} has prefix /{}",
            plan.base,
            plan.base.prefix()
        ),
        format!("2. {} subnet(s) were requested", plan.subnet_count),
        format!(
            "3. Borrow {} bit(s) from the host part: the smallest n with 2^n >= {}",
            plan.additional_bits, plan.subnet_count
        ),
        format!(
            "4. 2^{} = {} subnets fit, {} are used",
            plan.additional_bits,
            1u64 << plan.additional_bits,
            plan.subnet_count
        ),
        format!(
            "5. New prefix /{} + {} = /{} (mask {})",
            plan.base.prefix(),
            plan.additional_bits,
            plan.new_prefix,
            mask
        ),
        format!(
            "6. Each subnet spans 2^({} - {}) = {} addresses",
            MAX_LENGTH, plan.new_prefix, plan.block_size
        ),
        format!(
            "7. Minus network and broadcast leaves {} usable hosts per subnet",
            plan.usable_hosts_per_subnet
        ),
    ]
}

/// Order in which the VLSM blocks were carved out of the base network.
pub fn explain_vlsm(plan: &VlsmPlan) -> Vec<String> {
    let mut steps = vec![format!(
        "Requests are sized to the smallest prefix holding hosts + 2 addresses, then placed largest first from {}",
        plan.base.network()
    )];
    steps.extend(
        plan.allocation_order()
            .iter()
            .enumerate()
            .map(|(i, a)| {
                format!(
                    "{}. Subnet {} needs {} host(s): /{} ({} usable) at {}, next free address {}",
                    i + 1,
                    a.id,
                    a.requested_hosts,
                    a.prefix,
                    a.usable_hosts,
                    a.network,
                    offset_address(a.broadcast, 1)
                )
            }),
    );
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::requests_from_counts;

    #[test]
    fn test_explain_flsm() {
        let plan = FlsmPlan::build("192.168.1.0/24".parse().unwrap(), 5).unwrap();
        let steps = explain_flsm(&plan);
        assert_eq!(steps.len(), 7);
        assert_eq!(steps[2], "3. Borrow 3 bit(s) from the host part: the smallest n with 2^n >= 5");
        assert_eq!(steps[3], "4. 2^3 = 8 subnets fit, 5 are used");
        assert_eq!(steps[4], "5. New prefix /24 + 3 = /27 (mask 255.255.255.224)");
        assert_eq!(steps[5], "6. Each subnet spans 2^(32 - 27) = 32 addresses");
        assert!(steps[6].contains("30 usable hosts"));
    }

    #[test]
    fn test_explain_vlsm_follows_address_order() {
        let plan =
            VlsmPlan::build("192.168.1.0/24".parse().unwrap(), &requests_from_counts(&[2, 50, 10]))
                .unwrap();
        let steps = explain_vlsm(&plan);
        assert_eq!(steps.len(), 4);
        assert_eq!(
            steps[1],
            "1. Subnet 2 needs 50 host(s): /26 (62 usable) at 192.168.1.0/26, next free address 192.168.1.64"
        );
        assert!(steps[3].starts_with("3. Subnet 1 needs 2 host(s): /30"));
    }
}
