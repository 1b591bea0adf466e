//! JSON output.

use serde::Serialize;

/// Pretty printed JSON followed by a newline.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::requests_from_counts;
    use crate::processing::{describe_address, VlsmPlan};
    use serde_json::Value;
    use std::net::Ipv4Addr;

    #[test]
    fn test_vlsm_json() {
        let plan =
            VlsmPlan::build("192.168.1.0/24".parse().unwrap(), &requests_from_counts(&[50, 10, 2]))
                .unwrap();
        let v: Value = serde_json::from_str(&to_json(&plan).unwrap()).unwrap();
        assert_eq!(v["base"], "192.168.1.0/24");
        assert_eq!(v["total_assigned"], 78);
        assert_eq!(v["allocations"][1]["network"], "192.168.1.64/28");
        assert_eq!(v["allocations"][1]["broadcast"], "192.168.1.79");
    }

    #[test]
    fn test_summary_json_null_hosts() {
        let s = describe_address(Ipv4Addr::new(10, 0, 0, 0), 31).unwrap();
        let v: Value = serde_json::from_str(&to_json(&s).unwrap()).unwrap();
        assert_eq!(v["first_host"], Value::Null);
        assert_eq!(v["class"], "A");
        assert_eq!(v["kind"], "Private");
    }
}
