//! Resolve user supplied network text into an address and prefix.

use crate::error::SubnetError;
use crate::models::{
    check_prefix, parse_address, parse_prefix, suggested_prefix, NetworkBlock, MAX_LENGTH,
};
use regex::Regex;
use std::net::Ipv4Addr;
use std::sync::OnceLock;

/// Splits `addr` or `addr/prefix`, tolerating spaces around the slash.
static CIDR_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_cidr_regex() -> &'static Regex {
    CIDR_REGEX.get_or_init(|| {
        Regex::new(r"^\s*(?P<addr>[^/\s]+)\s*(?:/\s*(?P<prefix>[^/\s]*)\s*)?$")
            .expect("Invalid Regex")
    })
}

/// Where the resolved prefix came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixSource {
    /// Written after the address, `a.b.c.d/p`.
    Inline,
    /// Passed separately by the caller.
    Explicit,
    /// Classful default for the first octet.
    Classful,
}

/// Address and prefix picked from `raw` and `explicit_prefix`.
///
/// An inline `/p` wins over `explicit_prefix`; the classful default is only
/// used when neither is present. The prefix is range checked against 0-32
/// here, tighter limits belong to the calculation that consumes it.
pub fn resolve_network(
    raw: &str,
    explicit_prefix: Option<u8>,
) -> Result<(Ipv4Addr, u8, PrefixSource), SubnetError> {
    let caps = get_cidr_regex()
        .captures(raw)
        .ok_or_else(|| SubnetError::InvalidAddress(raw.trim().to_string()))?;
    let addr = parse_address(&caps["addr"])?;

    let inline = caps
        .name("prefix")
        .map(|m| m.as_str())
        .filter(|p| !p.is_empty());

    let (prefix, source) = match (inline, explicit_prefix) {
        (Some(p), _) => (parse_prefix(p)?, PrefixSource::Inline),
        (None, Some(p)) => (p, PrefixSource::Explicit),
        (None, None) => {
            let p = suggested_prefix(addr)
                .ok_or_else(|| SubnetError::MissingPrefix(addr.to_string()))?;
            (p, PrefixSource::Classful)
        }
    };
    // explicit values come from typed input and still need the range check
    let prefix = check_prefix(prefix, 0, MAX_LENGTH)?;

    log::debug!("resolved {raw:?} -> {addr}/{prefix} ({source:?})");
    Ok((addr, prefix, source))
}

/// Resolve `raw` straight into a normalized [`NetworkBlock`].
pub fn resolve_block(raw: &str, explicit_prefix: Option<u8>) -> Result<NetworkBlock, SubnetError> {
    let (addr, prefix, _) = resolve_network(raw, explicit_prefix)?;
    NetworkBlock::new(addr, prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_prefix_wins() {
        let (addr, prefix, source) = resolve_network("192.168.0.5/26", Some(24)).unwrap();
        assert_eq!(addr, Ipv4Addr::new(192, 168, 0, 5));
        assert_eq!(prefix, 26);
        assert_eq!(source, PrefixSource::Inline);

        let (_, prefix, _) = resolve_network(" 192.168.0.5 / 27 ", None).unwrap();
        assert_eq!(prefix, 27);
    }

    #[test]
    fn test_explicit_prefix_over_classful() {
        let (_, prefix, source) = resolve_network("10.1.2.3", Some(20)).unwrap();
        assert_eq!(prefix, 20);
        assert_eq!(source, PrefixSource::Explicit);

        // trailing slash without digits falls back to the explicit value
        let (_, prefix, source) = resolve_network("10.1.2.3/", Some(12)).unwrap();
        assert_eq!(prefix, 12);
        assert_eq!(source, PrefixSource::Explicit);
    }

    #[test]
    fn test_classful_default() {
        let cases = [("10.1.2.3", 8), ("172.20.0.1", 16), ("192.168.1.1", 24)];
        for (raw, expected) in cases {
            let (_, prefix, source) = resolve_network(raw, None).unwrap();
            assert_eq!(prefix, expected, "{raw}");
            assert_eq!(source, PrefixSource::Classful);
        }
        assert_eq!(
            resolve_network("127.0.0.1", None),
            Err(SubnetError::MissingPrefix("127.0.0.1".to_string()))
        );
        assert!(resolve_network("224.0.0.1", None).is_err());
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            resolve_network("10.0.0.0/33", None),
            Err(SubnetError::InvalidPrefix { .. })
        ));
        assert!(matches!(
            resolve_network("10.0.0.0", Some(40)),
            Err(SubnetError::InvalidPrefix { .. })
        ));
        assert!(matches!(
            resolve_network("10.0.0.0/8/8", None),
            Err(SubnetError::InvalidAddress(_))
        ));
        assert!(matches!(
            resolve_network("300.0.0.0/8", None),
            Err(SubnetError::InvalidAddress(_))
        ));
        assert!(matches!(
            resolve_network("", None),
            Err(SubnetError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_resolve_block() {
        let block = resolve_block("192.168.1.77", None).unwrap();
        assert_eq!(block.to_string(), "192.168.1.0/24");
    }
}
