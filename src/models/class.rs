//! Classful address class and private/public kind.

use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;

/// Legacy classful category, decided by the first octet.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressClass {
    A,
    B,
    C,
    D,
    E,
    /// 0.x, 127.x and 255.x
    Unclassified,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKind {
    Private,
    Loopback,
    Public,
}

pub fn classify(addr: Ipv4Addr) -> AddressClass {
    match addr.octets()[0] {
        1..=126 => AddressClass::A,
        128..=191 => AddressClass::B,
        192..=223 => AddressClass::C,
        224..=239 => AddressClass::D,
        240..=254 => AddressClass::E,
        _ => AddressClass::Unclassified,
    }
}

/// Private (RFC 1918), loopback or public.
pub fn address_kind(addr: Ipv4Addr) -> AddressKind {
    match addr.octets() {
        [10, ..] => AddressKind::Private,
        [172, 16..=31, ..] => AddressKind::Private,
        [192, 168, ..] => AddressKind::Private,
        [127, ..] => AddressKind::Loopback,
        _ => AddressKind::Public,
    }
}

/// Classful default prefix used when the caller gave none.
///
/// Class A -> /8, B -> /16, C -> /24; other classes have no default.
pub fn suggested_prefix(addr: Ipv4Addr) -> Option<u8> {
    match classify(addr) {
        AddressClass::A => Some(8),
        AddressClass::B => Some(16),
        AddressClass::C => Some(24),
        _ => None,
    }
}

impl fmt::Display for AddressClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AddressClass::A => "A",
            AddressClass::B => "B",
            AddressClass::C => "C",
            AddressClass::D => "D",
            AddressClass::E => "E",
            AddressClass::Unclassified => "N/A",
        };
        f.write_str(label)
    }
}

impl fmt::Display for AddressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AddressKind::Private => "private",
            AddressKind::Loopback => "loopback",
            AddressKind::Public => "public",
        };
        f.write_str(label)
    }
}
