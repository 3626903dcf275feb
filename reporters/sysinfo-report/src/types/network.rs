//! Network address types

use serde::Serialize;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr};

/// Shown when no interface carries a usable IPv4 address
pub const IP_NOT_FOUND: &str = "IP-адрес не найден";

/// Shown when the interfaces could not be enumerated at all
pub const IP_LOOKUP_FAILED: &str = "Не удалось получить IP-адрес";

/// A network interface and the addresses assigned to it
#[derive(Debug, Clone, Serialize)]
pub struct NetworkInterface {
    /// Interface name (e.g., "eth0", "wlan0", "en0")
    pub name: String,
    /// Addresses in the order the platform reported them
    pub ip_addresses: Vec<IpAddr>,
}

/// Outcome of the local address lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "address", rename_all = "snake_case")]
pub enum NetworkAddress {
    /// First non-loopback IPv4 address found
    Found(Ipv4Addr),
    /// Enumeration worked but nothing qualified
    NotFound,
    /// Interface enumeration failed
    LookupFailed,
}

impl fmt::Display for NetworkAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkAddress::Found(addr) => write!(f, "{}", addr),
            NetworkAddress::NotFound => f.write_str(IP_NOT_FOUND),
            NetworkAddress::LookupFailed => f.write_str(IP_LOOKUP_FAILED),
        }
    }
}
