//! Local address resolution

use std::io;
use std::net::{IpAddr, Ipv4Addr};

use report_common::TolerateExt;

use crate::types::{NetworkAddress, NetworkInterface};

/// Find the first non-loopback IPv4 address on this host
pub fn get_local_ip() -> NetworkAddress {
    resolve_local_ip(list_interfaces())
}

/// Enumerate interfaces with their addresses, in platform order
///
/// The platform reports one entry per address; entries are grouped back
/// under their interface name while keeping first-seen order.
pub fn list_interfaces() -> io::Result<Vec<NetworkInterface>> {
    let mut interfaces: Vec<NetworkInterface> = Vec::new();

    for iface in if_addrs::get_if_addrs()? {
        let ip = iface.ip();
        match interfaces.iter_mut().find(|known| known.name == iface.name) {
            Some(known) => known.ip_addresses.push(ip),
            None => interfaces.push(NetworkInterface {
                name: iface.name,
                ip_addresses: vec![ip],
            }),
        }
    }

    Ok(interfaces)
}

/// Pick the first usable address from an interface enumeration result
///
/// Interfaces are scanned in order, and each interface's addresses in order.
/// The scan stops at the first IPv4 (or IPv4-mapped IPv6) address that is
/// not loopback.
pub fn resolve_local_ip(interfaces: io::Result<Vec<NetworkInterface>>) -> NetworkAddress {
    interfaces
        .map(|interfaces| first_usable_address(&interfaces))
        .tolerate_with("network interfaces", |_| NetworkAddress::LookupFailed)
}

fn first_usable_address(interfaces: &[NetworkInterface]) -> NetworkAddress {
    for iface in interfaces {
        if let Some(addr) = iface.ip_addresses.iter().copied().find_map(usable_ipv4) {
            tracing::debug!(interface = %iface.name, %addr, "selected local address");
            return NetworkAddress::Found(addr);
        }
    }

    NetworkAddress::NotFound
}

fn usable_ipv4(addr: IpAddr) -> Option<Ipv4Addr> {
    let v4 = match addr {
        IpAddr::V4(v4) => v4,
        IpAddr::V6(v6) => v6.to_ipv4_mapped()?,
    };
    (!v4.is_loopback()).then_some(v4)
}
