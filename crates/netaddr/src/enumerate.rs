//! Interface and address enumeration seams.
//!
//! The resolver only talks to these traits, so tests can hand it
//! deterministic fakes instead of the host's real interfaces.

use pnet::datalink;

use crate::NetaddrError;
use crate::types::{InterfaceAddress, NetworkInterface};

/// Lists the host's network interfaces in OS order.
pub trait InterfaceEnumerator {
    fn interfaces(&self) -> Result<Vec<NetworkInterface>, NetaddrError>;
}

/// Lists the addresses bound to one interface, in OS order.
pub trait AddressEnumerator {
    fn addresses(&self, iface: &NetworkInterface)
    -> Result<Vec<InterfaceAddress>, NetaddrError>;
}

impl<T: InterfaceEnumerator + ?Sized> InterfaceEnumerator for &T {
    fn interfaces(&self) -> Result<Vec<NetworkInterface>, NetaddrError> {
        (**self).interfaces()
    }
}

impl<T: AddressEnumerator + ?Sized> AddressEnumerator for &T {
    fn addresses(
        &self,
        iface: &NetworkInterface,
    ) -> Result<Vec<InterfaceAddress>, NetaddrError> {
        (**self).addresses(iface)
    }
}

/// Enumerates the real host through `pnet::datalink`.
///
/// Holds no state; every call queries the OS again, so an interface that
/// disappears between the two calls reports
/// [`NetaddrError::UnknownInterface`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnumerator;

impl SystemEnumerator {
    pub fn new() -> Self {
        Self
    }
}

impl InterfaceEnumerator for SystemEnumerator {
    fn interfaces(&self) -> Result<Vec<NetworkInterface>, NetaddrError> {
        let ifaces = interfaces_from(&datalink::interfaces());
        tracing::debug!(count = ifaces.len(), "enumerated network interfaces");
        Ok(ifaces)
    }
}

impl AddressEnumerator for SystemEnumerator {
    fn addresses(
        &self,
        iface: &NetworkInterface,
    ) -> Result<Vec<InterfaceAddress>, NetaddrError> {
        addresses_from(&datalink::interfaces(), &iface.name)
            .ok_or_else(|| NetaddrError::UnknownInterface(iface.name.clone()))
    }
}

/// Maps datalink entries to interfaces, one per name in first-seen order.
///
/// A repeated name keeps the flags of its first entry.
fn interfaces_from(links: &[datalink::NetworkInterface]) -> Vec<NetworkInterface> {
    let mut ifaces: Vec<NetworkInterface> = Vec::new();
    for link in links {
        if ifaces.iter().any(|i| i.name == link.name) {
            continue;
        }
        ifaces.push(NetworkInterface {
            name: link.name.clone(),
            up: link.is_up(),
            loopback: link.is_loopback(),
        });
    }
    ifaces
}

/// Collects the addresses of every entry named `name`, or `None` if no
/// entry has that name.
fn addresses_from(
    links: &[datalink::NetworkInterface],
    name: &str,
) -> Option<Vec<InterfaceAddress>> {
    let mut matching = links.iter().filter(|link| link.name == name).peekable();
    matching.peek()?;
    Some(
        matching
            .flat_map(|link| link.ips.iter())
            .map(|net| InterfaceAddress(net.ip()))
            .collect(),
    )
}
