//! The address selection policy.

use std::net::Ipv4Addr;

use crate::enumerate::{AddressEnumerator, InterfaceEnumerator, SystemEnumerator};
use crate::ranges::is_link_local;
use crate::types::{CandidateAddress, LOOPBACK_FALLBACK};

/// Picks the IPv4 address this host should advertise.
///
/// Selection order:
/// 1. The first public address seen, across all interfaces.
/// 2. Otherwise the first private (RFC 1918) address seen.
/// 3. Otherwise `127.0.0.1`.
///
/// Loopback, down and container bridge (`docker`/`veth`) interfaces are
/// ignored, as are loopback and link-local addresses. Enumeration errors
/// never surface: a failed interface listing yields the fallback and a
/// failed address listing skips that interface.
pub struct Resolver<I, A> {
    interfaces: I,
    addresses: A,
}

impl<I, A> Resolver<I, A>
where
    I: InterfaceEnumerator,
    A: AddressEnumerator,
{
    pub fn new(interfaces: I, addresses: A) -> Self {
        Self {
            interfaces,
            addresses,
        }
    }

    /// Resolves the address as a dotted-quad string.
    pub fn resolve(&self) -> String {
        self.resolve_addr().to_string()
    }

    /// Resolves the address.
    pub fn resolve_addr(&self) -> Ipv4Addr {
        let ifaces = match self.interfaces.interfaces() {
            Ok(ifaces) => ifaces,
            Err(e) => {
                tracing::warn!(error = %e, "interface enumeration failed, using loopback");
                return LOOPBACK_FALLBACK;
            }
        };

        let mut private: Vec<CandidateAddress> = Vec::new();

        for iface in &ifaces {
            if !iface.is_usable() {
                tracing::debug!(
                    iface = %iface.name,
                    up = iface.up,
                    loopback = iface.loopback,
                    "skipping interface"
                );
                continue;
            }

            let addrs = match self.addresses.addresses(iface) {
                Ok(addrs) => addrs,
                Err(e) => {
                    tracing::warn!(iface = %iface.name, error = %e, "address enumeration failed");
                    continue;
                }
            };

            for addr in addrs {
                let Some(ip) = addr.to_ipv4() else {
                    continue;
                };
                if ip.is_loopback() || is_link_local(ip) {
                    continue;
                }

                let candidate = CandidateAddress::classify(ip);
                if !candidate.private {
                    tracing::debug!(iface = %iface.name, %ip, "selected public address");
                    return ip;
                }
                private.push(candidate);
            }
        }

        match private.first() {
            Some(first) => {
                tracing::debug!(
                    %first,
                    candidates = private.len(),
                    "selected private address"
                );
                first.addr
            }
            None => {
                tracing::debug!("no usable address, using loopback");
                LOOPBACK_FALLBACK
            }
        }
    }
}

impl Default for Resolver<SystemEnumerator, SystemEnumerator> {
    fn default() -> Self {
        Self::new(SystemEnumerator, SystemEnumerator)
    }
}

/// Returns the host IPv4 address to advertise, never failing.
pub fn resolve_local_ipv4() -> String {
    Resolver::default().resolve()
}
