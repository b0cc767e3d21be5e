//! Interface, address and candidate types used during resolution.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr};

use crate::ranges::is_private;

/// Address returned when no usable interface address exists.
pub const LOOPBACK_FALLBACK: Ipv4Addr = Ipv4Addr::LOCALHOST;

/// A host network interface as reported by the enumerator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkInterface {
    pub name: String,
    pub up: bool,
    pub loopback: bool,
}

impl NetworkInterface {
    /// Creates an interface that is up and not loopback.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            up: true,
            loopback: false,
        }
    }

    /// Returns true if the name looks like a container bridge or veth pair.
    ///
    /// Plain case-sensitive substring test, so `br-docker1` and `myveth`
    /// are excluded too.
    pub fn is_virtual_bridge(&self) -> bool {
        self.name.contains("docker") || self.name.contains("veth")
    }

    /// Returns true if addresses on this interface may be advertised.
    pub fn is_usable(&self) -> bool {
        self.up && !self.loopback && !self.is_virtual_bridge()
    }
}

/// An IP address bound to an interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterfaceAddress(pub IpAddr);

impl InterfaceAddress {
    /// Returns the 4-byte form of the address, if it has one.
    ///
    /// IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`) convert; other IPv6
    /// addresses do not.
    pub fn to_ipv4(&self) -> Option<Ipv4Addr> {
        match self.0 {
            IpAddr::V4(v4) => Some(v4),
            IpAddr::V6(v6) => v6.to_ipv4_mapped(),
        }
    }
}

impl From<IpAddr> for InterfaceAddress {
    fn from(ip: IpAddr) -> Self {
        Self(ip)
    }
}

impl From<Ipv4Addr> for InterfaceAddress {
    fn from(ip: Ipv4Addr) -> Self {
        Self(IpAddr::V4(ip))
    }
}

/// An IPv4 address that survived filtering, with its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateAddress {
    pub addr: Ipv4Addr,
    pub private: bool,
}

impl CandidateAddress {
    pub fn classify(addr: Ipv4Addr) -> Self {
        Self {
            addr,
            private: is_private(addr),
        }
    }
}

impl fmt::Display for CandidateAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.addr)
    }
}
