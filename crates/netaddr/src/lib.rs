//! Local IPv4 selection for service self-registration.
//!
//! Walks the host's interfaces and picks one IPv4 address to advertise:
//! the first public address found, else the first private (RFC 1918)
//! address, else `127.0.0.1`. Resolution never fails.

pub mod enumerate;
pub mod ranges;
pub mod resolver;
pub mod types;

// Re-export primary types.
pub use enumerate::{AddressEnumerator, InterfaceEnumerator, SystemEnumerator};
pub use ranges::{PRIVATE_BLOCKS, is_link_local, is_private};
pub use resolver::{Resolver, resolve_local_ipv4};
pub use types::{CandidateAddress, InterfaceAddress, LOOPBACK_FALLBACK, NetworkInterface};

/// Errors raised while enumerating interfaces or their addresses.
///
/// Only the enumerators return these; [`Resolver`] absorbs them and falls
/// back toward loopback.
#[derive(Debug, thiserror::Error)]
pub enum NetaddrError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown interface: {0}")]
    UnknownInterface(String),
}
