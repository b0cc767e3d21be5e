//! RFC 1918 private ranges and the link-local check.

use std::net::Ipv4Addr;

/// Inclusive `(start, end)` bounds of the private IPv4 blocks, in order.
pub static PRIVATE_BLOCKS: [([u8; 4], [u8; 4]); 3] = [
    ([10, 0, 0, 0], [10, 255, 255, 255]),
    ([172, 16, 0, 0], [172, 31, 255, 255]),
    ([192, 168, 0, 0], [192, 168, 255, 255]),
];

/// Returns true if `ip` falls inside any private block, bounds included.
///
/// Compares the octets lexicographically against each block.
pub fn is_private(ip: Ipv4Addr) -> bool {
    let octets = ip.octets();
    PRIVATE_BLOCKS
        .iter()
        .any(|(start, end)| octets >= *start && octets <= *end)
}

/// Returns true for 169.254.0.0/16.
pub fn is_link_local(ip: Ipv4Addr) -> bool {
    let octets = ip.octets();
    octets[0] == 169 && octets[1] == 254
}
