use crate::normalize_address;

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// WHAT: IPv4-mapped IPv6 addresses lose the ::ffff: prefix
/// WHY: Records should show the bare dotted-quad a proxy-free client has
#[test]
#[allow(clippy::unwrap_used)]
fn given_ipv4_mapped_address_when_normalized_then_prefix_stripped() {
    // Given: An IPv4-mapped IPv6 source address
    let addr: IpAddr = "::ffff:203.0.113.5".parse().unwrap();

    // When: Normalizing it
    let recorded = normalize_address(Some(addr));

    // Then: The bare IPv4 form is recorded
    assert_eq!(recorded, "203.0.113.5");
}

/// WHAT: The IPv6 loopback is recorded as "localhost"
/// WHY: "::1" in the store is noise; the fixed label is what admins expect
#[test]
fn given_ipv6_loopback_when_normalized_then_localhost_label() {
    let addr = IpAddr::V6(Ipv6Addr::LOCALHOST);

    assert_eq!(normalize_address(Some(addr)), "localhost");
}

/// WHAT: A missing source address is recorded as "Unknown"
/// WHY: Appends must not fail just because peer info is unavailable
#[test]
fn given_no_address_when_normalized_then_unknown_label() {
    assert_eq!(normalize_address(None), "Unknown");
}

/// WHAT: Plain IPv4 addresses pass through unchanged
/// WHY: Only mapped and loopback forms need rewriting
#[test]
fn given_plain_ipv4_when_normalized_then_unchanged() {
    let addr = IpAddr::V4(Ipv4Addr::new(192, 168, 1, 23));

    assert_eq!(normalize_address(Some(addr)), "192.168.1.23");
}

/// WHAT: Non-mapped, non-loopback IPv6 addresses pass through unchanged
/// WHY: Real IPv6 clients should be recorded in standard textual form
#[test]
#[allow(clippy::unwrap_used)]
fn given_plain_ipv6_when_normalized_then_unchanged() {
    let addr: IpAddr = "2001:db8::7".parse().unwrap();

    assert_eq!(normalize_address(Some(addr)), "2001:db8::7");
}

/// WHAT: A mapped IPv4 loopback strips to 127.0.0.1, not "localhost"
/// WHY: Only the IPv6 loopback literal gets the fixed label
#[test]
#[allow(clippy::unwrap_used)]
fn given_mapped_ipv4_loopback_when_normalized_then_dotted_quad() {
    let addr: IpAddr = "::ffff:127.0.0.1".parse().unwrap();

    assert_eq!(normalize_address(Some(addr)), "127.0.0.1");
}
