use std::net::IpAddr;

/// Label recorded when the request carries no usable source address.
pub(crate) const UNKNOWN_ADDRESS: &str = "Unknown";

/// Label recorded for the IPv6 loopback address.
pub(crate) const LOOPBACK_LABEL: &str = "localhost";

/// Normalize a request's source address for recording.
///
/// IPv4-mapped IPv6 addresses lose their `::ffff:` prefix, the IPv6
/// loopback becomes `localhost`, and an absent address becomes `Unknown`.
/// Everything else passes through in standard textual form.
pub fn normalize_address(addr: Option<IpAddr>) -> String {
    match addr {
        None => UNKNOWN_ADDRESS.to_string(),
        Some(IpAddr::V6(v6)) if v6.is_loopback() => LOOPBACK_LABEL.to_string(),
        Some(IpAddr::V6(v6)) => match v6.to_ipv4_mapped() {
            Some(v4) => v4.to_string(),
            None => v6.to_string(),
        },
        Some(IpAddr::V4(v4)) => v4.to_string(),
    }
}
