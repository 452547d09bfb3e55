use crate::config::{Config, DEFAULT_PORT, DEFAULT_STORE_PATH, ServerConfig};

use std::path::Path;

use attend_core::DEFAULT_UTC_OFFSET_MINUTES;

/// WHAT: An empty config file parses to full defaults
/// WHY: First-run and hand-trimmed configs must not fail startup
#[test]
#[allow(clippy::unwrap_used)]
fn given_empty_toml_when_parsing_then_defaults_applied() {
    let config: Config = toml::from_str("").unwrap();

    assert_eq!(config.server.port, DEFAULT_PORT);
    assert_eq!(config.store.path, Path::new(DEFAULT_STORE_PATH));
    assert_eq!(config.clock.utc_offset_minutes, DEFAULT_UTC_OFFSET_MINUTES);
}

/// WHAT: A partial config keeps its values and defaults the rest
/// WHY: Users should be able to set just the field they care about
#[test]
#[allow(clippy::unwrap_used)]
fn given_partial_toml_when_parsing_then_missing_sections_defaulted() {
    let config: Config = toml::from_str("[server]\nport = 8080\n").unwrap();

    assert_eq!(config.server.port, 8080);
    assert_eq!(config.store.path, Path::new(DEFAULT_STORE_PATH));
    assert_eq!(config.clock.utc_offset_minutes, DEFAULT_UTC_OFFSET_MINUTES);
}

/// WHAT: A parseable environment override replaces the configured port
/// WHY: The listening port is overridable via the process environment
#[test]
fn given_port_override_when_applying_then_override_wins() {
    assert_eq!(ServerConfig::apply_override(Some("9090"), DEFAULT_PORT), 9090);
}

/// WHAT: An unparseable override falls back to the configured port
/// WHY: A typo in the environment should not take the service down
#[test]
fn given_unparseable_override_when_applying_then_configured_port_kept() {
    assert_eq!(
        ServerConfig::apply_override(Some("not-a-port"), DEFAULT_PORT),
        DEFAULT_PORT
    );
}

/// WHAT: No override leaves the configured port untouched
/// WHY: The environment variable is optional
#[test]
fn given_no_override_when_applying_then_configured_port_used() {
    assert_eq!(ServerConfig::apply_override(None, 7070), 7070);
}
