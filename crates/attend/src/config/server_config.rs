use crate::config::{PORT_ENV, default_port};

use serde::{Deserialize, Serialize};
use tracing::warn;

/// HTTP listener configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port for the HTTP listener.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    /// The listening port, honoring the `ATTEND_PORT` environment override.
    pub fn resolved_port(&self) -> u16 {
        Self::apply_override(std::env::var(PORT_ENV).ok().as_deref(), self.port)
    }

    /// Apply an environment override on top of the configured port.
    ///
    /// Unparseable overrides fall back to the configured port with a warning
    /// rather than failing startup.
    pub(crate) fn apply_override(raw: Option<&str>, configured: u16) -> u16 {
        match raw {
            None => configured,
            Some(value) => match value.parse::<u16>() {
                Ok(port) => port,
                Err(_) => {
                    warn!(%value, "Ignoring unparseable {PORT_ENV} override");
                    configured
                }
            },
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}
