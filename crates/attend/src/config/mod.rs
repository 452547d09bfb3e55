mod clock_config;
#[allow(clippy::module_inception)]
mod config;
mod server_config;
mod store_config;

pub(crate) use {
    clock_config::ClockConfig, config::Config, server_config::ServerConfig,
    store_config::StoreConfig,
};

pub(crate) const DEFAULT_PORT: u16 = 5000;
pub(crate) const DEFAULT_STORE_PATH: &str = "attendance.csv";

/// Environment variable overriding the configured listening port.
pub(crate) const PORT_ENV: &str = "ATTEND_PORT";

pub(crate) fn default_port() -> u16 {
    DEFAULT_PORT
}

pub(crate) fn default_store_path() -> std::path::PathBuf {
    std::path::PathBuf::from(DEFAULT_STORE_PATH)
}

pub(crate) fn default_utc_offset_minutes() -> i32 {
    attend_core::DEFAULT_UTC_OFFSET_MINUTES
}
