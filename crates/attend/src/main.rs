//! Attend: single-endpoint attendance recording service.

mod app;
mod config;
mod error;
mod routes;
#[cfg(test)]
mod tests;

pub(crate) use {
    app::App,
    error::{AppError, Result as AppResult},
};

use crate::config::Config;

use tracing::error;

/// Application entry point.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("attend=debug,tower_http=info")
        .init();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {:?}", e);
            std::process::exit(1);
        }
    };

    let app = match App::new(config) {
        Ok(a) => a,
        Err(e) => {
            error!("Failed to initialize service: {:?}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = app.run().await {
        error!(error = ?e, "Server error");
        std::process::exit(1);
    }
}
