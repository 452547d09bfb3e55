use crate::{
    AppResult,
    config::Config,
    routes::{self, AppState},
};

use std::{net::SocketAddr, sync::Arc};

use attend_core::{Clock, RecordStore};
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tracing::{info, instrument};

/// The HTTP-facing recording service.
///
/// Owns the loaded configuration plus the shared store and clock. The
/// router is built separately from [`run`](Self::run) so tests can drive
/// handlers without binding a listener.
pub struct App {
    config: Config,
    state: AppState,
}

impl App {
    /// Build the service from loaded configuration.
    ///
    /// Fails if the configured clock offset is out of range, so a bad
    /// config rejects startup rather than every request.
    pub(crate) fn new(config: Config) -> AppResult<Self> {
        let clock = Clock::new(config.clock.utc_offset_minutes)?;
        let store = Arc::new(RecordStore::new(config.store.path.clone()));

        Ok(Self {
            config,
            state: AppState { store, clock },
        })
    }

    /// Build the service router over the given state.
    ///
    /// CORS is fully permissive: the browser form is served from any origin.
    pub(crate) fn router(state: AppState) -> Router {
        Router::new()
            .route(
                "/attendance",
                post(routes::mark_attendance).get(routes::list_attendance),
            )
            .route("/download-attendance", get(routes::download_attendance))
            .route("/health", get(routes::health))
            .layer(CorsLayer::permissive())
            .with_state(state)
    }

    /// Bind the listener and serve until the process exits.
    #[instrument(skip(self))]
    pub(crate) async fn run(self) -> AppResult<()> {
        let port = self.config.server.resolved_port();
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = tokio::net::TcpListener::bind(addr).await?;

        info!(%addr, store = ?self.config.store.path, "Server running");

        let router = Self::router(self.state);
        // Connect info gives handlers the peer address for record derivation.
        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await?;

        Ok(())
    }
}
