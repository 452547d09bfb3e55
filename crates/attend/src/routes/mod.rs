//! HTTP façade translating JSON requests into record store operations.

mod api_error;
mod payloads;

pub(crate) use {
    api_error::ApiError,
    payloads::{HealthResponse, MarkAttendanceRequest, MessageResponse},
};

use std::{
    convert::Infallible,
    net::{IpAddr, SocketAddr},
    sync::Arc,
};

use attend_core::{AttendanceRecord, Clock, RecordStore, normalize_address};
use axum::{
    Json,
    body::Body,
    extract::{ConnectInfo, FromRequestParts, State},
    http::{header, request::Parts},
    response::{IntoResponse, Response},
};
use tokio_util::io::ReaderStream;
use tracing::info;
use uuid::Uuid;

/// Shared state handed to every handler.
#[derive(Clone)]
pub(crate) struct AppState {
    /// The append-only record store, shared by all requests.
    pub(crate) store: Arc<RecordStore>,
    /// Timestamp source with the configured fixed offset.
    pub(crate) clock: Clock,
}

/// Peer address of the request, when connect info is available.
///
/// Extraction never fails: a request without connect info (for example one
/// driven directly against the router in tests) yields `None`, which the
/// record derivation turns into the `Unknown` label.
pub(crate) struct PeerAddr(pub(crate) Option<IpAddr>);

impl<S> FromRequestParts<S> for PeerAddr
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(
            parts
                .extensions
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| addr.ip()),
        ))
    }
}

/// POST /attendance: append one record for the submitting user.
///
/// Never idempotent: submitting the same username twice appends two lines.
pub(crate) async fn mark_attendance(
    State(state): State<AppState>,
    PeerAddr(peer): PeerAddr,
    Json(request): Json<MarkAttendanceRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    if request.username.is_empty() {
        return Err(ApiError::bad_request("Username required"));
    }

    let submission_id = Uuid::new_v4();
    let address = normalize_address(peer);
    let timestamp = state.clock.timestamp();
    let record = AttendanceRecord::new(request.username, address, timestamp);

    state.store.append(&record)?;

    info!(
        %submission_id,
        name = %record.name,
        address = %record.address,
        timestamp = %record.timestamp,
        "Attendance marked"
    );

    Ok(Json(MessageResponse {
        message: "Attendance marked successfully!".to_string(),
    }))
}

/// GET /attendance: the full store as plain text, oldest line first.
pub(crate) async fn list_attendance(
    State(state): State<AppState>,
) -> Result<Response, ApiError> {
    let contents = state.store.read_all()?;

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        contents,
    )
        .into_response())
}

/// GET /download-attendance: the store streamed as a CSV attachment.
///
/// The body is streamed from the file handle, not buffered; a mid-stream IO
/// fault terminates the transfer without retracting bytes already sent.
pub(crate) async fn download_attendance(
    State(state): State<AppState>,
) -> Result<Response, ApiError> {
    let file = tokio::fs::File::from_std(state.store.open_for_streaming()?);
    let body = Body::from_stream(ReaderStream::new(file));

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"attendance.csv\"",
            ),
        ],
        body,
    )
        .into_response())
}

/// GET /health: liveness probe, independent of the record store.
pub(crate) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
