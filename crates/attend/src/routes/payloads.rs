use serde::{Deserialize, Serialize};

/// Request body for POST /attendance.
#[derive(Debug, Deserialize)]
pub(crate) struct MarkAttendanceRequest {
    /// Submitter's free-text name. An absent key deserializes to empty so
    /// missing and empty both surface the same validation failure.
    #[serde(default)]
    pub(crate) username: String,
}

/// Human-readable message body, used for both successes and failures.
#[derive(Debug, Serialize)]
pub(crate) struct MessageResponse {
    /// Short human-readable message.
    pub(crate) message: String,
}

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub(crate) struct HealthResponse {
    /// Fixed liveness indicator.
    pub(crate) status: String,
}
