//! Heartbeat endpoint handler.
//!
//! Returns server status information: instance id, uptime and whether the
//! dataset still answers queries.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tracing::warn;
use uuid::Uuid;

use crate::dataset::DatasetSummary;
use crate::state::AppState;

/// Unique per process
static SERVER_ID: once_cell::sync::Lazy<String> =
    once_cell::sync::Lazy::new(|| Uuid::new_v4().to_string());

/// Server start time
static START_TIME: once_cell::sync::Lazy<SystemTime> = once_cell::sync::Lazy::new(SystemTime::now);

/// Heartbeat response structure
#[derive(Debug, Serialize)]
pub struct HeartbeatResponse {
    /// Server ID (unique per instance)
    pub server_id: String,
    /// Current timestamp (ISO 8601 format)
    pub timestamp: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    pub version: &'static str,
    /// Dataset information, absent when the dataset cannot be queried
    pub dataset: Option<DatasetSummary>,
    /// "healthy" or "unhealthy"
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Record the start time; called once at startup so uptime counts from there
pub fn mark_started() {
    once_cell::sync::Lazy::force(&START_TIME);
}

/// Handle GET /heartbeat requests
pub async fn heartbeat_handler(State(state): State<Arc<AppState>>) -> Response {
    let now = SystemTime::now();
    let timestamp = chrono::DateTime::<chrono::Utc>::from(now)
        .to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
    let uptime = now
        .duration_since(*START_TIME)
        .unwrap_or(Duration::from_secs(0));

    let (status_code, dataset, status, error) = match state.dataset.summary().await {
        Ok(summary) => (StatusCode::OK, Some(summary), "healthy", None),
        Err(e) => {
            warn!(error = %e, "Heartbeat dataset check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                None,
                "unhealthy",
                Some(e.to_string()),
            )
        }
    };

    let response = HeartbeatResponse {
        server_id: SERVER_ID.clone(),
        timestamp,
        uptime_seconds: uptime.as_secs(),
        version: env!("CARGO_PKG_VERSION"),
        dataset,
        status: status.to_string(),
        error,
    };

    (status_code, Json(response)).into_response()
}
