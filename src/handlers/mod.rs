//! HTTP request handlers for the climate API.
//!
//! Every data route answers with JSON. Errors carry an `{"error": ...}` body
//! and a 400 or 500 status, see [`crate::error::ClimateError::status_code`].

pub mod heartbeat;
pub mod home;
pub mod metadata;
pub mod precipitation;
pub mod stations;
pub mod temperature;
pub mod tobs;

pub use heartbeat::heartbeat_handler;
pub use home::home_handler;
pub use metadata::metadata_handler;
pub use precipitation::precipitation_handler;
pub use stations::stations_handler;
pub use temperature::{temp_range_handler, temp_start_handler};
pub use tobs::tobs_handler;

use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::error::ClimateError;
use crate::logging::{create_http_trace_layer, log_request_error};
use crate::state::AppState;

/// Build the application router over a shared state
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/api/v1.0/stations", get(stations_handler))
        .route("/api/v1.0/precipitation", get(precipitation_handler))
        .route("/api/v1.0/tobs", get(tobs_handler))
        .route("/api/v1.0/temp/:start", get(temp_start_handler))
        .route("/api/v1.0/temp/:start/:end", get(temp_range_handler))
        .route("/api/v1.0/metadata", get(metadata_handler))
        .route("/heartbeat", get(heartbeat_handler))
        .fallback(not_found_handler)
        .layer(create_http_trace_layer())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Handle requests for unknown paths
pub async fn not_found_handler(uri: Uri) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "error": format!("No route for {}", uri.path())
        })),
    )
        .into_response()
}

/// Log a failed request and turn the error into its response
pub(crate) fn handle_error(
    error: ClimateError,
    endpoint: &str,
    request_id: &str,
    params: Option<&str>,
) -> Response {
    log_request_error(&error, endpoint, request_id, params);
    error.into_response()
}
