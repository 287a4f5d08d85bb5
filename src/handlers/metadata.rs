//! Metadata endpoint handler.
//!
//! Describes the served dataset: schema version, row counts, date extent,
//! the one-year window and the full station records.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::handle_error;
use crate::dataset::{DatasetSummary, Station};
use crate::dates::format_date;
use crate::error::Result;
use crate::logging::generate_request_id;
use crate::state::AppState;

const ENDPOINT: &str = "/api/v1.0/metadata";

/// Metadata response structure
#[derive(Debug, Serialize)]
pub struct MetadataResponse {
    #[serde(flatten)]
    pub summary: DatasetSummary,
    /// First date of the last-year window, `None` for an empty dataset
    pub cutoff_date: Option<String>,
    pub most_active_station: Option<String>,
    pub stations: Vec<Station>,
}

/// Handle GET /api/v1.0/metadata requests
pub async fn metadata_handler(State(state): State<Arc<AppState>>) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(endpoint = ENDPOINT, request_id = %request_id, "Processing metadata request");

    match collect_metadata(&state).await {
        Ok(metadata) => {
            info!(
                endpoint = ENDPOINT,
                request_id = %request_id,
                duration_us = start_time.elapsed().as_micros() as u64,
                station_count = metadata.summary.station_count,
                measurement_count = metadata.summary.measurement_count,
                "Metadata request successful"
            );
            Json(metadata).into_response()
        }
        Err(error) => handle_error(error, ENDPOINT, &request_id, None),
    }
}

async fn collect_metadata(state: &AppState) -> Result<MetadataResponse> {
    let summary = state.dataset.summary().await?;
    let cutoff_date = state.dataset.cutoff_date().await?.map(format_date);
    let most_active_station = state.dataset.most_active_station().await?;
    let stations = state.dataset.list_station_records().await?;

    Ok(MetadataResponse {
        summary,
        cutoff_date,
        most_active_station,
        stations,
    })
}
