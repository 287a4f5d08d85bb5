//! Temperature observations for the most active station.
//!
//! Uses the same one-year window as the precipitation endpoint. Missing
//! readings are passed through as `null`, matching precipitation.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::handle_error;
use crate::error::Result;
use crate::logging::generate_request_id;
use crate::state::AppState;

const ENDPOINT: &str = "/api/v1.0/tobs";

/// Handle GET /api/v1.0/tobs requests
pub async fn tobs_handler(State(state): State<Arc<AppState>>) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(endpoint = ENDPOINT, request_id = %request_id, "Processing tobs request");

    match most_active_observations(&state).await {
        Ok(observations) => {
            info!(
                endpoint = ENDPOINT,
                request_id = %request_id,
                duration_us = start_time.elapsed().as_micros() as u64,
                observation_count = observations.len(),
                "Tobs request successful"
            );
            Json(observations).into_response()
        }
        Err(error) => handle_error(error, ENDPOINT, &request_id, None),
    }
}

async fn most_active_observations(state: &AppState) -> Result<Vec<Option<f64>>> {
    let Some(station) = state.dataset.most_active_station().await? else {
        return Ok(Vec::new());
    };
    let Some(cutoff) = state.dataset.cutoff_date().await? else {
        return Ok(Vec::new());
    };

    debug!(station = %station, cutoff = %cutoff, "Selected most active station");

    state
        .dataset
        .observations_for_station_since(&station, cutoff)
        .await
}
