//! Precipitation endpoint handler.
//!
//! Returns `{date: precipitation}` for the last year of data. The year is
//! anchored to the latest date in the dataset, never to the wall clock.
//! Missing readings stay `null`; when several stations report on the same
//! date the row stored last wins.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::handle_error;
use crate::error::Result;
use crate::logging::generate_request_id;
use crate::state::AppState;

const ENDPOINT: &str = "/api/v1.0/precipitation";

/// Date-keyed precipitation, serialized with sorted keys
pub type PrecipitationMap = BTreeMap<String, Option<f64>>;

/// Handle GET /api/v1.0/precipitation requests
pub async fn precipitation_handler(State(state): State<Arc<AppState>>) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(endpoint = ENDPOINT, request_id = %request_id, "Processing precipitation request");

    match last_year_of_precipitation(&state).await {
        Ok(precipitation) => {
            info!(
                endpoint = ENDPOINT,
                request_id = %request_id,
                duration_us = start_time.elapsed().as_micros() as u64,
                date_count = precipitation.len(),
                "Precipitation request successful"
            );
            Json(precipitation).into_response()
        }
        Err(error) => handle_error(error, ENDPOINT, &request_id, None),
    }
}

async fn last_year_of_precipitation(state: &AppState) -> Result<PrecipitationMap> {
    let Some(cutoff) = state.dataset.cutoff_date().await? else {
        return Ok(PrecipitationMap::new());
    };

    debug!(cutoff = %cutoff, "Computed precipitation window");

    let rows = state.dataset.precipitation_since(cutoff).await?;
    Ok(rows.into_iter().collect())
}
