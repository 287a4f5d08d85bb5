//! Temperature summary endpoint handlers.
//!
//! Both the open-ended and the bounded variant answer with a one-element
//! array holding a `TemperatureStats` object. Dates must be `YYYY-MM-DD`
//! and the end date may not precede the start date.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::NaiveDate;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::handle_error;
use crate::dataset::TemperatureStats;
use crate::dates::{format_date, parse_date};
use crate::error::{ClimateError, Result};
use crate::logging::generate_request_id;
use crate::state::AppState;

const ENDPOINT: &str = "/api/v1.0/temp";

/// Handle GET /api/v1.0/temp/:start requests
pub async fn temp_start_handler(
    State(state): State<Arc<AppState>>,
    Path(start): Path<String>,
) -> Response {
    respond(state, start, None).await
}

/// Handle GET /api/v1.0/temp/:start/:end requests
pub async fn temp_range_handler(
    State(state): State<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> Response {
    respond(state, start, Some(end)).await
}

async fn respond(state: Arc<AppState>, start: String, end: Option<String>) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();
    let params = match &end {
        Some(end) => format!("start={}, end={}", start, end),
        None => format!("start={}", start),
    };

    debug!(
        endpoint = ENDPOINT,
        request_id = %request_id,
        params = %params,
        "Processing temperature request"
    );

    match temperature_summary(&state, &start, end.as_deref()).await {
        Ok(stats) => {
            info!(
                endpoint = ENDPOINT,
                request_id = %request_id,
                duration_us = start_time.elapsed().as_micros() as u64,
                matched = stats.average.is_some(),
                "Temperature request successful"
            );
            Json(vec![stats]).into_response()
        }
        Err(error) => handle_error(error, ENDPOINT, &request_id, Some(&params)),
    }
}

/// Validate the raw path segments into a date range
fn parse_range(start: &str, end: Option<&str>) -> Result<(NaiveDate, Option<NaiveDate>)> {
    let start = parse_date("start", start)?;
    let end = end.map(|raw| parse_date("end", raw)).transpose()?;

    if let Some(end) = end {
        if end < start {
            return Err(ClimateError::InvalidParameter {
                param: "end".to_string(),
                message: format!(
                    "end date {} precedes start date {}",
                    format_date(end),
                    format_date(start)
                ),
            });
        }
    }

    Ok((start, end))
}

async fn temperature_summary(
    state: &AppState,
    start: &str,
    end: Option<&str>,
) -> Result<TemperatureStats> {
    let (start, end) = parse_range(start, end)?;
    state.dataset.temperature_stats(start, end).await
}
