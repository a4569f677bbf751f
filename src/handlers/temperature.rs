//! Temperature statistics endpoint handlers.
//!
//! `/api/v1.0/start/:start` aggregates every reading on or after a date;
//! `/api/v1.0/end/:start/:end` aggregates an inclusive date range.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::error_response;
use crate::error::Result;
use crate::logging::generate_request_id;
use crate::models::TemperatureStats;
use crate::state::AppState;
use crate::store::parse_date;

const START_ENDPOINT: &str = "/api/v1.0/start";
const RANGE_ENDPOINT: &str = "/api/v1.0/end";

/// Handle GET /api/v1.0/start/:start requests
pub async fn temperature_start_handler(
    State(state): State<Arc<AppState>>,
    Path(start): Path<String>,
) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = START_ENDPOINT,
        request_id = %request_id,
        start = %start,
        "Processing temperature stats request"
    );

    match stats_from(&state, &start).await {
        Ok(stats) => respond(stats, START_ENDPOINT, &request_id, start_time),
        Err(error) => error_response(
            error,
            START_ENDPOINT,
            &request_id,
            Some(&format!("start={}", start)),
        ),
    }
}

/// Handle GET /api/v1.0/end/:start/:end requests
pub async fn temperature_range_handler(
    State(state): State<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = RANGE_ENDPOINT,
        request_id = %request_id,
        start = %start,
        end = %end,
        "Processing temperature stats request"
    );

    match stats_between(&state, &start, &end).await {
        Ok(stats) => respond(stats, RANGE_ENDPOINT, &request_id, start_time),
        Err(error) => error_response(
            error,
            RANGE_ENDPOINT,
            &request_id,
            Some(&format!("start={}, end={}", start, end)),
        ),
    }
}

async fn stats_from(state: &AppState, start: &str) -> Result<TemperatureStats> {
    let start = parse_date("start", start)?;
    state.store.temperature_stats_from(start).await
}

async fn stats_between(state: &AppState, start: &str, end: &str) -> Result<TemperatureStats> {
    let start = parse_date("start", start)?;
    let end = parse_date("end", end)?;
    state.store.temperature_stats_between(start, end).await
}

fn respond(
    stats: TemperatureStats,
    endpoint: &str,
    request_id: &str,
    start_time: Instant,
) -> Response {
    info!(
        endpoint = endpoint,
        request_id = %request_id,
        duration_us = start_time.elapsed().as_micros() as u64,
        matched = stats.avg_temp.is_some(),
        "Temperature stats request successful"
    );
    Json(stats).into_response()
}
