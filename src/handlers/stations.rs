//! Stations endpoint handler.
//!
//! Returns a JSON object mapping station ids to station names.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::error_response;
use crate::logging::generate_request_id;
use crate::state::AppState;

const ENDPOINT: &str = "/api/v1.0/stations";

/// Handle GET /api/v1.0/stations requests
pub async fn stations_handler(State(state): State<Arc<AppState>>) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = ENDPOINT,
        request_id = %request_id,
        "Processing stations request"
    );

    match state.store.all_stations().await {
        Ok(stations) => {
            info!(
                endpoint = ENDPOINT,
                request_id = %request_id,
                duration_us = start_time.elapsed().as_micros() as u64,
                station_count = stations.len(),
                "Stations request successful"
            );
            Json(stations).into_response()
        }
        Err(error) => error_response(error, ENDPOINT, &request_id, None),
    }
}
