//! Temperature observations endpoint handler.
//!
//! Returns every temperature reading of the station with the most readings.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::error_response;
use crate::logging::generate_request_id;
use crate::state::AppState;

const ENDPOINT: &str = "/api/v1.0/tobs";

/// Handle GET /api/v1.0/tobs requests
pub async fn tobs_handler(State(state): State<Arc<AppState>>) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = ENDPOINT,
        request_id = %request_id,
        "Processing tobs request"
    );

    match state.store.most_active_station_observations().await {
        Ok(observations) => {
            info!(
                endpoint = ENDPOINT,
                request_id = %request_id,
                duration_us = start_time.elapsed().as_micros() as u64,
                station = observations.first().map(|o| o.station.as_str()).unwrap_or("none"),
                observation_count = observations.len(),
                "Tobs request successful"
            );
            Json(observations).into_response()
        }
        Err(error) => error_response(error, ENDPOINT, &request_id, None),
    }
}
