//! Precipitation endpoint handler.
//!
//! Returns every observation's precipitation as a JSON object keyed by date.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::error_response;
use crate::logging::generate_request_id;
use crate::state::AppState;

const ENDPOINT: &str = "/api/v1.0/precipitation";

/// Handle GET /api/v1.0/precipitation requests
pub async fn precipitation_handler(State(state): State<Arc<AppState>>) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = ENDPOINT,
        request_id = %request_id,
        "Processing precipitation request"
    );

    match state.store.all_precipitation().await {
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
        Err(error) => error_response(error, ENDPOINT, &request_id, None),
    }
}
