//! HTTP request handlers for the surfsup API.
//!
//! This module contains all the endpoint handlers for the web server and
//! the router that wires them to their paths.

pub mod home;
pub mod precipitation;
pub mod stations;
pub mod temperature;
pub mod tobs;

pub use home::home_handler;
pub use precipitation::precipitation_handler;
pub use stations::stations_handler;
pub use temperature::{temperature_range_handler, temperature_start_handler};
pub use tobs::tobs_handler;

use std::sync::Arc;

use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::CorsLayer;

use crate::error::SurfsUpError;
use crate::logging::{create_http_trace_layer, log_request_error};
use crate::state::AppState;

/// Build the router serving every API route
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/api/v1.0/precipitation", get(precipitation_handler))
        .route("/api/v1.0/stations", get(stations_handler))
        .route("/api/v1.0/tobs", get(tobs_handler))
        .route("/api/v1.0/start/:start", get(temperature_start_handler))
        .route("/api/v1.0/end/:start/:end", get(temperature_range_handler))
        .layer(create_http_trace_layer())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Log a failed request and turn the error into a JSON error response
pub(crate) fn error_response(
    error: SurfsUpError,
    endpoint: &str,
    request_id: &str,
    params: Option<&str>,
) -> Response {
    log_request_error(&error, endpoint, request_id, params);

    (
        error.status_code(),
        Json(serde_json::json!({
            "error": error.to_string(),
            "request_id": request_id
        })),
    )
        .into_response()
}
