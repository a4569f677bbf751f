//! # surfsup
//!
//! A small read-only HTTP reporting API over a SQLite climate dataset.
//!
//! The dataset holds daily precipitation and temperature observations keyed
//! by weather station. Clients request aggregated or filtered views of it and
//! receive JSON.
//!
//! ## Architecture
//!
//! - **Query Layer** ([`store`]): one bounded read transaction per operation
//!   against an injected SQLite pool
//! - **Route Layer** ([`handlers`]): maps URL paths and date parameters onto
//!   query operations and serializes the results

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod state;
pub mod store;

#[cfg(test)]
mod test_fixtures;

pub use config::Config;
pub use error::{Result, SurfsUpError};
pub use handlers::router;
pub use logging::{
    create_http_trace_layer, generate_request_id, init_tracing, log_dataset_stats, log_error,
    log_request_error,
};
pub use models::{DatasetSummary, Observation, Station, TemperatureStats, TobsObservation};
pub use state::AppState;
pub use store::{parse_date, ClimateStore};
