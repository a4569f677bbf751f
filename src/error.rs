//! Error types for the surfsup application.
//!
//! This module defines a single error enum covering every failure the
//! server can hit, from configuration loading to store queries.

use axum::http::StatusCode;
use thiserror::Error;

/// The main error type for surfsup operations.
#[derive(Error, Debug)]
pub enum SurfsUpError {
    /// Data store errors (unreachable file, closed pool, failed query)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The data store is missing a table or column we read
    #[error("Schema error: {message}")]
    Schema { message: String },

    /// Invalid parameter errors
    #[error("Invalid parameter: {param} - {message}")]
    InvalidParameter { param: String, message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Server errors
    #[error("Server error: {message}")]
    Server { message: String },
}

impl SurfsUpError {
    /// HTTP status a request failing with this error is answered with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            SurfsUpError::InvalidParameter { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Convenience type alias for Results with SurfsUpError
pub type Result<T> = std::result::Result<T, SurfsUpError>;
