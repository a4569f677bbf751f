//! Row and response types for the climate dataset.
//!
//! Rows are read from the `measurement` and `station` tables; the derived
//! types only exist as response payloads.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One daily reading from the `measurement` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Observation {
    pub date: NaiveDate,
    pub station: String,
    pub prcp: Option<f64>,
    pub tobs: f64,
}

/// A weather station from the `station` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Station {
    pub station: String,
    pub name: String,
}

/// Temperature reading of the busiest station, as served by `/api/v1.0/tobs`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct TobsObservation {
    pub date: NaiveDate,
    pub tobs: f64,
    pub station: String,
}

/// MIN/AVG/MAX of `tobs` over a date range.
///
/// The statistics are `None` when no observation falls in the range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureStats {
    pub start_date: NaiveDate,
    /// `None` for open-ended ranges
    pub end_date: Option<NaiveDate>,
    pub min_temp: Option<f64>,
    pub avg_temp: Option<f64>,
    pub max_temp: Option<f64>,
}

/// Size and extent of the opened dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub observation_count: i64,
    pub station_count: i64,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
}
