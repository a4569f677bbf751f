//! Query layer over the SQLite climate dataset.
//!
//! `ClimateStore` wraps an injected connection pool. Every operation runs
//! inside one read transaction that is released before the call returns;
//! an early `?` return drops the transaction, which rolls it back and hands
//! the connection back to the pool.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDate;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};

use crate::error::{Result, SurfsUpError};
use crate::models::{DatasetSummary, Station, TemperatureStats, TobsObservation};

/// Tables and the columns this crate reads from them
pub const REQUIRED_SCHEMA: &[(&str, &[&str])] = &[
    ("measurement", &["station", "date", "prcp", "tobs"]),
    ("station", &["station", "name"]),
];

/// Date format accepted in path parameters and stored in `measurement.date`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const PRECIPITATION_QUERY: &str = "SELECT date, CAST(prcp AS REAL) AS prcp FROM measurement";

const STATIONS_QUERY: &str = "SELECT station, name FROM station";

const BUSIEST_STATION_QUERY: &str = "\
    SELECT station, COUNT(tobs) AS tobs_count \
    FROM measurement \
    GROUP BY station \
    HAVING COUNT(tobs) > 0 \
    ORDER BY tobs_count DESC \
    LIMIT 1";

const STATION_TOBS_QUERY: &str = "\
    SELECT date, CAST(tobs AS REAL) AS tobs, station \
    FROM measurement \
    WHERE station = ?1 AND tobs IS NOT NULL \
    ORDER BY date";

const STATS_FROM_QUERY: &str = "\
    SELECT CAST(MIN(tobs) AS REAL), CAST(AVG(tobs) AS REAL), CAST(MAX(tobs) AS REAL) \
    FROM measurement \
    WHERE date >= ?1";

const STATS_BETWEEN_QUERY: &str = "\
    SELECT CAST(MIN(tobs) AS REAL), CAST(AVG(tobs) AS REAL), CAST(MAX(tobs) AS REAL) \
    FROM measurement \
    WHERE date BETWEEN ?1 AND ?2";

type StatsRow = (Option<f64>, Option<f64>, Option<f64>);

/// Read-only handle on the climate database
#[derive(Debug, Clone)]
pub struct ClimateStore {
    pool: SqlitePool,
}

impl ClimateStore {
    /// Wrap an existing pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open the database file read-only. The file must already exist.
    pub async fn open(path: &Path, max_connections: u32) -> Result<Self> {
        if !path.exists() {
            return Err(SurfsUpError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", path.display()),
            )));
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .read_only(true)
            .create_if_missing(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        info!("Opened climate database: {}", path.display());
        Ok(Self::new(pool))
    }

    /// Close the pool, waiting for checked-out connections to come back
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Check that every table and column we query is present
    pub async fn validate_schema(&self) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        for (table, columns) in REQUIRED_SCHEMA {
            let present: Vec<String> =
                sqlx::query_scalar("SELECT name FROM pragma_table_info(?1)")
                    .bind(*table)
                    .fetch_all(&mut *tx)
                    .await?;

            if present.is_empty() {
                return Err(SurfsUpError::Schema {
                    message: format!("Table {} not found", table),
                });
            }

            for column in *columns {
                if !present.iter().any(|name| name == *column) {
                    return Err(SurfsUpError::Schema {
                        message: format!("Table {} has no column {}", table, column),
                    });
                }
            }
        }

        tx.commit().await?;
        Ok(())
    }

    /// Row counts and date extent of the dataset
    pub async fn dataset_summary(&self) -> Result<DatasetSummary> {
        let mut tx = self.pool.begin().await?;

        let (observation_count, first_date, last_date): (i64, Option<NaiveDate>, Option<NaiveDate>) =
            sqlx::query_as("SELECT COUNT(*), MIN(date), MAX(date) FROM measurement")
                .fetch_one(&mut *tx)
                .await?;

        let station_count: i64 = sqlx::query_scalar("SELECT COUNT(DISTINCT station) FROM station")
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(DatasetSummary {
            observation_count,
            station_count,
            first_date,
            last_date,
        })
    }

    /// Precipitation keyed by date.
    ///
    /// Several stations report on the same day; the row read last for a
    /// date overwrites the earlier ones.
    pub async fn all_precipitation(&self) -> Result<BTreeMap<NaiveDate, Option<f64>>> {
        let mut tx = self.pool.begin().await?;

        let rows: Vec<(NaiveDate, Option<f64>)> = sqlx::query_as(PRECIPITATION_QUERY)
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;

        debug!(rows = rows.len(), "Fetched precipitation rows");
        Ok(rows.into_iter().collect())
    }

    /// Station names keyed by station id. Repeated ids collapse like dates do
    /// in [`ClimateStore::all_precipitation`].
    pub async fn all_stations(&self) -> Result<BTreeMap<String, String>> {
        let mut tx = self.pool.begin().await?;

        let rows: Vec<Station> = sqlx::query_as(STATIONS_QUERY).fetch_all(&mut *tx).await?;

        tx.commit().await?;

        Ok(rows
            .into_iter()
            .map(|station| (station.station, station.name))
            .collect())
    }

    /// All temperature readings of the station with the most readings.
    ///
    /// Ties go to whichever station SQLite yields first. Returns an empty
    /// list when no station has a reading.
    pub async fn most_active_station_observations(&self) -> Result<Vec<TobsObservation>> {
        let mut tx = self.pool.begin().await?;

        let busiest: Option<(String, i64)> = sqlx::query_as(BUSIEST_STATION_QUERY)
            .fetch_optional(&mut *tx)
            .await?;

        let observations = match busiest {
            Some((station, tobs_count)) => {
                debug!(station = %station, tobs_count, "Selected busiest station");
                sqlx::query_as::<_, TobsObservation>(STATION_TOBS_QUERY)
                    .bind(&station)
                    .fetch_all(&mut *tx)
                    .await?
            }
            None => Vec::new(),
        };

        tx.commit().await?;
        Ok(observations)
    }

    /// Temperature statistics over every observation on or after `start`
    pub async fn temperature_stats_from(&self, start: NaiveDate) -> Result<TemperatureStats> {
        let mut tx = self.pool.begin().await?;

        let (min_temp, avg_temp, max_temp): StatsRow = sqlx::query_as(STATS_FROM_QUERY)
            .bind(start)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(TemperatureStats {
            start_date: start,
            end_date: None,
            min_temp,
            avg_temp,
            max_temp,
        })
    }

    /// Temperature statistics over `start..=end`.
    ///
    /// An inverted range is not rejected; it matches nothing and yields
    /// empty statistics.
    pub async fn temperature_stats_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<TemperatureStats> {
        let mut tx = self.pool.begin().await?;

        let (min_temp, avg_temp, max_temp): StatsRow = sqlx::query_as(STATS_BETWEEN_QUERY)
            .bind(start)
            .bind(end)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(TemperatureStats {
            start_date: start,
            end_date: Some(end),
            min_temp,
            avg_temp,
            max_temp,
        })
    }
}

/// Parse a `YYYY-MM-DD` path parameter.
///
/// Only the zero-padded form is accepted; `2017-1-2` is rejected even though
/// chrono would read it.
pub fn parse_date(param: &str, value: &str) -> Result<NaiveDate> {
    let well_formed = value.len() == 10
        && value.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });

    if !well_formed {
        return Err(SurfsUpError::InvalidParameter {
            param: param.to_string(),
            message: format!("'{}' does not match YYYY-MM-DD", value),
        });
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| SurfsUpError::InvalidParameter {
        param: param.to_string(),
        message: format!("'{}' is not a calendar date: {}", value, e),
    })
}
