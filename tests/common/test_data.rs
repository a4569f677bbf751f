//! Test data generation utilities.
//!
//! This module writes small SQLite climate databases with known contents
//! for testing the surfsup server.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::path::Path;

type Result<T> = std::result::Result<T, sqlx::Error>;

const SCHEMA: &[&str] = &[
    "CREATE TABLE measurement (
        id INTEGER PRIMARY KEY,
        station TEXT,
        date TEXT,
        prcp FLOAT,
        tobs FLOAT
    )",
    "CREATE TABLE station (
        id INTEGER PRIMARY KEY,
        station TEXT,
        name TEXT,
        latitude FLOAT,
        longitude FLOAT,
        elevation FLOAT
    )",
];

/// Stations in the test database
pub const STATIONS: &[(&str, &str)] = &[
    ("USC00519397", "WAIKIKI 717.2, HI US"),
    ("USC00513117", "KANEOHE 838.1, HI US"),
    ("USC00519281", "WAIHEE 837.5, HI US"),
];

/// (date, station, prcp, tobs). USC00519281 has the most readings.
pub const OBSERVATIONS: &[(&str, &str, Option<f64>, f64)] = &[
    ("2017-08-01", "USC00519397", Some(0.0), 81.0),
    ("2017-08-01", "USC00513117", Some(0.12), 77.0),
    ("2017-08-01", "USC00519281", None, 76.0),
    ("2017-08-02", "USC00519397", Some(0.0), 80.0),
    ("2017-08-02", "USC00519281", Some(0.05), 78.0),
    ("2017-08-03", "USC00519281", Some(0.02), 79.0),
    ("2017-08-04", "USC00519281", Some(0.3), 75.0),
    ("2017-08-05", "USC00513117", Some(0.0), 82.0),
];

/// Creates an empty database with the climate schema.
pub async fn create_empty_climate_db(path: &Path) -> Result<()> {
    create_climate_db(path, &[], &[]).await
}

/// Creates a database holding [`STATIONS`] and [`OBSERVATIONS`].
pub async fn create_test_climate_db(path: &Path) -> Result<()> {
    create_climate_db(path, STATIONS, OBSERVATIONS).await
}

async fn create_climate_db(
    path: &Path,
    stations: &[(&str, &str)],
    observations: &[(&str, &str, Option<f64>, f64)],
) -> Result<()> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    for statement in SCHEMA {
        sqlx::query(statement).execute(&pool).await?;
    }

    for (station, name) in stations {
        sqlx::query("INSERT INTO station (station, name) VALUES (?1, ?2)")
            .bind(*station)
            .bind(*name)
            .execute(&pool)
            .await?;
    }

    for (date, station, prcp, tobs) in observations {
        sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?1, ?2, ?3, ?4)")
            .bind(*station)
            .bind(*date)
            .bind(*prcp)
            .bind(*tobs)
            .execute(&pool)
            .await?;
    }

    pool.close().await;
    Ok(())
}
