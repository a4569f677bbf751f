//! In-memory climate databases for unit tests.

use chrono::NaiveDate;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::models::Observation;
use crate::store::{ClimateStore, DATE_FORMAT};

/// Same layout as the published Hawaii dataset
pub const FIXTURE_SCHEMA: &[&str] = &[
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

pub fn obs(date: &str, station: &str, prcp: Option<f64>, tobs: f64) -> Observation {
    Observation {
        date: NaiveDate::parse_from_str(date, DATE_FORMAT).unwrap(),
        station: station.to_string(),
        prcp,
        tobs,
    }
}

pub async fn create_schema(pool: &SqlitePool) {
    for statement in FIXTURE_SCHEMA {
        sqlx::query(statement).execute(pool).await.unwrap();
    }
}

/// Single-connection in-memory pool; the database lives as long as that connection
pub async fn memory_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap()
}

pub async fn store_with(observations: &[Observation], stations: &[(&str, &str)]) -> ClimateStore {
    let pool = memory_pool().await;
    create_schema(&pool).await;

    for observation in observations {
        sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?1, ?2, ?3, ?4)")
            .bind(&observation.station)
            .bind(observation.date)
            .bind(observation.prcp)
            .bind(observation.tobs)
            .execute(&pool)
            .await
            .unwrap();
    }

    for (station, name) in stations {
        sqlx::query("INSERT INTO station (station, name) VALUES (?1, ?2)")
            .bind(*station)
            .bind(*name)
            .execute(&pool)
            .await
            .unwrap();
    }

    ClimateStore::new(pool)
}
