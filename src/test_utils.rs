//! Fixture databases and request helpers shared by the unit tests.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

use crate::config::Config;
use crate::dataset::Dataset;
use crate::schema;
use crate::state::AppState;

/// Stations in insertion order: (station, name, latitude, longitude, elevation)
pub(crate) const FIXTURE_STATIONS: &[(&str, &str, f64, f64, f64)] = &[
    ("USC00519397", "WAIKIKI 717.2, HI US", 21.2716, -157.8168, 3.0),
    ("USC00513117", "KANEOHE 838.1, HI US", 21.4234, -157.8015, 14.6),
    ("USC00519281", "WAIHEE 837.5, HI US", 21.45167, -157.84889, 32.9),
];

/// Measurements in insertion order: (station, date, prcp, tobs)
pub(crate) const FIXTURE_MEASUREMENTS: &[(&str, &str, Option<f64>, Option<f64>)] = &[
    ("USC00519281", "2016-08-22", Some(0.5), Some(70.0)),
    ("USC00519281", "2016-08-23", Some(1.79), Some(77.0)),
    ("USC00519281", "2017-01-05", Some(0.0), Some(64.0)),
    ("USC00519281", "2017-01-20", None, Some(68.0)),
    ("USC00519281", "2017-08-23", Some(0.45), Some(76.0)),
    ("USC00519397", "2016-08-23", Some(0.0), Some(81.0)),
    ("USC00519397", "2017-01-10", Some(0.05), Some(66.0)),
    ("USC00519397", "2017-08-23", Some(0.0), Some(81.0)),
    ("USC00513117", "2017-01-31", None, Some(72.0)),
    ("USC00513117", "2017-02-01", Some(0.1), Some(73.0)),
];

pub(crate) fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
}

/// A single-connection in-memory database; the pool must never recycle
/// its connection or the data goes with it.
pub(crate) async fn memory_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect("sqlite::memory:")
        .await
        .unwrap()
}

pub(crate) async fn create_schema(pool: &SqlitePool) {
    for statement in schema::ddl() {
        sqlx::query(statement).execute(pool).await.unwrap();
    }
}

pub(crate) async fn seed_fixture(pool: &SqlitePool) {
    for &(station, name, latitude, longitude, elevation) in FIXTURE_STATIONS {
        sqlx::query(
            "INSERT INTO station (station, name, latitude, longitude, elevation) VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(station)
        .bind(name)
        .bind(latitude)
        .bind(longitude)
        .bind(elevation)
        .execute(pool)
        .await
        .unwrap();
    }

    for &(station, day, prcp, tobs) in FIXTURE_MEASUREMENTS {
        sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?1, ?2, ?3, ?4)")
            .bind(station)
            .bind(day)
            .bind(prcp)
            .bind(tobs)
            .execute(pool)
            .await
            .unwrap();
    }
}

pub(crate) async fn empty_dataset() -> Dataset {
    let pool = memory_pool().await;
    create_schema(&pool).await;
    Dataset::from_pool(pool)
}

pub(crate) async fn fixture_dataset() -> Dataset {
    let pool = memory_pool().await;
    create_schema(&pool).await;
    seed_fixture(&pool).await;
    Dataset::from_pool(pool)
}

/// Extra rows with missing temperatures: (station, date, prcp, tobs).
///
/// 2017-03-01 holds only a null reading; 2017-03-02 a single 65.0.
pub(crate) const MISSING_TOBS_MEASUREMENTS: &[(&str, &str, Option<f64>, Option<f64>)] = &[
    ("USC00519281", "2017-03-01", None, None),
    ("USC00519281", "2017-03-02", Some(1.0), Some(65.0)),
];

/// The regular fixture plus [`MISSING_TOBS_MEASUREMENTS`]
pub(crate) async fn missing_tobs_dataset() -> Dataset {
    let pool = memory_pool().await;
    create_schema(&pool).await;
    seed_fixture(&pool).await;

    for &(station, day, prcp, tobs) in MISSING_TOBS_MEASUREMENTS {
        sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?1, ?2, ?3, ?4)")
            .bind(station)
            .bind(day)
            .bind(prcp)
            .bind(tobs)
            .execute(&pool)
            .await
            .unwrap();
    }

    Dataset::from_pool(pool)
}

pub(crate) async fn fixture_state() -> Arc<AppState> {
    AppState::new_shared(Config::default(), fixture_dataset().await)
}

pub(crate) async fn empty_state() -> Arc<AppState> {
    AppState::new_shared(Config::default(), empty_dataset().await)
}

/// Send a GET through the router and decode the JSON body
pub(crate) async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}
