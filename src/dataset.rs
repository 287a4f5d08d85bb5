//! Read-only access to the station climate dataset.
//!
//! [`Dataset`] owns a pool of read-only SQLite connections. Each query
//! borrows a connection for its own duration, so concurrent requests never
//! share a session and connections are returned on every exit path.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use tracing::debug;

use crate::dates::{format_date, one_year_before, DATE_FORMAT};
use crate::error::{ClimateError, Result};
use crate::schema;

/// One row of the `station` table
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Station {
    pub station: String,
    pub name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub elevation: Option<f64>,
}

/// Number of measurements recorded by one station
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationActivity {
    pub station: String,
    pub observations: i64,
}

/// Min/max/average observed temperature over a date range.
///
/// All three fields are `None` when no row matched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TemperatureStats {
    #[serde(rename = "Minimum Temperature")]
    pub minimum: Option<f64>,
    #[serde(rename = "Maximum Temperature")]
    pub maximum: Option<f64>,
    #[serde(rename = "Average Temperature")]
    pub average: Option<f64>,
}

/// Size and extent of the loaded dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub schema_version: u32,
    pub station_count: i64,
    pub measurement_count: i64,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
}

/// Query primitives over the `station` and `measurement` tables
#[derive(Debug, Clone)]
pub struct Dataset {
    pool: SqlitePool,
}

impl Dataset {
    /// Open an existing dataset file read-only.
    pub async fn open(path: &Path, max_connections: u32) -> Result<Self> {
        if !path.exists() {
            return Err(ClimateError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Dataset not found: {}", path.display()),
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

        debug!(path = %path.display(), max_connections, "Opened dataset pool");

        Ok(Self { pool })
    }

    /// Wrap an already-configured pool
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Close all pooled connections
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Check that every declared table and column is present.
    pub async fn verify_schema(&self) -> Result<()> {
        for table in [schema::STATION_TABLE, schema::MEASUREMENT_TABLE] {
            let columns: Vec<String> =
                sqlx::query_scalar("SELECT name FROM pragma_table_info(?1)")
                    .bind(table)
                    .fetch_all(&self.pool)
                    .await?;

            if columns.is_empty() {
                return Err(ClimateError::Schema {
                    message: format!("Table '{}' not found", table),
                });
            }

            let missing = schema::missing_columns(table, &columns);
            if !missing.is_empty() {
                return Err(ClimateError::Schema {
                    message: format!(
                        "Table '{}' is missing columns: {}",
                        table,
                        missing.join(", ")
                    ),
                });
            }
        }

        Ok(())
    }

    pub async fn summary(&self) -> Result<DatasetSummary> {
        let station_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM station")
            .fetch_one(&self.pool)
            .await?;

        let (measurement_count, first_date, last_date): (i64, Option<String>, Option<String>) =
            sqlx::query_as("SELECT COUNT(*), MIN(date), MAX(date) FROM measurement")
                .fetch_one(&self.pool)
                .await?;

        Ok(DatasetSummary {
            schema_version: schema::SCHEMA_VERSION,
            station_count,
            measurement_count,
            first_date,
            last_date,
        })
    }

    /// Station identifiers in table order
    pub async fn list_stations(&self) -> Result<Vec<String>> {
        let stations = sqlx::query_scalar("SELECT station FROM station ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(stations)
    }

    /// Full station rows in table order
    pub async fn list_station_records(&self) -> Result<Vec<Station>> {
        let stations = sqlx::query_as(
            r#"
            SELECT station, name,
                   CAST(latitude AS REAL) AS latitude,
                   CAST(longitude AS REAL) AS longitude,
                   CAST(elevation AS REAL) AS elevation
            FROM station
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(stations)
    }

    /// Most recent measurement date, `None` for an empty dataset.
    pub async fn latest_date(&self) -> Result<Option<NaiveDate>> {
        let latest: Option<String> = sqlx::query_scalar("SELECT MAX(date) FROM measurement")
            .fetch_one(&self.pool)
            .await?;

        latest
            .map(|raw| {
                NaiveDate::parse_from_str(&raw, DATE_FORMAT).map_err(|_| ClimateError::Schema {
                    message: format!("Stored measurement date '{}' is not YYYY-MM-DD", raw),
                })
            })
            .transpose()
    }

    /// Start of the last year of data, anchored to the latest stored date.
    pub async fn cutoff_date(&self) -> Result<Option<NaiveDate>> {
        Ok(self.latest_date().await?.map(one_year_before))
    }

    /// `(date, precipitation)` for every measurement on or after `cutoff`.
    ///
    /// Rows come back ordered by date, then by row id, so callers folding
    /// them into a map keep the last row written for a date.
    pub async fn precipitation_since(&self, cutoff: NaiveDate) -> Result<Vec<(String, Option<f64>)>> {
        let rows = sqlx::query_as(
            r#"
            SELECT date, CAST(prcp AS REAL)
            FROM measurement
            WHERE date >= ?1
            ORDER BY date, id
            "#,
        )
        .bind(format_date(cutoff))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Measurement count per station, busiest first
    pub async fn station_activity(&self) -> Result<Vec<StationActivity>> {
        let rows: Vec<(String, i64)> = sqlx::query_as(
            r#"
            SELECT station, COUNT(*) AS observations
            FROM measurement
            GROUP BY station
            ORDER BY observations DESC, station ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(station, observations)| StationActivity {
                station,
                observations,
            })
            .collect())
    }

    /// Station with the most measurements.
    ///
    /// Ties go to the lexicographically smallest identifier.
    pub async fn most_active_station(&self) -> Result<Option<String>> {
        let station = sqlx::query_scalar(
            r#"
            SELECT station
            FROM measurement
            GROUP BY station
            ORDER BY COUNT(*) DESC, station ASC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;
        Ok(station)
    }

    /// Observed temperatures for `station` on or after `cutoff`, in date order.
    pub async fn observations_for_station_since(
        &self,
        station: &str,
        cutoff: NaiveDate,
    ) -> Result<Vec<Option<f64>>> {
        let observations = sqlx::query_scalar(
            r#"
            SELECT CAST(tobs AS REAL)
            FROM measurement
            WHERE station = ?1 AND date >= ?2
            ORDER BY date, id
            "#,
        )
        .bind(station)
        .bind(format_date(cutoff))
        .fetch_all(&self.pool)
        .await?;
        Ok(observations)
    }

    /// Temperature aggregates for `start <= date` and, if given, `date <= end`.
    pub async fn temperature_stats(
        &self,
        start: NaiveDate,
        end: Option<NaiveDate>,
    ) -> Result<TemperatureStats> {
        let (minimum, maximum, average): (Option<f64>, Option<f64>, Option<f64>) =
            sqlx::query_as(
                r#"
                SELECT CAST(MIN(tobs) AS REAL),
                       CAST(MAX(tobs) AS REAL),
                       CAST(AVG(tobs) AS REAL)
                FROM measurement
                WHERE date >= ?1 AND (?2 IS NULL OR date <= ?2)
                "#,
            )
            .bind(format_date(start))
            .bind(end.map(format_date))
            .fetch_one(&self.pool)
            .await?;

        Ok(TemperatureStats {
            minimum,
            maximum,
            average,
        })
    }
}
