//! Declared dataset schema.
//!
//! The dataset file is produced elsewhere; these declarations are what the
//! service expects to find in it and are checked once at startup.

/// Version of the table layout below
pub const SCHEMA_VERSION: u32 = 1;

pub const STATION_TABLE: &str = "station";
pub const MEASUREMENT_TABLE: &str = "measurement";

/// Columns the service reads from `station`
pub const STATION_COLUMNS: &[&str] = &["id", "station", "name", "latitude", "longitude", "elevation"];

/// Columns the service reads from `measurement`
pub const MEASUREMENT_COLUMNS: &[&str] = &["id", "station", "date", "prcp", "tobs"];

pub const CREATE_STATION_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS station (
    id INTEGER PRIMARY KEY,
    station TEXT NOT NULL UNIQUE,
    name TEXT,
    latitude REAL,
    longitude REAL,
    elevation REAL
)
"#;

pub const CREATE_MEASUREMENT_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS measurement (
    id INTEGER PRIMARY KEY,
    station TEXT NOT NULL,
    date TEXT NOT NULL,
    prcp REAL,
    tobs REAL
)
"#;

pub const CREATE_MEASUREMENT_DATE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_measurement_date ON measurement(date)";

/// Statements that build an empty dataset with this schema, in order
pub fn ddl() -> [&'static str; 3] {
    [
        CREATE_STATION_TABLE,
        CREATE_MEASUREMENT_TABLE,
        CREATE_MEASUREMENT_DATE_INDEX,
    ]
}

/// Required columns for a table declared here
pub fn required_columns(table: &str) -> Option<&'static [&'static str]> {
    match table {
        STATION_TABLE => Some(STATION_COLUMNS),
        MEASUREMENT_TABLE => Some(MEASUREMENT_COLUMNS),
        _ => None,
    }
}

/// Required columns absent from `present`
pub fn missing_columns(table: &str, present: &[String]) -> Vec<&'static str> {
    required_columns(table)
        .unwrap_or(&[])
        .iter()
        .filter(|col| !present.iter().any(|p| p.eq_ignore_ascii_case(col)))
        .copied()
        .collect()
}
