//! Print a summary of a climate dataset file.
//!
//! Usage: inspect_dataset <path-to-sqlite>

use anyhow::{bail, Context, Result};
use std::path::PathBuf;

use climate_api::dates::format_date;
use climate_api::Dataset;

const TOP_STATIONS: usize = 5;

#[tokio::main]
async fn main() -> Result<()> {
    let Some(path) = std::env::args().nth(1).map(PathBuf::from) else {
        bail!("usage: inspect_dataset <path-to-sqlite>");
    };

    println!("Inspecting dataset: {}", path.display());

    let dataset = Dataset::open(&path, 1)
        .await
        .with_context(|| format!("Failed to open {}", path.display()))?;

    match dataset.verify_schema().await {
        Ok(()) => println!("Schema: ok"),
        Err(e) => println!("Schema: {}", e),
    }

    let summary = dataset.summary().await.context("Failed to summarize dataset")?;

    println!("\n=== DATASET ===");
    println!("  schema version:  {}", summary.schema_version);
    println!("  stations:        {}", summary.station_count);
    println!("  measurements:    {}", summary.measurement_count);
    println!(
        "  date range:      {} .. {}",
        summary.first_date.as_deref().unwrap_or("-"),
        summary.last_date.as_deref().unwrap_or("-")
    );
    if let Some(cutoff) = dataset.cutoff_date().await? {
        println!("  last-year from:  {}", format_date(cutoff));
    }

    println!("\nStations:");
    for station in dataset.list_station_records().await? {
        println!(
            "  {} {} ({}, {}) elev {}",
            station.station,
            station.name.as_deref().unwrap_or("?"),
            station.latitude.map_or("-".to_string(), |v| v.to_string()),
            station.longitude.map_or("-".to_string(), |v| v.to_string()),
            station.elevation.map_or("-".to_string(), |v| v.to_string()),
        );
    }

    println!("\nMost active stations:");
    for activity in dataset.station_activity().await?.iter().take(TOP_STATIONS) {
        println!("  {:<12} {}", activity.station, activity.observations);
    }

    dataset.close().await;
    Ok(())
}
