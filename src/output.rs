//! Presentation boundary: stat cards and count series as log output, JSON,
//! or CSV append. Consumes only the plain structures produced by one
//! aggregation pass.

use anyhow::Result;
use tracing::{debug, info};

use crate::stats::{CountPoint, NeoSummary};
use crate::validate::DateRange;
use csv::WriterBuilder;
use std::fs::OpenOptions;
use std::path::Path;

/// Logs the three stat cards for a completed pass.
pub fn print_summary(summary: &NeoSummary, range: &DateRange) {
    match &summary.stats.fastest {
        Some(f) => info!(
            name = %f.name,
            speed_kmph = f.speed_kmph,
            date = %f.date,
            "Fastest object"
        ),
        None => info!("Fastest object: no records in range"),
    }

    match &summary.stats.closest {
        Some(c) => info!(
            name = %c.name,
            distance_km = c.distance_km,
            date = %c.date,
            "Closest approach"
        ),
        None => info!("Closest approach: no records in range"),
    }

    info!(
        average_size_km = summary.stats.average_size_km,
        start = %range.start_iso(),
        end = %range.end_iso(),
        "Average estimated size"
    );
}

/// Logs the daily-count series in chart order.
pub fn print_series(series: &[CountPoint]) {
    for point in series {
        info!(date = %point.date, count = point.count, "Daily count");
    }
}

/// Logs the full summary as pretty-printed JSON.
pub fn print_json(summary: &NeoSummary) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}

/// Appends the count series as rows to a CSV file.
///
/// Creates the file with a header if it does not already exist.
pub fn write_series_csv(path: &str, series: &[CountPoint]) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, rows = series.len(), "Appending CSV rows");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists) // IMPORTANT when appending
        .from_writer(file);

    for point in series {
        writer.serialize(point)?;
    }
    writer.flush()?;

    Ok(())
}
