//! Aggregation of one raw feed payload into a chart-ready series plus the
//! three derived statistics.
//!
//! A pass owns the payload transiently; its outputs replace the previous
//! results wholesale and are never merged across fetches.

use chrono::NaiveDate;
use serde::Serialize;

use crate::feed::{FeedResponse, MalformedRecordError, NeoRecord};

/// One point of the daily-count series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountPoint {
    pub date: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FastestNeo {
    pub name: String,
    pub speed_kmph: f64,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClosestNeo {
    pub name: String,
    pub distance_km: f64,
    pub date: String,
}

/// The three stat-card values. `average_size_km` is count-weighted: each
/// record contributes its max diameter divided by how many records share its
/// date, so crowded days do not dominate quiet ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Statistics {
    pub fastest: Option<FastestNeo>,
    pub closest: Option<ClosestNeo>,
    pub average_size_km: f64,
}

/// Full output of one aggregation pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NeoSummary {
    pub series: Vec<CountPoint>,
    pub stats: Statistics,
}

/// Rounds to two decimal places, the precision shown on the stat cards.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Transforms a raw payload into the ordered count series and statistics.
///
/// Date keys are parsed, sorted ascending, and re-rendered as `%Y-%m-%d`, so
/// the series order never depends on the payload's insertion order. Extrema
/// use strict comparisons on the raw parsed values; a tie keeps the record
/// seen earlier in sorted-date order. An empty payload yields an empty series
/// and default statistics.
pub fn aggregate(payload: &FeedResponse) -> Result<NeoSummary, MalformedRecordError> {
    let mut days: Vec<(NaiveDate, &[NeoRecord])> =
        Vec::with_capacity(payload.near_earth_objects.len());
    for (key, records) in &payload.near_earth_objects {
        let date =
            NaiveDate::parse_from_str(key, "%Y-%m-%d").map_err(|_| MalformedRecordError {
                object: key.clone(),
                field: "date key",
            })?;
        days.push((date, records.as_slice()));
    }
    days.sort_unstable_by_key(|(date, _)| *date);

    let mut series = Vec::with_capacity(days.len());
    let mut fastest: Option<(f64, &NeoRecord, String)> = None;
    let mut closest: Option<(f64, &NeoRecord, String)> = None;
    let mut size_sum = 0.0;

    for (date, records) in &days {
        let label = date.format("%Y-%m-%d").to_string();
        series.push(CountPoint {
            date: label.clone(),
            count: records.len(),
        });

        let day_count = records.len() as f64;
        for record in *records {
            let velocity = record.velocity_kmph()?;
            let distance = record.miss_distance_km()?;

            if fastest.as_ref().is_none_or(|(best, ..)| velocity > *best) {
                fastest = Some((velocity, record, label.clone()));
            }
            if closest.as_ref().is_none_or(|(best, ..)| distance < *best) {
                closest = Some((distance, record, label.clone()));
            }

            size_sum += record.max_diameter_km() / day_count;
        }
    }

    let stats = Statistics {
        fastest: fastest.map(|(speed, record, date)| FastestNeo {
            name: record.name.clone(),
            speed_kmph: round2(speed),
            date,
        }),
        closest: closest.map(|(distance, record, date)| ClosestNeo {
            name: record.name.clone(),
            distance_km: round2(distance),
            date,
        }),
        average_size_km: round2(size_sum),
    };

    Ok(NeoSummary { series, stats })
}
