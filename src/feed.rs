//! Serde types for the NeoWs feed payload.
//!
//! The feed keys object lists by ISO date. Velocity and miss distance arrive
//! as numeric *strings*; every such field is treated as untrusted text and
//! parsed explicitly so a bad record fails loudly instead of leaking NaN into
//! the aggregates.

use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

/// A record (or the payload around it) is missing an expected nested field,
/// or carries text where a finite number is required.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("malformed record '{object}': bad or missing {field}")]
pub struct MalformedRecordError {
    /// Object name, or the offending payload key when no record is in scope.
    pub object: String,
    pub field: &'static str,
}

/// Success body of one feed request: objects grouped by approach date.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedResponse {
    pub near_earth_objects: HashMap<String, Vec<NeoRecord>>,
}

/// One near-Earth object entry for a given date.
#[derive(Debug, Clone, Deserialize)]
pub struct NeoRecord {
    pub name: String,
    #[serde(default)]
    pub close_approach_data: Vec<CloseApproach>,
    pub estimated_diameter: EstimatedDiameter,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CloseApproach {
    pub relative_velocity: RelativeVelocity,
    pub miss_distance: MissDistance,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelativeVelocity {
    pub kilometers_per_hour: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MissDistance {
    pub kilometers: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EstimatedDiameter {
    pub kilometers: DiameterKm,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiameterKm {
    pub estimated_diameter_min: f64,
    pub estimated_diameter_max: f64,
}

impl NeoRecord {
    /// The first close-approach entry, which holds the velocity and miss
    /// distance the dashboard reports on.
    fn approach(&self) -> Result<&CloseApproach, MalformedRecordError> {
        self.close_approach_data
            .first()
            .ok_or_else(|| MalformedRecordError {
                object: self.name.clone(),
                field: "close_approach_data",
            })
    }

    /// Relative velocity in km/h, parsed from the feed's string field.
    pub fn velocity_kmph(&self) -> Result<f64, MalformedRecordError> {
        let raw = &self.approach()?.relative_velocity.kilometers_per_hour;
        parse_numeric(raw).ok_or_else(|| MalformedRecordError {
            object: self.name.clone(),
            field: "relative_velocity.kilometers_per_hour",
        })
    }

    /// Miss distance in km, parsed from the feed's string field.
    pub fn miss_distance_km(&self) -> Result<f64, MalformedRecordError> {
        let raw = &self.approach()?.miss_distance.kilometers;
        parse_numeric(raw).ok_or_else(|| MalformedRecordError {
            object: self.name.clone(),
            field: "miss_distance.kilometers",
        })
    }

    pub fn max_diameter_km(&self) -> f64 {
        self.estimated_diameter.kilometers.estimated_diameter_max
    }
}

/// Parses a feed numeric string, rejecting non-finite values ("NaN" and
/// "inf" parse successfully as f64 but must not enter the accumulators).
fn parse_numeric(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(json: &str) -> NeoRecord {
        serde_json::from_str(json).unwrap()
    }

    const FULL_RECORD: &str = r#"{
        "name": "(2015 RC)",
        "close_approach_data": [{
            "relative_velocity": { "kilometers_per_hour": "70568.52" },
            "miss_distance": { "kilometers": "4027962.7" }
        }],
        "estimated_diameter": {
            "kilometers": {
                "estimated_diameter_min": 0.013,
                "estimated_diameter_max": 0.03
            }
        }
    }"#;

    #[test]
    fn test_velocity_and_distance_parse() {
        let r = record(FULL_RECORD);
        assert_eq!(r.velocity_kmph().unwrap(), 70568.52);
        assert_eq!(r.miss_distance_km().unwrap(), 4027962.7);
        assert_eq!(r.max_diameter_km(), 0.03);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let with_extras = FULL_RECORD.replacen(
            "\"name\"",
            "\"id\": \"3727181\", \"is_potentially_hazardous_asteroid\": false, \"name\"",
            1,
        );
        let r = record(&with_extras);
        assert_eq!(r.name, "(2015 RC)");
    }

    #[test]
    fn test_missing_close_approach_entry() {
        let r = record(
            r#"{
                "name": "(2020 XX)",
                "close_approach_data": [],
                "estimated_diameter": {
                    "kilometers": {
                        "estimated_diameter_min": 0.1,
                        "estimated_diameter_max": 0.2
                    }
                }
            }"#,
        );
        let err = r.velocity_kmph().unwrap_err();
        assert_eq!(err.object, "(2020 XX)");
        assert_eq!(err.field, "close_approach_data");
    }

    #[test]
    fn test_non_numeric_velocity_fails() {
        let bad = FULL_RECORD.replace("70568.52", "not-a-number");
        let err = record(&bad).velocity_kmph().unwrap_err();
        assert_eq!(err.field, "relative_velocity.kilometers_per_hour");
    }

    #[test]
    fn test_nan_text_is_rejected_not_propagated() {
        let bad = FULL_RECORD.replace("4027962.7", "NaN");
        let err = record(&bad).miss_distance_km().unwrap_err();
        assert_eq!(err.field, "miss_distance.kilometers");
    }

    #[test]
    fn test_parse_numeric_accepts_surrounding_whitespace() {
        assert_eq!(parse_numeric(" 12.5 "), Some(12.5));
        assert_eq!(parse_numeric("inf"), None);
        assert_eq!(parse_numeric(""), None);
    }
}
