// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! FIT file loading.
//!
//! Only `record` messages are read. Positions are stored in the file as
//! semicircles and distances as meters; both are converted here.

use std::fs::File;
use std::path::{Path, PathBuf};

use chrono::Utc;
use fitparser::profile::MesgNum;
use fitparser::{FitDataRecord, Value};

use crate::error::{ReportError, Result};
use crate::models::{Coordinate, Reading, ReadingTrack};

const SEMICIRCLES_TO_DEGREES: f64 = 180.0 / 2_147_483_648.0;

/// Location of an activity's FIT file under the GarminDB data root.
pub fn activity_fit_path(health_data_dir: &Path, activity_id: &str) -> PathBuf {
    health_data_dir
        .join("FitFiles")
        .join("Activities")
        .join(format!("{}_ACTIVITY.fit", activity_id))
}

/// Parse a FIT file into a timestamp-ordered track.
pub fn load_track(path: &Path) -> Result<ReadingTrack> {
    let mut file = File::open(path)
        .map_err(|e| ReportError::FitFile(format!("{}: {}", path.display(), e)))?;
    let records = fitparser::from_reader(&mut file)
        .map_err(|e| ReportError::FitFile(format!("{}: {}", path.display(), e)))?;

    let readings: Vec<Reading> = records.iter().filter_map(reading_from_record).collect();
    tracing::info!(
        path = %path.display(),
        messages = records.len(),
        readings = readings.len(),
        "Loaded FIT file"
    );
    Ok(ReadingTrack::new(readings))
}

/// Convert a `record` message. Other messages and records without a
/// timestamp yield `None`.
pub fn reading_from_record(record: &FitDataRecord) -> Option<Reading> {
    if record.kind() != MesgNum::Record {
        return None;
    }
    reading_from_fields(
        record
            .fields()
            .iter()
            .map(|f| (f.name(), f.value(), f.units())),
    )
}

/// Build a reading from `(name, value, units)` triples.
pub fn reading_from_fields<'a>(
    fields: impl IntoIterator<Item = (&'a str, &'a Value, &'a str)>,
) -> Option<Reading> {
    let mut timestamp = None;
    let mut lat = None;
    let mut lon = None;
    let mut distance_km = None;
    let mut heart_rate = None;
    let mut speed_kmh = None;
    let mut altitude_m = None;

    for (name, value, units) in fields {
        match name {
            "timestamp" => {
                if let Value::Timestamp(ts) = value {
                    timestamp = Some(ts.with_timezone(&Utc));
                }
            }
            "position_lat" => lat = position_degrees(value, units),
            "position_long" => lon = position_degrees(value, units),
            "distance" => distance_km = fit_value_to_f64(value).map(|m| to_km(m, units)),
            "heart_rate" => heart_rate = fit_value_to_f64(value).map(|v| v as u8),
            // enhanced_* wins over the 16-bit field when both are present
            "enhanced_speed" => speed_kmh = fit_value_to_f64(value).map(|v| v * 3.6),
            "speed" if speed_kmh.is_none() => speed_kmh = fit_value_to_f64(value).map(|v| v * 3.6),
            "enhanced_altitude" => altitude_m = fit_value_to_f64(value),
            "altitude" if altitude_m.is_none() => altitude_m = fit_value_to_f64(value),
            _ => {}
        }
    }

    Some(Reading {
        timestamp: timestamp?,
        position: Coordinate::from_parts(lat, lon),
        distance_km,
        heart_rate,
        speed_kmh,
        altitude_m,
    })
}

fn position_degrees(value: &Value, units: &str) -> Option<f64> {
    let raw = fit_value_to_f64(value)?;
    if units == "semicircles" {
        Some(raw * SEMICIRCLES_TO_DEGREES)
    } else {
        Some(raw)
    }
}

fn to_km(value: f64, units: &str) -> f64 {
    match units {
        "km" => value,
        _ => value / 1000.0,
    }
}

fn fit_value_to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Float32(v) => Some(*v as f64),
        Value::Float64(v) => Some(*v),
        Value::SInt8(v) => Some(*v as f64),
        Value::SInt16(v) => Some(*v as f64),
        Value::SInt32(v) => Some(*v as f64),
        Value::SInt64(v) => Some(*v as f64),
        Value::UInt8(v) => Some(*v as f64),
        Value::UInt16(v) => Some(*v as f64),
        Value::UInt32(v) => Some(*v as f64),
        Value::UInt64(v) => Some(*v as f64),
        Value::Array(values) => values.iter().find_map(fit_value_to_f64),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn ts() -> Value {
        Value::Timestamp(Local.timestamp_opt(1_700_000_000, 0).unwrap())
    }

    #[test]
    fn test_activity_fit_path() {
        let path = activity_fit_path(Path::new("/home/me/HealthData"), "12345");
        assert_eq!(
            path,
            PathBuf::from("/home/me/HealthData/FitFiles/Activities/12345_ACTIVITY.fit")
        );
    }

    #[test]
    fn test_reading_converts_units() {
        let timestamp = ts();
        // 2^30 semicircles is 90 degrees
        let lat = Value::SInt32(1 << 30);
        let lon = Value::SInt32(-(1 << 29));
        let distance = Value::Float64(1523.0);
        let speed = Value::Float64(2.5);
        let hr = Value::UInt8(151);

        let reading = reading_from_fields(vec![
            ("timestamp", &timestamp, "s"),
            ("position_lat", &lat, "semicircles"),
            ("position_long", &lon, "semicircles"),
            ("distance", &distance, "m"),
            ("enhanced_speed", &speed, "m/s"),
            ("heart_rate", &hr, "bpm"),
        ])
        .unwrap();

        assert_eq!(reading.timestamp.timestamp(), 1_700_000_000);
        assert_eq!(reading.position, Some(Coordinate::new(90.0, -45.0)));
        assert_eq!(reading.distance_km, Some(1.523));
        assert_eq!(reading.speed_kmh, Some(9.0));
        assert_eq!(reading.heart_rate, Some(151));
    }

    #[test]
    fn test_reading_without_longitude_has_no_position() {
        let timestamp = ts();
        let lat = Value::SInt32(1 << 30);
        let reading = reading_from_fields(vec![
            ("timestamp", &timestamp, "s"),
            ("position_lat", &lat, "semicircles"),
        ])
        .unwrap();
        assert_eq!(reading.position, None);
    }

    #[test]
    fn test_reading_without_timestamp_is_dropped() {
        let distance = Value::Float64(10.0);
        assert!(reading_from_fields(vec![("distance", &distance, "m")]).is_none());
    }

    #[test]
    fn test_load_missing_file_is_fit_error() {
        let err = load_track(Path::new("/nonexistent/1_ACTIVITY.fit")).unwrap_err();
        assert!(matches!(err, ReportError::FitFile(_)));
    }
}
