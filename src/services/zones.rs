// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Time-in-zone percentages.
//!
//! Durations keep their sub-second part all the way through, so the five
//! percentages of an activity always sum to 100.

use chrono::{Duration, NaiveTime};

use crate::error::MetricsError;
use crate::models::{HrZone, HrZoneTimes};
use crate::time_utils::time_as_duration;

/// Sum of the time spent in all five zones.
pub fn total_zone_time(zones: &HrZoneTimes) -> Duration {
    zones
        .as_array()
        .iter()
        .map(|t| time_as_duration(*t))
        .fold(Duration::zero(), |acc, d| acc + d)
}

/// Share of `time` in the total zone time, in percent.
pub fn percentage_of_total(zones: &HrZoneTimes, time: NaiveTime) -> Result<f64, MetricsError> {
    let total = duration_secs(total_zone_time(zones));
    if total <= 0.0 {
        return Err(MetricsError::EmptyZoneTotal);
    }
    Ok(100.0 * duration_secs(time_as_duration(time)) / total)
}

/// Share of one zone in the total zone time, in percent.
pub fn zone_percentage(zones: &HrZoneTimes, zone: HrZone) -> Result<f64, MetricsError> {
    percentage_of_total(zones, zones.get(zone))
}

/// Percentages for zones 1 to 5, in order.
pub fn zone_percentages(zones: &HrZoneTimes) -> Result<[f64; 5], MetricsError> {
    let mut out = [0.0; 5];
    for zone in HrZone::ALL {
        out[zone.index()] = zone_percentage(zones, zone)?;
    }
    Ok(out)
}

fn duration_secs(d: Duration) -> f64 {
    // Nanosecond precision overflows only past ~292 years.
    d.num_nanoseconds()
        .map(|ns| ns as f64 / 1e9)
        .unwrap_or_else(|| d.num_seconds() as f64)
}
