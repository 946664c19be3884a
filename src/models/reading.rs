// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Per-second sensor readings from an activity's FIT file.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Coordinate;

/// One timestamped sample of a FIT `record` message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub timestamp: DateTime<Utc>,
    /// Position in degrees, present only when both lat and long were recorded
    pub position: Option<Coordinate>,
    /// Cumulative distance from the start in kilometers
    pub distance_km: Option<f64>,
    /// Heart rate (bpm)
    pub heart_rate: Option<u8>,
    /// Instantaneous speed in km/h
    pub speed_kmh: Option<f64>,
    /// Altitude in meters
    pub altitude_m: Option<f64>,
}

/// Readings of one activity, ordered by timestamp.
#[derive(Debug, Clone, Default)]
pub struct ReadingTrack {
    readings: Vec<Reading>,
}

impl ReadingTrack {
    /// Build a track, sorting by timestamp. Ties keep file order.
    pub fn new(mut readings: Vec<Reading>) -> Self {
        readings.sort_by_key(|r| r.timestamp);
        Self { readings }
    }

    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Readings that carry both coordinates.
    pub fn positioned(&self) -> impl Iterator<Item = (&Reading, Coordinate)> + '_ {
        self.readings
            .iter()
            .filter_map(|r| r.position.map(|p| (r, p)))
    }

    /// Position of the last positioned reading whose cumulative distance is
    /// at most `km`. Readings without a distance never qualify.
    pub fn last_position_within(&self, km: f64) -> Option<Coordinate> {
        self.positioned()
            .filter(|(r, _)| r.distance_km.is_some_and(|d| d <= km))
            .map(|(_, p)| p)
            .last()
    }
}
