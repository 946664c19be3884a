// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Running activity model as read from the activities database.

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::HrZoneTimes;

/// A WGS84 position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Build a coordinate only when both halves are present.
    pub fn from_parts(lat: Option<f64>, lon: Option<f64>) -> Option<Self> {
        Some(Self::new(lat?, lon?))
    }
}

impl From<Coordinate> for geo::Point<f64> {
    fn from(c: Coordinate) -> Self {
        geo::Point::new(c.lon, c.lat)
    }
}

/// Read-only view of one recorded activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// GarminDB activity ID (also the FIT file stem)
    pub activity_id: String,
    /// Activity name/title
    pub name: String,
    /// Distance in kilometers
    pub distance_km: f64,
    /// Local start time
    pub start_time: NaiveDateTime,
    /// Local stop time
    pub stop_time: NaiveDateTime,
    /// Time spent moving
    pub moving_time: NaiveTime,
    /// Average heart rate (bpm)
    pub avg_hr: Option<u16>,
    /// Maximum heart rate (bpm)
    pub max_hr: Option<u16>,
    /// Average speed in km/h
    pub avg_speed_kmh: f64,
    pub start: Option<Coordinate>,
    pub stop: Option<Coordinate>,
    /// Time spent in each of the five heart-rate zones
    pub hr_zones: HrZoneTimes,
    /// Aerobic training effect (0.0 - 5.0)
    pub training_effect: Option<f64>,
    /// Anaerobic training effect (0.0 - 5.0)
    pub anaerobic_training_effect: Option<f64>,
}
