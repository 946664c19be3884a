// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Speed to running pace conversion.

use std::fmt;

use crate::error::MetricsError;

/// Running pace, stored as whole seconds per kilometer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pace {
    seconds_per_km: u64,
}

impl Pace {
    /// Invert a speed in km/h. Rounds to the nearest second so that a
    /// remainder of 59.5s or more carries into the next minute.
    pub fn from_speed_kmh(speed_kmh: f64) -> Result<Self, MetricsError> {
        if !speed_kmh.is_finite() || speed_kmh <= 0.0 {
            return Err(MetricsError::NonPositiveSpeed(speed_kmh));
        }
        let seconds = (3600.0 / speed_kmh).round();
        // u64::MAX rounds up to 2^64 as f64, so `>=` keeps the cast exact
        if seconds >= u64::MAX as f64 {
            return Err(MetricsError::SpeedTooLow(speed_kmh));
        }
        Ok(Self {
            seconds_per_km: seconds as u64,
        })
    }

    pub fn seconds_per_km(&self) -> u64 {
        self.seconds_per_km
    }

    pub fn minutes(&self) -> u64 {
        self.seconds_per_km / 60
    }

    pub fn seconds(&self) -> u64 {
        self.seconds_per_km % 60
    }
}

impl fmt::Display for Pace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02} min/km", self.minutes(), self.seconds())
    }
}

/// Format a speed in km/h as `m:ss min/km`.
pub fn pace_min_per_km(speed_kmh: f64) -> Result<String, MetricsError> {
    Pace::from_speed_kmh(speed_kmh).map(|p| p.to_string())
}
