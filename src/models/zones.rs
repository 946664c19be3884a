// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Heart-rate zone identifiers and per-zone elapsed time.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// One of the five heart-rate intensity bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HrZone {
    Zone1,
    Zone2,
    Zone3,
    Zone4,
    Zone5,
}

impl HrZone {
    pub const ALL: [HrZone; 5] = [
        HrZone::Zone1,
        HrZone::Zone2,
        HrZone::Zone3,
        HrZone::Zone4,
        HrZone::Zone5,
    ];

    /// Zero-based position (zone 1 is 0).
    pub fn index(self) -> usize {
        match self {
            HrZone::Zone1 => 0,
            HrZone::Zone2 => 1,
            HrZone::Zone3 => 2,
            HrZone::Zone4 => 3,
            HrZone::Zone5 => 4,
        }
    }

    /// One-based zone number as shown to users.
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }
}

/// Elapsed time per zone. Each value is a time of day measured from midnight,
/// which is how the activities database stores durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HrZoneTimes([NaiveTime; 5]);

impl HrZoneTimes {
    pub fn new(times: [NaiveTime; 5]) -> Self {
        Self(times)
    }

    pub fn get(&self, zone: HrZone) -> NaiveTime {
        self.0[zone.index()]
    }

    pub fn as_array(&self) -> &[NaiveTime; 5] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = (HrZone, NaiveTime)> + '_ {
        HrZone::ALL.iter().map(move |z| (*z, self.get(*z)))
    }
}

impl Default for HrZoneTimes {
    fn default() -> Self {
        Self([NaiveTime::MIN; 5])
    }
}
