// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod reading;
pub mod zones;

pub use activity::{Activity, Coordinate};
pub use reading::{Reading, ReadingTrack};
pub use zones::{HrZone, HrZoneTimes};
