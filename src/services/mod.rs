// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - report building layer.

pub mod activity;
pub mod fit_file;
pub mod markdown;
pub mod pace;
pub mod route_map;
pub mod screenshot;
pub mod summary;
pub mod zone_chart;
pub mod zones;

pub use activity::RunningActivity;
pub use markdown::{Align, MarkdownTable};
pub use pace::{pace_min_per_km, Pace};
pub use route_map::{MapError, MapOptions, RouteMap, TileStyle};
pub use screenshot::{ScreenshotOptions, Screenshotter};
pub use zone_chart::{ChartError, ZoneChart};
pub use zones::{percentage_of_total, total_zone_time, zone_percentage, zone_percentages};
