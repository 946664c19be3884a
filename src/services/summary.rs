// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity summary table.

use crate::error::MetricsError;
use crate::models::{Activity, HrZone};
use crate::services::markdown::{Align, MarkdownTable};
use crate::services::pace::pace_min_per_km;
use crate::services::zones::zone_percentages;
use crate::time_utils::format_thousands_2dp;

/// Row labels, in display order.
pub const SUMMARY_LABELS: [&str; 16] = [
    "id",
    "name",
    "distance",
    "aerobic_training_effect",
    "anaerobic_training_effect",
    "start_time",
    "stop_time",
    "moving_time",
    "avg_pace",
    "avg_hr",
    "max_hr",
    "pct_zone_1",
    "pct_zone_2",
    "pct_zone_3",
    "pct_zone_4",
    "pct_zone_5",
];

const MISSING: &str = "n/a";

/// Build the two-column `VARIABLE | VAL` summary of an activity.
pub fn summary_table(activity: &Activity) -> Result<MarkdownTable, MetricsError> {
    let pace = pace_min_per_km(activity.avg_speed_kmh)?;
    let zones = zone_percentages(&activity.hr_zones)?;

    let mut values = vec![
        activity.activity_id.clone(),
        activity.name.clone(),
        format!("{} km", format_thousands_2dp(activity.distance_km)),
        optional(activity.training_effect.map(|v| format!("{:.1}", v))),
        optional(activity.anaerobic_training_effect.map(|v| format!("{:.1}", v))),
        activity.start_time.format("%H:%M").to_string(),
        activity.stop_time.format("%H:%M").to_string(),
        activity.moving_time.format("%H:%M:%S").to_string(),
        pace,
        optional(activity.avg_hr.map(|v| v.to_string())),
        optional(activity.max_hr.map(|v| v.to_string())),
    ];
    values.extend(
        HrZone::ALL
            .iter()
            .map(|z| format!("{:.1}%", zones[z.index()])),
    );

    let mut table = MarkdownTable::new(["VARIABLE", "VAL"], &[Align::Left, Align::Right]);
    for (label, value) in SUMMARY_LABELS.iter().zip(values) {
        table.push_row([label.to_string(), value]);
    }
    Ok(table)
}

fn optional(value: Option<String>) -> String {
    value.unwrap_or_else(|| MISSING.to_string())
}
