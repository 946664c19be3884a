// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Read-only access to the GarminDB activities database.
//!
//! GarminDB stores datetimes and durations as text. Rows are fetched into
//! `ActivityRow` with nullable columns, then validated into an `Activity`.

use std::path::Path;

use chrono::NaiveTime;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::db::tables;
use crate::error::{ReportError, Result};
use crate::models::{Activity, Coordinate, HrZoneTimes};
use crate::time_utils::{parse_db_datetime, parse_db_time};

const ACTIVITY_COLUMNS: &str = "activity_id, name, distance, start_time, stop_time, moving_time, \
     avg_hr, max_hr, avg_speed, start_lat, start_long, stop_lat, stop_long, \
     hrz_1_time, hrz_2_time, hrz_3_time, hrz_4_time, hrz_5_time, \
     training_effect, anaerobic_training_effect";

/// Activities database handle.
#[derive(Clone)]
pub struct ActivityDb {
    pool: SqlitePool,
}

impl ActivityDb {
    /// Open an existing database file read-only.
    pub async fn open(path: &Path) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .read_only(true)
            .create_if_missing(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(|e| {
                ReportError::Database(format!("Failed to open {}: {}", path.display(), e))
            })?;

        tracing::info!(path = %path.display(), "Opened activities database");
        Ok(Self { pool })
    }

    /// Wrap an existing pool (tests use an in-memory database).
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get an activity by its GarminDB ID.
    pub async fn get_activity(&self, activity_id: &str) -> Result<Option<Activity>> {
        let sql = format!(
            "SELECT {} FROM {} WHERE activity_id = ?",
            ACTIVITY_COLUMNS,
            tables::ACTIVITIES
        );
        let row: Option<ActivityRow> = sqlx::query_as(&sql)
            .bind(activity_id)
            .fetch_optional(&self.pool)
            .await?;

        tracing::debug!(activity_id, found = row.is_some(), "Fetched activity");
        row.map(Activity::try_from).transpose()
    }

    /// Most recent activities of a sport, newest first.
    pub async fn list_activities(&self, sport: &str, limit: u32) -> Result<Vec<ActivitySummary>> {
        let sql = format!(
            "SELECT activity_id, name, start_time, distance FROM {} \
             WHERE sport = ? ORDER BY start_time DESC LIMIT ?",
            tables::ACTIVITIES
        );
        let rows: Vec<ActivitySummary> = sqlx::query_as(&sql)
            .bind(sport)
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}

/// One line of the activity listing.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ActivitySummary {
    pub activity_id: String,
    pub name: Option<String>,
    pub start_time: Option<String>,
    pub distance: Option<f64>,
}

/// Raw `activities` row; every column may be NULL.
#[derive(Debug, sqlx::FromRow)]
struct ActivityRow {
    activity_id: Option<String>,
    name: Option<String>,
    distance: Option<f64>,
    start_time: Option<String>,
    stop_time: Option<String>,
    moving_time: Option<String>,
    avg_hr: Option<i64>,
    max_hr: Option<i64>,
    avg_speed: Option<f64>,
    start_lat: Option<f64>,
    start_long: Option<f64>,
    stop_lat: Option<f64>,
    stop_long: Option<f64>,
    hrz_1_time: Option<String>,
    hrz_2_time: Option<String>,
    hrz_3_time: Option<String>,
    hrz_4_time: Option<String>,
    hrz_5_time: Option<String>,
    training_effect: Option<f64>,
    anaerobic_training_effect: Option<f64>,
}

impl TryFrom<ActivityRow> for Activity {
    type Error = ReportError;

    fn try_from(row: ActivityRow) -> Result<Self> {
        let hr_zones = HrZoneTimes::new([
            zone_time("hrz_1_time", row.hrz_1_time)?,
            zone_time("hrz_2_time", row.hrz_2_time)?,
            zone_time("hrz_3_time", row.hrz_3_time)?,
            zone_time("hrz_4_time", row.hrz_4_time)?,
            zone_time("hrz_5_time", row.hrz_5_time)?,
        ]);

        Ok(Activity {
            activity_id: required("activity_id", row.activity_id)?,
            name: row.name.unwrap_or_default(),
            distance_km: required("distance", row.distance)?,
            start_time: datetime("start_time", required("start_time", row.start_time)?)?,
            stop_time: datetime("stop_time", required("stop_time", row.stop_time)?)?,
            moving_time: time("moving_time", required("moving_time", row.moving_time)?)?,
            avg_hr: row.avg_hr.and_then(|v| u16::try_from(v).ok()),
            max_hr: row.max_hr.and_then(|v| u16::try_from(v).ok()),
            avg_speed_kmh: required("avg_speed", row.avg_speed)?,
            start: Coordinate::from_parts(row.start_lat, row.start_long),
            stop: Coordinate::from_parts(row.stop_lat, row.stop_long),
            hr_zones,
            training_effect: row.training_effect,
            anaerobic_training_effect: row.anaerobic_training_effect,
        })
    }
}

fn required<T>(field: &'static str, value: Option<T>) -> Result<T> {
    value.ok_or(ReportError::MissingField(field))
}

fn datetime(field: &'static str, value: String) -> Result<chrono::NaiveDateTime> {
    parse_db_datetime(&value).ok_or(ReportError::InvalidField { field, value })
}

fn time(field: &'static str, value: String) -> Result<NaiveTime> {
    parse_db_time(&value).ok_or(ReportError::InvalidField { field, value })
}

/// Zone columns are NULL when the watch recorded no heart rate.
fn zone_time(field: &'static str, value: Option<String>) -> Result<NaiveTime> {
    match value {
        Some(v) => time(field, v),
        None => Ok(NaiveTime::MIN),
    }
}
