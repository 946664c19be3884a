// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use garmin_run_report::db::ActivityDb;
use garmin_run_report::models::{Activity, Coordinate, HrZoneTimes, Reading, ReadingTrack};
use sqlx::sqlite::SqlitePoolOptions;

/// Check if a WebDriver server is configured.
#[allow(dead_code)]
pub fn webdriver_available() -> bool {
    std::env::var("WEBDRIVER_URL").is_ok()
}

/// Skip test with message if no WebDriver server is configured.
#[macro_export]
macro_rules! require_webdriver {
    () => {
        if !crate::common::webdriver_available() {
            eprintln!("⚠️  Skipping: WEBDRIVER_URL not set");
            return;
        }
    };
}

#[allow(dead_code)]
pub fn hms(h: u32, m: u32, s: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, s).unwrap()
}

/// A 10.5 km morning run with 10/20/20/0/0 minutes in zones 1-5.
#[allow(dead_code)]
pub fn sample_activity() -> Activity {
    let day = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
    Activity {
        activity_id: "12345678901".to_string(),
        name: "Leiden Running".to_string(),
        distance_km: 10.5,
        start_time: day.and_hms_opt(7, 15, 0).unwrap(),
        stop_time: day.and_hms_opt(8, 10, 30).unwrap(),
        moving_time: hms(0, 52, 30),
        avg_hr: Some(148),
        max_hr: Some(171),
        avg_speed_kmh: 12.0,
        start: Some(Coordinate::new(52.16, 4.49)),
        stop: Some(Coordinate::new(52.17, 4.50)),
        hr_zones: HrZoneTimes::new([
            hms(0, 10, 0),
            hms(0, 20, 0),
            hms(0, 20, 0),
            hms(0, 0, 0),
            hms(0, 0, 0),
        ]),
        training_effect: Some(3.2),
        anaerobic_training_effect: Some(0.8),
    }
}

#[allow(dead_code)]
pub fn reading(secs: i64, position: Option<(f64, f64)>, distance_km: Option<f64>) -> Reading {
    Reading {
        timestamp: Utc.timestamp_opt(1_709_363_700 + secs, 0).unwrap(),
        position: position.map(|(lat, lon)| Coordinate::new(lat, lon)),
        distance_km,
        heart_rate: Some(140),
        speed_kmh: Some(12.0),
        altitude_m: None,
    }
}

/// Straight track heading north-east, one reading every 100 m up to `km`.
#[allow(dead_code)]
pub fn straight_track(km: f64) -> ReadingTrack {
    let steps = (km * 10.0).round() as i64;
    let readings = (0..=steps)
        .map(|i| {
            let d = i as f64 / 10.0;
            reading(
                i * 30,
                Some((52.16 + d * 0.001, 4.49 + d * 0.001)),
                Some(d),
            )
        })
        .collect();
    ReadingTrack::new(readings)
}

/// GarminDB `activities` table (subset of columns used here).
#[allow(dead_code)]
pub const ACTIVITIES_SCHEMA: &str = "CREATE TABLE activities (
    activity_id VARCHAR NOT NULL PRIMARY KEY,
    name VARCHAR,
    sport VARCHAR,
    distance FLOAT,
    start_time DATETIME,
    stop_time DATETIME,
    moving_time TIME,
    avg_hr INTEGER,
    max_hr INTEGER,
    avg_speed FLOAT,
    start_lat FLOAT,
    start_long FLOAT,
    stop_lat FLOAT,
    stop_long FLOAT,
    hrz_1_time TIME,
    hrz_2_time TIME,
    hrz_3_time TIME,
    hrz_4_time TIME,
    hrz_5_time TIME,
    training_effect FLOAT,
    anaerobic_training_effect FLOAT
)";

/// Create an in-memory activities database with the GarminDB schema.
#[allow(dead_code)]
pub async fn test_db() -> (ActivityDb, sqlx::SqlitePool) {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory SQLite");
    sqlx::query(ACTIVITIES_SCHEMA)
        .execute(&pool)
        .await
        .expect("Failed to create activities table");
    (ActivityDb::from_pool(pool.clone()), pool)
}

/// Insert a fully populated running activity.
#[allow(dead_code)]
pub async fn insert_sample_run(pool: &sqlx::SqlitePool, activity_id: &str, start_time: &str) {
    sqlx::query(
        "INSERT INTO activities (activity_id, name, sport, distance, start_time, stop_time, \
         moving_time, avg_hr, max_hr, avg_speed, start_lat, start_long, stop_lat, stop_long, \
         hrz_1_time, hrz_2_time, hrz_3_time, hrz_4_time, hrz_5_time, \
         training_effect, anaerobic_training_effect) \
         VALUES (?, 'Leiden Running', 'running', 10.5, ?, '2024-03-02 08:10:30.000000', \
         '00:52:30.000000', 148, 171, 12.0, 52.16, 4.49, 52.17, 4.5, \
         '00:10:00.000000', '00:20:00.000000', '00:20:00.000000', '00:00:00.000000', NULL, \
         3.2, 0.8)",
    )
    .bind(activity_id)
    .bind(start_time)
    .execute(pool)
    .await
    .expect("Failed to insert activity");
}
