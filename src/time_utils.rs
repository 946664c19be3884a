// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time parsing and number formatting.

use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike};

/// Parse a SQLite `DATETIME` column (`2024-03-02 07:15:00.000000`).
pub fn parse_db_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()
}

/// Parse a SQLite `TIME` column (`00:42:17.250000`).
pub fn parse_db_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M:%S%.f").ok()
}

/// Elapsed time encoded as a time of day, measured from midnight.
pub fn time_as_duration(time: NaiveTime) -> Duration {
    Duration::seconds(i64::from(time.num_seconds_from_midnight()))
        + Duration::nanoseconds(i64::from(time.nanosecond()))
}

/// Format a number with two decimals and `,` thousands separators.
pub fn format_thousands_2dp(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((&formatted, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // -0.001 rounds to 0.00 and prints without a sign
    let sign = if value < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac_part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_db_datetime_with_fraction() {
        let dt = parse_db_datetime("2024-03-02 07:15:00.000000").unwrap();
        assert_eq!(dt.format("%H:%M").to_string(), "07:15");
    }

    #[test]
    fn test_parse_db_datetime_without_fraction() {
        assert!(parse_db_datetime("2024-03-02 07:15:00").is_some());
        assert!(parse_db_datetime("2024-03-02T07:15:00").is_some());
        assert!(parse_db_datetime("yesterday").is_none());
    }

    #[test]
    fn test_parse_db_time() {
        let t = parse_db_time("00:42:17.250000").unwrap();
        assert_eq!(t.format("%H:%M:%S").to_string(), "00:42:17");
        assert_eq!(t.nanosecond(), 250_000_000);
        assert!(parse_db_time("00:05:00").is_some());
    }

    #[test]
    fn test_time_as_duration_keeps_subseconds() {
        let t = NaiveTime::from_hms_milli_opt(1, 2, 3, 500).unwrap();
        assert_eq!(time_as_duration(t).num_milliseconds(), 3_723_500);
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands_2dp(5.0), "5.00");
        assert_eq!(format_thousands_2dp(10.456), "10.46");
        assert_eq!(format_thousands_2dp(1234.5), "1,234.50");
        assert_eq!(format_thousands_2dp(1234567.891), "1,234,567.89");
        assert_eq!(format_thousands_2dp(-1234.5), "-1,234.50");
        assert_eq!(format_thousands_2dp(-0.001), "0.00");
    }
}
