// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types shared by the report builders.

use crate::config::ConfigError;
use crate::services::route_map::MapError;
use crate::services::zone_chart::ChartError;

/// Domain errors from the pace and heart-rate zone calculations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MetricsError {
    #[error("speed must be positive (got {0} km/h)")]
    NonPositiveSpeed(f64),

    #[error("speed too low to express as a pace (got {0} km/h)")]
    SpeedTooLow(f64),

    #[error("no time recorded in any heart-rate zone")]
    EmptyZoneTotal,
}

/// Top-level error for building a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Activity not found: {0}")]
    NotFound(String),

    #[error("Activity record is missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid value for {field}: {value}")]
    InvalidField { field: &'static str, value: String },

    #[error(transparent)]
    Metrics(#[from] MetricsError),

    #[error(transparent)]
    Map(#[from] MapError),

    #[error(transparent)]
    Chart(#[from] ChartError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(String),

    #[error("FIT file error: {0}")]
    FitFile(String),

    #[error("WebDriver error: {0}")]
    WebDriver(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<sqlx::Error> for ReportError {
    fn from(err: sqlx::Error) -> Self {
        ReportError::Database(err.to_string())
    }
}

impl From<thirtyfour::error::WebDriverError> for ReportError {
    fn from(err: thirtyfour::error::WebDriverError) -> Self {
        ReportError::WebDriver(err.to_string())
    }
}

/// Result type alias for report operations
pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_error_display() {
        let err = MetricsError::NonPositiveSpeed(0.0);
        assert_eq!(err.to_string(), "speed must be positive (got 0 km/h)");

        let err = MetricsError::EmptyZoneTotal;
        assert_eq!(err.to_string(), "no time recorded in any heart-rate zone");
    }

    #[test]
    fn test_report_error_wraps_metrics_transparently() {
        let err: ReportError = MetricsError::EmptyZoneTotal.into();
        assert_eq!(err.to_string(), "no time recorded in any heart-rate zone");
        assert!(matches!(err, ReportError::Metrics(_)));
    }

    #[test]
    fn test_missing_field_names_column() {
        let err = ReportError::MissingField("avg_speed");
        assert_eq!(
            err.to_string(),
            "Activity record is missing required field: avg_speed"
        );
    }
}
