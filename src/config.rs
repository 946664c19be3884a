//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honored for local setups.

use std::env;
use std::path::PathBuf;

/// Default geckodriver endpoint.
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:4444";

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// GarminDB data root (holds `DBs/` and `FitFiles/`)
    pub health_data_dir: PathBuf,
    /// SQLite activities database
    pub activities_db: PathBuf,
    /// WebDriver endpoint used for map screenshots
    pub webdriver_url: String,
    /// Log line format
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let health_data_dir = match env::var("HEALTH_DATA_DIR") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => dirs::home_dir()
                .ok_or(ConfigError::Missing("HEALTH_DATA_DIR"))?
                .join("HealthData"),
        };

        let activities_db = env::var("GARMIN_ACTIVITIES_DB")
            .map(PathBuf::from)
            .unwrap_or_else(|_| Self::default_activities_db(&health_data_dir));

        let log_format = match env::var("LOG_FORMAT") {
            Ok(value) => parse_log_format(&value)?,
            Err(_) => LogFormat::Text,
        };

        Ok(Self {
            activities_db,
            webdriver_url: env::var("WEBDRIVER_URL")
                .unwrap_or_else(|_| DEFAULT_WEBDRIVER_URL.to_string()),
            health_data_dir,
            log_format,
        })
    }

    /// Config rooted at an explicit data directory, everything else default.
    pub fn with_health_data_dir(health_data_dir: impl Into<PathBuf>) -> Self {
        let health_data_dir = health_data_dir.into();
        Self {
            activities_db: Self::default_activities_db(&health_data_dir),
            health_data_dir,
            webdriver_url: DEFAULT_WEBDRIVER_URL.to_string(),
            log_format: LogFormat::Text,
        }
    }

    fn default_activities_db(health_data_dir: &std::path::Path) -> PathBuf {
        health_data_dir.join("DBs").join("garmin_activities.db")
    }
}

fn parse_log_format(value: &str) -> Result<LogFormat, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "text" => Ok(LogFormat::Text),
        "json" => Ok(LogFormat::Json),
        _ => Err(ConfigError::Invalid {
            name: "LOG_FORMAT",
            value: value.to_string(),
        }),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        env::set_var("HEALTH_DATA_DIR", "/tmp/health");
        env::remove_var("GARMIN_ACTIVITIES_DB");
        env::remove_var("WEBDRIVER_URL");
        env::remove_var("LOG_FORMAT");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.health_data_dir, PathBuf::from("/tmp/health"));
        assert_eq!(
            config.activities_db,
            PathBuf::from("/tmp/health/DBs/garmin_activities.db")
        );
        assert_eq!(config.webdriver_url, DEFAULT_WEBDRIVER_URL);
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_parse_log_format() {
        assert_eq!(parse_log_format("json").unwrap(), LogFormat::Json);
        assert_eq!(parse_log_format(" JSON ").unwrap(), LogFormat::Json);
        assert_eq!(parse_log_format("text").unwrap(), LogFormat::Text);
        assert!(parse_log_format("xml").is_err());
    }

    #[test]
    fn test_with_health_data_dir_defaults() {
        let config = Config::with_health_data_dir("/data");
        assert_eq!(
            config.activities_db,
            PathBuf::from("/data/DBs/garmin_activities.db")
        );
        assert_eq!(config.webdriver_url, DEFAULT_WEBDRIVER_URL);
    }
}
