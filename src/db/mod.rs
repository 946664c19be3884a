//! Database layer (GarminDB SQLite).

pub mod sqlite;

pub use sqlite::{ActivityDb, ActivitySummary};

/// Table names as constants.
pub mod tables {
    pub const ACTIVITIES: &str = "activities";
}
