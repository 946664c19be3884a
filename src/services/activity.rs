// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Report building for one running activity.
//!
//! Handles the core workflow:
//! 1. Fetch the activity from the activities database
//! 2. Format the summary table
//! 3. Load the FIT file and build the route map
//! 4. Compute time-in-zone and build the bar chart

use std::path::{Path, PathBuf};

use crate::db::ActivityDb;
use crate::error::{MetricsError, ReportError, Result};
use crate::models::{Activity, ReadingTrack};
use crate::services::fit_file::{activity_fit_path, load_track};
use crate::services::markdown::MarkdownTable;
use crate::services::route_map::{MapError, MapOptions, RouteMap};
use crate::services::summary::summary_table;
use crate::services::zone_chart::ZoneChart;

/// A running activity and where its raw sensor data lives.
#[derive(Debug, Clone)]
pub struct RunningActivity {
    activity: Activity,
    health_data_dir: PathBuf,
}

impl RunningActivity {
    pub fn new(activity: Activity, health_data_dir: impl Into<PathBuf>) -> Self {
        Self {
            activity,
            health_data_dir: health_data_dir.into(),
        }
    }

    /// Fetch an activity by ID.
    pub async fn fetch(
        db: &ActivityDb,
        activity_id: &str,
        health_data_dir: &Path,
    ) -> Result<Self> {
        tracing::info!(activity_id, "Loading activity");
        let activity = db
            .get_activity(activity_id)
            .await?
            .ok_or_else(|| ReportError::NotFound(activity_id.to_string()))?;
        Ok(Self::new(activity, health_data_dir))
    }

    pub fn activity(&self) -> &Activity {
        &self.activity
    }

    pub fn summary_table(&self) -> std::result::Result<MarkdownTable, MetricsError> {
        summary_table(&self.activity)
    }

    /// `<health>/FitFiles/Activities/<id>_ACTIVITY.fit`
    pub fn fit_path(&self) -> PathBuf {
        activity_fit_path(&self.health_data_dir, &self.activity.activity_id)
    }

    pub fn load_track(&self) -> Result<ReadingTrack> {
        load_track(&self.fit_path())
    }

    /// Route map from an already loaded track.
    pub fn route_map_from_track(
        &self,
        track: &ReadingTrack,
        options: MapOptions,
    ) -> std::result::Result<RouteMap, MapError> {
        RouteMap::build(&self.activity, track, options)
    }

    /// Load the FIT file and build the route map.
    pub fn route_map(&self, options: MapOptions) -> Result<RouteMap> {
        let track = self.load_track()?;
        Ok(self.route_map_from_track(&track, options)?)
    }

    pub fn zone_chart(&self) -> std::result::Result<ZoneChart, MetricsError> {
        ZoneChart::from_zones(&self.activity.hr_zones)
    }
}
