// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Time-in-zone bar chart.

use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::error::MetricsError;
use crate::models::{HrZone, HrZoneTimes};
use crate::services::zones::zone_percentages;

const CHART_SIZE: (u32, u32) = (640, 480);

/// Bar colors for zones 1 to 5: grey, green, yellow, orange, red.
pub const ZONE_COLORS: [RGBColor; 5] = [
    RGBColor(128, 128, 128),
    RGBColor(0, 128, 0),
    RGBColor(255, 255, 0),
    RGBColor(255, 165, 0),
    RGBColor(255, 0, 0),
];

/// Percentage of time per heart-rate zone, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneChart {
    percentages: [f64; 5],
}

impl ZoneChart {
    pub fn from_zones(zones: &HrZoneTimes) -> Result<Self, MetricsError> {
        Ok(Self {
            percentages: zone_percentages(zones)?,
        })
    }

    pub fn percentages(&self) -> &[f64; 5] {
        &self.percentages
    }

    /// Bar labels, two decimals.
    pub fn labels(&self) -> [String; 5] {
        self.percentages.map(|p| format!("{:.2}", p))
    }

    /// Render as an SVG document.
    pub fn render_svg(&self) -> Result<String, ChartError> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
            self.draw(&root)?;
        }
        Ok(svg)
    }

    /// Render and write an SVG file.
    pub fn save_svg(&self, path: &Path) -> Result<(), ChartError> {
        let svg = self.render_svg()?;
        std::fs::write(path, svg).map_err(|e| ChartError::Io(e.to_string()))?;
        tracing::info!(path = %path.display(), "Zone chart written");
        Ok(())
    }

    fn draw<DB>(&self, root: &DrawingArea<DB, plotters::coord::Shift>) -> Result<(), ChartError>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        root.fill(&WHITE).map_err(render_error)?;

        let top = self
            .percentages
            .iter()
            .copied()
            .fold(0.0_f64, f64::max)
            .max(1.0)
            * 1.1;

        let mut chart = ChartBuilder::on(root)
            .margin(20)
            .caption("Time in heart-rate zone (%)", ("sans-serif", 20))
            .x_label_area_size(35)
            .y_label_area_size(45)
            // 0..4 is five discrete values, one segment per zone
            .build_cartesian_2d((0u32..4u32).into_segmented(), 0.0..top)
            .map_err(render_error)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(5)
            .x_label_formatter(&|v| match v {
                SegmentValue::CenterOf(i) => format!("Zone {}", i + 1),
                _ => String::new(),
            })
            .y_label_formatter(&|v| format!("{:.0}", v))
            .draw()
            .map_err(render_error)?;

        chart
            .draw_series(HrZone::ALL.iter().map(|zone| {
                let i = zone.index() as u32;
                let right = if i + 1 < HrZone::ALL.len() as u32 {
                    SegmentValue::Exact(i + 1)
                } else {
                    SegmentValue::Last
                };
                let mut bar = Rectangle::new(
                    [
                        (SegmentValue::Exact(i), 0.0),
                        (right, self.percentages[zone.index()]),
                    ],
                    ZONE_COLORS[zone.index()].filled(),
                );
                bar.set_margin(0, 0, 1, 1);
                bar
            }))
            .map_err(render_error)?;

        let label_style = ("sans-serif", 15)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Center));
        let labels = self.labels();
        chart
            .draw_series(HrZone::ALL.iter().map(|zone| {
                let pct = self.percentages[zone.index()];
                Text::new(
                    labels[zone.index()].clone(),
                    (SegmentValue::CenterOf(zone.index() as u32), pct / 2.0),
                    label_style.clone(),
                )
            }))
            .map_err(render_error)?;

        root.present().map_err(render_error)?;
        Ok(())
    }
}

fn render_error<E: std::fmt::Display>(err: E) -> ChartError {
    ChartError::Render(err.to_string())
}

/// Errors from chart rendering.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChartError {
    #[error("Failed to render chart: {0}")]
    Render(String),

    #[error("Failed to write chart: {0}")]
    Io(String),
}
