// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Command-line interface.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueHint};

use crate::config::Config;
use crate::db::ActivityDb;
use crate::services::markdown::{Align, MarkdownTable};
use crate::services::{MapOptions, RunningActivity, ScreenshotOptions, Screenshotter, TileStyle};
use crate::time_utils::format_thousands_2dp;

#[derive(Parser, Debug)]
#[command(author, version, about = "Reports for running activities in a GarminDB database", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the most recent activities
    List {
        /// GarminDB sport name
        #[arg(long, default_value = "running")]
        sport: String,

        #[arg(long, default_value_t = 10)]
        limit: u32,
    },

    /// Print the markdown summary table of an activity
    Summary { activity_id: String },

    /// Write the route map of an activity as HTML
    Map {
        activity_id: String,

        /// watercolor, openstreetmap, terrain or toner
        #[arg(long, default_value = "watercolor")]
        tiles: TileStyle,

        /// Prepare the page for rasterizing by a headless browser
        #[arg(long)]
        static_export: bool,

        #[arg(short, long, default_value = "map.html", value_hint = ValueHint::FilePath)]
        output: PathBuf,

        /// Also export path and markers as GeoJSON
        #[arg(long, value_hint = ValueHint::FilePath)]
        geojson: Option<PathBuf>,
    },

    /// Write the time-in-zone bar chart of an activity as SVG
    Zones {
        activity_id: String,

        #[arg(short, long, default_value = "zones.svg", value_hint = ValueHint::FilePath)]
        output: PathBuf,
    },

    /// Rasterize a rendered map page to PNG via WebDriver
    Screenshot {
        #[arg(long, default_value = "test.html", value_hint = ValueHint::FilePath)]
        html: PathBuf,

        #[arg(short, long, default_value = "test.png", value_hint = ValueHint::FilePath)]
        output: PathBuf,
    },

    /// Write summary, map and zone chart into one directory
    Report {
        activity_id: String,

        #[arg(long, default_value = ".", value_hint = ValueHint::DirPath)]
        out_dir: PathBuf,

        #[arg(long, default_value = "watercolor")]
        tiles: TileStyle,

        /// Also rasterize the map to map.png
        #[arg(long)]
        png: bool,
    },
}

/// Execute a parsed command.
pub async fn run(cli: Cli, config: &Config) -> Result<()> {
    match cli.command {
        Command::List { sport, limit } => {
            let db = open_db(config).await?;
            let activities = db.list_activities(&sport, limit).await?;
            let mut table = MarkdownTable::new(
                ["id", "start", "name", "distance"],
                &[Align::Left, Align::Left, Align::Left, Align::Right],
            );
            for a in activities {
                table.push_row([
                    a.activity_id,
                    a.start_time.unwrap_or_default(),
                    a.name.unwrap_or_default(),
                    a.distance
                        .map(|d| format!("{} km", format_thousands_2dp(d)))
                        .unwrap_or_default(),
                ]);
            }
            print!("{}", table);
        }

        Command::Summary { activity_id } => {
            let activity = fetch(config, &activity_id).await?;
            print!("{}", activity.summary_table()?);
        }

        Command::Map {
            activity_id,
            tiles,
            static_export,
            output,
            geojson,
        } => {
            let activity = fetch(config, &activity_id).await?;
            let map = activity.route_map(MapOptions {
                tiles,
                static_export,
            })?;
            write_file(&output, map.to_html()?)?;
            if let Some(path) = geojson {
                write_file(&path, map.to_geojson().to_string())?;
            }
        }

        Command::Zones {
            activity_id,
            output,
        } => {
            let activity = fetch(config, &activity_id).await?;
            activity.zone_chart()?.save_svg(&output)?;
        }

        Command::Screenshot { html, output } => {
            Screenshotter::new(&config.webdriver_url)
                .capture(&ScreenshotOptions::for_files(html, output))
                .await?;
        }

        Command::Report {
            activity_id,
            out_dir,
            tiles,
            png,
        } => {
            fs::create_dir_all(&out_dir)
                .with_context(|| format!("failed to create {}", out_dir.display()))?;
            let activity = fetch(config, &activity_id).await?;

            write_file(
                &out_dir.join("summary.md"),
                activity.summary_table()?.to_string(),
            )?;

            let map_path = out_dir.join("map.html");
            let map = activity.route_map(MapOptions {
                tiles,
                static_export: png,
            })?;
            write_file(&map_path, map.to_html()?)?;

            activity.zone_chart()?.save_svg(&out_dir.join("zones.svg"))?;

            if png {
                Screenshotter::new(&config.webdriver_url)
                    .capture(&ScreenshotOptions::for_files(
                        &map_path,
                        out_dir.join("map.png"),
                    ))
                    .await?;
            }
            tracing::info!(activity_id = %activity_id, out_dir = %out_dir.display(), "Report written");
        }
    }
    Ok(())
}

async fn open_db(config: &Config) -> Result<ActivityDb> {
    Ok(ActivityDb::open(&config.activities_db).await?)
}

async fn fetch(config: &Config, activity_id: &str) -> Result<RunningActivity> {
    let db = open_db(config).await?;
    Ok(RunningActivity::fetch(&db, activity_id, &config.health_data_dir).await?)
}

fn write_file(path: &Path, contents: String) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "Wrote file");
    Ok(())
}
