// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Garmin running report CLI
//!
//! Renders summaries, route maps and heart-rate zone charts for running
//! activities stored in a GarminDB database.

use clap::Parser;
use garmin_run_report::{
    cli::{self, Cli},
    config::{Config, LogFormat},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration from environment
    let config = Config::from_env()?;
    init_logging(config.log_format);
    tracing::debug!(
        db = %config.activities_db.display(),
        health_data = %config.health_data_dir.display(),
        "Configuration loaded"
    );

    if let Err(err) = cli::run(cli, &config).await {
        tracing::error!(error = %err, "Report generation failed");
        return Err(err);
    }
    Ok(())
}

/// Initialize logging to stderr so stdout stays clean for markdown output.
fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("garmin_run_report=debug,info"));

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .with_current_span(true)
                    .flatten_event(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}
