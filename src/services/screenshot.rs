// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Rasterize a rendered map page with a headless browser.
//!
//! Talks to a WebDriver server (geckodriver by default). The browser session
//! is always closed, also when loading or capturing fails.

use std::path::{Path, PathBuf};
use std::time::Duration;

use thirtyfour::prelude::*;

use crate::error::{ReportError, Result};

/// Fixed capture parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenshotOptions {
    pub html_path: PathBuf,
    pub output_path: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Time given to the page to fetch tiles before capturing
    pub render_wait: Duration,
}

impl Default for ScreenshotOptions {
    fn default() -> Self {
        Self {
            html_path: PathBuf::from("test.html"),
            output_path: PathBuf::from("test.png"),
            width: 1200,
            height: 700,
            render_wait: Duration::from_secs(12),
        }
    }
}

impl ScreenshotOptions {
    /// Default frame and wait for the given input/output files.
    pub fn for_files(html_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            html_path: html_path.into(),
            output_path: output_path.into(),
            ..Self::default()
        }
    }
}

/// WebDriver-backed screenshot taker.
#[derive(Debug, Clone)]
pub struct Screenshotter {
    webdriver_url: String,
}

impl Screenshotter {
    pub fn new(webdriver_url: impl Into<String>) -> Self {
        Self {
            webdriver_url: webdriver_url.into(),
        }
    }

    /// Open a headless Firefox session, capture the page, close the session.
    pub async fn capture(&self, options: &ScreenshotOptions) -> Result<()> {
        let page_url = file_url(&options.html_path)?;

        let mut caps = DesiredCapabilities::firefox();
        caps.set_headless()?;

        tracing::info!(webdriver = %self.webdriver_url, "Starting WebDriver session");
        let driver = WebDriver::new(&self.webdriver_url, caps).await?;

        let outcome = capture_page(&driver, &page_url, options).await;
        let closed = driver.quit().await;
        tracing::debug!("WebDriver session closed");

        // A capture failure is more useful to report than a failed quit.
        outcome?;
        closed?;

        tracing::info!(path = %options.output_path.display(), "Screenshot written");
        Ok(())
    }
}

async fn capture_page(
    driver: &WebDriver,
    page_url: &str,
    options: &ScreenshotOptions,
) -> WebDriverResult<()> {
    driver
        .set_window_rect(0, 0, options.width, options.height)
        .await?;
    driver.goto(page_url).await?;
    tokio::time::sleep(options.render_wait).await;
    driver.screenshot(&options.output_path).await
}

/// `file://` URL for a local page, resolved against the working directory.
pub fn file_url(path: &Path) -> Result<String> {
    let absolute = std::path::absolute(path)?;
    url::Url::from_file_path(&absolute)
        .map(String::from)
        .map_err(|_| ReportError::InvalidField {
            field: "html_path",
            value: absolute.display().to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ScreenshotOptions::default();
        assert_eq!(options.html_path, PathBuf::from("test.html"));
        assert_eq!(options.output_path, PathBuf::from("test.png"));
        assert_eq!((options.width, options.height), (1200, 700));
        assert_eq!(options.render_wait, Duration::from_secs(12));
    }

    #[test]
    fn test_file_url_is_absolute() {
        let url = file_url(Path::new("test.html")).unwrap();
        assert!(url.starts_with("file:///"), "{}", url);
        assert!(url.ends_with("/test.html"), "{}", url);
    }
}
