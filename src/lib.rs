// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Garmin running reports: summary tables, route maps and zone charts
//!
//! This crate reads running activities from a GarminDB activities database
//! and their FIT files, and renders them as markdown, Leaflet HTML, GeoJSON
//! and SVG.

pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;
