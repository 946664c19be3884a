// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use garmin_run_report::services::zone_chart::ZoneChart;

mod common;
use common::sample_activity;

#[test]
fn test_render_svg_has_bars_and_labels() {
    let chart = ZoneChart::from_zones(&sample_activity().hr_zones).unwrap();
    let svg = chart.render_svg().unwrap();

    assert!(svg.contains("<svg"));
    for label in ["Zone 1", "Zone 5", "20.00", "40.00", "0.00"] {
        assert!(svg.contains(label), "missing {:?}", label);
    }
    // zone 2 bar color
    assert!(svg.contains("#008000"));
}

#[test]
fn test_save_svg_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("zones.svg");

    let chart = ZoneChart::from_zones(&sample_activity().hr_zones).unwrap();
    chart.save_svg(&path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, chart.render_svg().unwrap());
}

#[test]
fn test_save_svg_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("zones.svg");

    let chart = ZoneChart::from_zones(&sample_activity().hr_zones).unwrap();
    assert!(chart.save_svg(&path).is_err());
}

fn attr(tag: &str, name: &str) -> f64 {
    let key = format!(" {}=\"", name);
    let start = tag.find(&key).unwrap() + key.len();
    let end = start + tag[start..].find('"').unwrap();
    tag[start..end].parse().unwrap()
}

#[test]
fn test_bars_fill_the_axis() {
    let m = |min| common::hms(0, min, 0);
    let zones = garmin_run_report::models::HrZoneTimes::new([m(5), m(10), m(15), m(10), m(10)]);
    let svg = ZoneChart::from_zones(&zones)
        .unwrap()
        .render_svg()
        .unwrap()
        .to_ascii_lowercase();

    // Zone 5 bar is the only red rectangle
    let red = svg
        .split('<')
        .find(|tag| tag.starts_with("rect") && tag.contains("fill=\"#ff0000\""))
        .expect("zone 5 bar");
    let right_edge = attr(red, "x") + attr(red, "width");

    // 640 px canvas with a 20 px margin: no empty slot after zone 5
    assert!(right_edge > 600.0, "zone 5 bar ends at {}", right_edge);
}
