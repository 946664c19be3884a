// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Route map with start, finish and kilometer markers.
//!
//! The map is a plain data structure; `to_html` renders it as a
//! self-contained Leaflet page and `to_geojson` as a FeatureCollection.

use std::fmt;
use std::str::FromStr;

use geo::{BoundingRect, MultiPoint, Point};
use geojson::{Feature, FeatureCollection, GeoJson, Geometry, Value};
use serde::Serialize;

use crate::models::{Activity, Coordinate, ReadingTrack};

const ZOOM_START: u8 = 4;
const MAP_WIDTH: u32 = 1200;
const MAP_HEIGHT: u32 = 600;

const PATH_COLOR: &str = "blue";
const PATH_WEIGHT: u32 = 4;
const PATH_DASH: &str = "0 10 0";

/// Longer than any single run; larger values are corrupt records.
const MAX_DISTANCE_KM: f64 = 10_000.0;

/// Background tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum TileStyle {
    #[default]
    StamenWatercolor,
    OpenStreetMap,
    StamenTerrain,
    StamenToner,
}

impl TileStyle {
    pub const ALL: [TileStyle; 4] = [
        TileStyle::StamenWatercolor,
        TileStyle::OpenStreetMap,
        TileStyle::StamenTerrain,
        TileStyle::StamenToner,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TileStyle::StamenWatercolor => "Stamen Watercolor",
            TileStyle::OpenStreetMap => "OpenStreetMap",
            TileStyle::StamenTerrain => "Stamen Terrain",
            TileStyle::StamenToner => "Stamen Toner",
        }
    }

    /// Short name accepted on the command line.
    pub fn slug(self) -> &'static str {
        match self {
            TileStyle::StamenWatercolor => "watercolor",
            TileStyle::OpenStreetMap => "openstreetmap",
            TileStyle::StamenTerrain => "terrain",
            TileStyle::StamenToner => "toner",
        }
    }

    /// Leaflet URL template. Stamen tiles are served by Stadia Maps.
    pub fn url_template(self) -> &'static str {
        match self {
            TileStyle::StamenWatercolor => {
                "https://tiles.stadiamaps.com/tiles/stamen_watercolor/{z}/{x}/{y}.jpg"
            }
            TileStyle::OpenStreetMap => "https://tile.openstreetmap.org/{z}/{x}/{y}.png",
            TileStyle::StamenTerrain => {
                "https://tiles.stadiamaps.com/tiles/stamen_terrain/{z}/{x}/{y}.png"
            }
            TileStyle::StamenToner => {
                "https://tiles.stadiamaps.com/tiles/stamen_toner/{z}/{x}/{y}.png"
            }
        }
    }

    pub fn attribution(self) -> &'static str {
        match self {
            TileStyle::OpenStreetMap => {
                "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors"
            }
            _ => {
                "&copy; <a href=\"https://stadiamaps.com/\">Stadia Maps</a> \
                 &copy; <a href=\"https://stamen.com/\">Stamen Design</a> \
                 &copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors"
            }
        }
    }

    pub fn max_zoom(self) -> u8 {
        match self {
            TileStyle::StamenWatercolor => 16,
            TileStyle::OpenStreetMap => 19,
            TileStyle::StamenTerrain => 18,
            TileStyle::StamenToner => 20,
        }
    }
}

impl fmt::Display for TileStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TileStyle {
    type Err = MapError;

    /// Accepts the slug (`toner`) or the display name (`Stamen Toner`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        TileStyle::ALL
            .into_iter()
            .find(|t| t.slug().eq_ignore_ascii_case(wanted) || t.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| MapError::UnknownTileStyle(s.to_string()))
    }
}

/// Caller-supplied rendering options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MapOptions {
    pub tiles: TileStyle,
    /// The page will be rasterized by a headless browser
    pub static_export: bool,
}

/// What a marker stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Start,
    End,
    /// Whole kilometer reached
    Kilometer(u32),
}

impl MarkerKind {
    /// Font Awesome icon name, if the marker uses one.
    pub fn icon(self) -> Option<&'static str> {
        match self {
            MarkerKind::Start => Some("play"),
            MarkerKind::End => Some("flag"),
            MarkerKind::Kilometer(_) => None,
        }
    }

    pub fn label(self) -> String {
        match self {
            MarkerKind::Start => "start".to_string(),
            MarkerKind::End => "end".to_string(),
            MarkerKind::Kilometer(km) => km.to_string(),
        }
    }

    pub fn tooltip(self) -> String {
        match self {
            MarkerKind::Kilometer(km) => format!("{} km", km),
            other => other.label(),
        }
    }

    fn kind_name(self) -> &'static str {
        match self {
            MarkerKind::Start => "start",
            MarkerKind::End => "end",
            MarkerKind::Kilometer(_) => "kilometer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub kind: MarkerKind,
    pub location: Coordinate,
}

/// South-west / north-east corners of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub south_west: Coordinate,
    pub north_east: Coordinate,
}

impl Bounds {
    fn of(points: impl IntoIterator<Item = Coordinate>) -> Option<Self> {
        let points: MultiPoint<f64> = points.into_iter().map(Point::from).collect();
        points.bounding_rect().map(|rect| Bounds {
            south_west: Coordinate::new(rect.min().y, rect.min().x),
            north_east: Coordinate::new(rect.max().y, rect.max().x),
        })
    }

    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lon + self.north_east.lon) / 2.0,
        )
    }
}

/// Map of one activity's route.
#[derive(Debug, Clone)]
pub struct RouteMap {
    pub title: String,
    pub center: Coordinate,
    pub zoom_start: u8,
    pub width: u32,
    pub height: u32,
    pub options: MapOptions,
    pub markers: Vec<Marker>,
    pub path: Vec<Coordinate>,
    pub bounds: Bounds,
}

impl RouteMap {
    /// Build the map for an activity from its sorted readings.
    pub fn build(
        activity: &Activity,
        track: &ReadingTrack,
        options: MapOptions,
    ) -> Result<Self, MapError> {
        let mut markers = Vec::new();
        if let Some(start) = activity.start {
            markers.push(Marker {
                kind: MarkerKind::Start,
                location: start,
            });
        }
        if let Some(stop) = activity.stop {
            markers.push(Marker {
                kind: MarkerKind::End,
                location: stop,
            });
        }
        markers.extend(kilometer_markers(activity.distance_km, track)?);

        let path: Vec<Coordinate> = track.positioned().map(|(_, p)| p).collect();

        let bounds = Bounds::of(path.iter().copied())
            .or_else(|| Bounds::of(markers.iter().map(|m| m.location)))
            .ok_or(MapError::NoPositions)?;

        tracing::debug!(
            activity_id = %activity.activity_id,
            markers = markers.len(),
            path_points = path.len(),
            tiles = %options.tiles,
            "Built route map"
        );

        Ok(Self {
            title: activity.name.clone(),
            center: activity.start.unwrap_or_else(|| bounds.center()),
            zoom_start: ZOOM_START,
            width: MAP_WIDTH,
            height: MAP_HEIGHT,
            options,
            markers,
            path,
            bounds,
        })
    }

    pub fn kilometer_markers(&self) -> impl Iterator<Item = &Marker> + '_ {
        self.markers
            .iter()
            .filter(|m| matches!(m.kind, MarkerKind::Kilometer(_)))
    }

    /// Render a self-contained Leaflet page.
    pub fn to_html(&self) -> Result<String, MapError> {
        // `</` inside a JSON string would end the script element early
        let data = serde_json::to_string(&self.page_data())
            .map_err(|e| MapError::Serialize(e.to_string()))?
            .replace("</", "<\\/");

        Ok(format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css">
    <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
    <style>
        html, body {{ margin: 0; padding: 0; }}
        #map {{ width: {width}px; height: {height}px; }}
{css}
    </style>
</head>
<body>
    <div id="map"></div>
    <script>const ROUTE_MAP = {data};</script>
    <script>{js}</script>
</body>
</html>
"#,
            title = escape_html(&self.title),
            width = self.width,
            height = self.height,
            css = MARKER_CSS,
            data = data,
            js = MAP_SCRIPT,
        ))
    }

    /// Export path and markers as GeoJSON.
    pub fn to_geojson(&self) -> GeoJson {
        let mut features = Vec::with_capacity(self.markers.len() + 1);

        let line = Geometry::new(Value::LineString(
            self.path.iter().map(|c| vec![c.lon, c.lat]).collect(),
        ));
        let mut path = Feature::from(line);
        path.set_property("kind", "path");
        features.push(path);

        for marker in &self.markers {
            let point = Geometry::new(Value::Point(vec![marker.location.lon, marker.location.lat]));
            let mut feature = Feature::from(point);
            feature.set_property("kind", marker.kind.kind_name());
            feature.set_property("label", marker.kind.label());
            features.push(feature);
        }

        GeoJson::FeatureCollection(FeatureCollection {
            bbox: Some(vec![
                self.bounds.south_west.lon,
                self.bounds.south_west.lat,
                self.bounds.north_east.lon,
                self.bounds.north_east.lat,
            ]),
            features,
            foreign_members: None,
        })
    }

    fn page_data(&self) -> PageData {
        PageData {
            center: [self.center.lat, self.center.lon],
            zoom: self.zoom_start,
            static_export: self.options.static_export,
            tiles: TileData {
                url: self.options.tiles.url_template(),
                attribution: self.options.tiles.attribution(),
                max_zoom: self.options.tiles.max_zoom(),
            },
            path: PathData {
                points: self.path.iter().map(|c| [c.lat, c.lon]).collect(),
                color: PATH_COLOR,
                weight: PATH_WEIGHT,
                dash_array: PATH_DASH,
            },
            markers: self
                .markers
                .iter()
                .map(|m| MarkerData {
                    lat: m.location.lat,
                    lon: m.location.lon,
                    icon: m.kind.icon(),
                    label: m.kind.label(),
                    tooltip: m.kind.tooltip(),
                })
                .collect(),
            bounds: [
                [self.bounds.south_west.lat, self.bounds.south_west.lon],
                [self.bounds.north_east.lat, self.bounds.north_east.lon],
            ],
        }
    }
}

/// One marker per whole kilometer, at the last reading not past it.
///
/// Activities shorter than a kilometer get none.
pub fn kilometer_markers(distance_km: f64, track: &ReadingTrack) -> Result<Vec<Marker>, MapError> {
    if distance_km.is_nan() || distance_km < 1.0 {
        return Ok(Vec::new());
    }
    if !distance_km.is_finite() || distance_km > MAX_DISTANCE_KM {
        return Err(MapError::ImplausibleDistance(distance_km));
    }

    let whole_km = distance_km.floor() as u32;
    (1..=whole_km)
        .map(|km| {
            track
                .last_position_within(f64::from(km))
                .map(|location| Marker {
                    kind: MarkerKind::Kilometer(km),
                    location,
                })
                .ok_or(MapError::NoReadingWithinDistance { km })
        })
        .collect()
}

fn escape_html(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageData {
    center: [f64; 2],
    zoom: u8,
    static_export: bool,
    tiles: TileData,
    path: PathData,
    markers: Vec<MarkerData>,
    bounds: [[f64; 2]; 2],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TileData {
    url: &'static str,
    attribution: &'static str,
    max_zoom: u8,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PathData {
    points: Vec<[f64; 2]>,
    color: &'static str,
    weight: u32,
    dash_array: &'static str,
}

#[derive(Serialize)]
struct MarkerData {
    lat: f64,
    lon: f64,
    icon: Option<&'static str>,
    label: String,
    tooltip: String,
}

const MARKER_CSS: &str = r#"        .route-marker {
            display: flex;
            align-items: center;
            justify-content: center;
            border-radius: 50%;
            background: black;
            color: white;
            font: bold 11px sans-serif;
            box-shadow: 0 0 2px rgba(0, 0, 0, 0.6);
        }"#;

const MAP_SCRIPT: &str = r#"
(function () {
    const data = ROUTE_MAP;
    const interactive = !data.staticExport;
    const map = L.map('map', {
        center: data.center,
        zoom: data.zoom,
        zoomControl: false,
        touchZoom: false,
        preferCanvas: data.staticExport,
        fadeAnimation: interactive,
        zoomAnimation: interactive,
        markerZoomAnimation: interactive,
        dragging: interactive,
        scrollWheelZoom: interactive,
        doubleClickZoom: interactive,
        boxZoom: interactive,
        keyboard: interactive
    });
    L.tileLayer(data.tiles.url, {
        attribution: data.tiles.attribution,
        maxZoom: data.tiles.maxZoom,
        crossOrigin: data.staticExport
    }).addTo(map);
    L.polyline(data.path.points, {
        color: data.path.color,
        weight: data.path.weight,
        dashArray: data.path.dashArray
    }).addTo(map);
    for (const m of data.markers) {
        const inner = m.icon
            ? '<i class="fa-solid fa-' + m.icon + '"></i>'
            : m.label;
        const icon = L.divIcon({
            className: 'route-marker',
            html: inner,
            iconSize: [24, 24],
            iconAnchor: [12, 12]
        });
        L.marker([m.lat, m.lon], { icon: icon })
            .bindTooltip(m.tooltip)
            .addTo(map);
    }
    map.fitBounds(data.bounds);
})();
"#;

/// Errors from map building.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MapError {
    #[error("no positioned reading at or before {km} km")]
    NoReadingWithinDistance { km: u32 },

    #[error("activity has no GPS positions")]
    NoPositions,

    #[error("implausible activity distance: {0} km")]
    ImplausibleDistance(f64),

    #[error("failed to serialize map data: {0}")]
    Serialize(String),

    #[error("unknown tile style: {0} (expected watercolor, openstreetmap, terrain or toner)")]
    UnknownTileStyle(String),
}
