use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, Criterion};
use garmin_run_report::models::{Activity, Coordinate, HrZoneTimes, Reading, ReadingTrack};
use garmin_run_report::services::route_map::{kilometer_markers, MapOptions, RouteMap};
use std::hint::black_box;

/// Roughly a marathon at one reading per second.
fn marathon_track() -> (Activity, ReadingTrack) {
    let seconds = 4 * 3600;
    let km_per_second = 42.2 / seconds as f64;
    let readings = (0..seconds)
        .map(|i| {
            let d = i as f64 * km_per_second;
            Reading {
                timestamp: Utc.timestamp_opt(1_709_363_700 + i as i64, 0).unwrap(),
                // Drop every 50th fix like a watch losing GPS under trees
                position: (i % 50 != 0).then(|| Coordinate::new(52.0 + d * 0.005, 4.4 + d * 0.003)),
                distance_km: Some(d),
                heart_rate: Some(150),
                speed_kmh: Some(10.55),
                altitude_m: Some(2.0),
            }
        })
        .collect();

    let day = NaiveDate::from_ymd_opt(2024, 4, 7).unwrap();
    let minutes = |m| NaiveTime::from_hms_opt(0, m, 0).unwrap();
    let activity = Activity {
        activity_id: "1".to_string(),
        name: "Marathon".to_string(),
        distance_km: 42.2,
        start_time: day.and_hms_opt(10, 0, 0).unwrap(),
        stop_time: day.and_hms_opt(14, 0, 0).unwrap(),
        moving_time: NaiveTime::from_hms_opt(4, 0, 0).unwrap(),
        avg_hr: Some(150),
        max_hr: Some(178),
        avg_speed_kmh: 10.55,
        start: Some(Coordinate::new(52.0, 4.4)),
        stop: Some(Coordinate::new(52.211, 4.5266)),
        hr_zones: HrZoneTimes::new([minutes(5), minutes(40), minutes(59), minutes(59), minutes(30)]),
        training_effect: Some(4.8),
        anaerobic_training_effect: Some(1.1),
    };
    (activity, ReadingTrack::new(readings))
}

fn benchmark_route_map(c: &mut Criterion) {
    let (activity, track) = marathon_track();

    let mut group = c.benchmark_group("route_map");

    group.bench_function("kilometer_markers", |b| {
        b.iter(|| kilometer_markers(black_box(activity.distance_km), black_box(&track)))
    });

    group.bench_function("build", |b| {
        b.iter(|| RouteMap::build(black_box(&activity), black_box(&track), MapOptions::default()))
    });

    let map = RouteMap::build(&activity, &track, MapOptions::default()).expect("Failed to build map");
    group.bench_function("to_html", |b| b.iter(|| black_box(&map).to_html()));

    group.finish();
}

criterion_group!(benches, benchmark_route_map);
criterion_main!(benches);
