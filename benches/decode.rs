use criterion::{Criterion, criterion_group, criterion_main};
use spokes::Envelope;
use spokes::gbfs::{models::StationStatusData, v2};
use std::hint::black_box;

fn discovery_doc() -> Vec<u8> {
    let feeds = [
        "gbfs",
        "gbfs_versions",
        "system_information",
        "station_information",
        "station_status",
        "free_bike_status",
        "vehicle_types",
        "geofencing_zones",
        "system_hours",
        "system_calendar",
        "system_regions",
        "system_pricing_plans",
        "system_alerts",
    ];
    let entries: Vec<String> = feeds
        .iter()
        .map(|name| {
            format!(r#"{{ "name": "{name}", "url": "https://x.example.com/en/{name}.json" }}"#)
        })
        .collect();
    format!(
        r#"{{ "last_updated": 1724400000, "ttl": 0, "version": "2.3",
             "data": {{ "en": {{ "feeds": [{}] }} }} }}"#,
        entries.join(",")
    )
    .into_bytes()
}

fn station_status_doc(stations: usize) -> Vec<u8> {
    let entries: Vec<String> = (0..stations)
        .map(|i| {
            format!(
                r#"{{ "station_id": "{i}", "num_bikes_available": {}, "num_docks_available": {},
                     "is_installed": true, "is_renting": true, "is_returning": true,
                     "last_reported": 1724399990 }}"#,
                i % 20,
                20 - i % 20
            )
        })
        .collect();
    format!(
        r#"{{ "last_updated": 1724400000, "ttl": 0, "version": "2.3",
             "data": {{ "stations": [{}] }} }}"#,
        entries.join(",")
    )
    .into_bytes()
}

fn criterion_benchmark(c: &mut Criterion) {
    let discovery = discovery_doc();
    c.bench_function("decode_discovery_full", |b| {
        b.iter(|| v2::Services::decode(black_box(&discovery)))
    });

    let status = station_status_doc(5000);
    c.bench_function("decode_station_status_5k", |b| {
        b.iter(|| {
            serde_json::from_slice::<Envelope<StationStatusData>>(black_box(&status))
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
