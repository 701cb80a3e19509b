use chrono::NaiveDate;
use spokes::gtfs;

fn fixture() -> gtfs::Schedule {
    let zip_path = format!(
        "{}/tests/fixtures/schedule.zip",
        env!("CARGO_MANIFEST_DIR")
    );
    gtfs::Schedule::new(gtfs::Config::default()).from_zip(zip_path.into())
}

#[test]
fn stream_from_zip_test() {
    let schedule = fixture();

    let mut agencies = Vec::new();
    schedule
        .stream_agencies(|(_, agency)| agencies.push(agency))
        .unwrap();
    assert_eq!(agencies.len(), 1);
    assert_eq!(agencies[0].agency_name, "City Cycle Transit");
    assert!(agencies[0].agency_phone.is_none());

    let mut stops = Vec::new();
    schedule.stream_stops(|(_, stop)| stops.push(stop)).unwrap();
    assert_eq!(stops.len(), 3);
    for stop in &stops {
        if stop.stop_id.is_empty() {
            panic!("stop_id should never be null");
        }
    }
    assert_eq!(stops[0].stop_name.as_deref(), Some("Central Station"));
    assert_eq!(stops[0].stop_lat, Some(59.3301));
    assert!(stops[1].platform_code.is_none());

    let mut routes = Vec::new();
    schedule
        .stream_routes(|(_, route)| routes.push(route))
        .unwrap();
    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0].route_type, 3);

    let mut trips = Vec::new();
    schedule.stream_trips(|(_, trip)| trips.push(trip)).unwrap();
    assert_eq!(trips.len(), 2);
    assert_eq!(trips[0].direction_id, Some(0));
    assert!(trips[1].wheelchair_accessible.is_none());
}

#[test]
fn stream_stop_times_test() {
    let schedule = fixture();

    let mut stop_times = Vec::new();
    schedule
        .stream_stop_times(|(i, stop_time)| stop_times.push((i, stop_time)))
        .unwrap();
    assert_eq!(stop_times.len(), 6);
    // Record indexes follow file order.
    assert_eq!(stop_times[0].0, 0);
    assert_eq!(stop_times[5].0, 5);
    assert_eq!(stop_times[1].1.departure_time.as_deref(), Some("08:05:30"));
    assert_eq!(stop_times[1].1.shape_dist_traveled, Some(1200.5));
    assert!(stop_times[3].1.shape_dist_traveled.is_none());
}

#[test]
fn stream_calendars_test() {
    let schedule = fixture();

    let mut calendars = Vec::new();
    schedule
        .stream_calendars(|(_, calendar)| calendars.push(calendar))
        .unwrap();
    assert_eq!(calendars.len(), 2);

    let weekday = &calendars[0];
    assert_eq!(weekday.service_id, "WEEKDAY");
    assert!(weekday.monday && weekday.friday);
    assert!(!weekday.saturday && !weekday.sunday);
    assert_eq!(
        weekday.start_date,
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    );
    assert_eq!(
        weekday.end_date,
        NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
    );

    let mut exceptions = Vec::new();
    schedule
        .stream_calendar_dates(|(_, date)| exceptions.push(date))
        .unwrap();
    assert_eq!(exceptions.len(), 1);
    assert_eq!(exceptions[0].exception_type, 2);
    assert_eq!(
        exceptions[0].date,
        NaiveDate::from_ymd_opt(2025, 6, 18).unwrap()
    );
}

#[test]
fn stream_from_bytes_test() {
    let bytes = include_bytes!("fixtures/schedule.zip").to_vec();
    let schedule = gtfs::Schedule::new(gtfs::Config::default()).from_bytes(bytes);

    let mut trips = 0;
    schedule.stream_trips(|_| trips += 1).unwrap();
    assert_eq!(trips, 2);
}

#[test]
fn missing_file_test() {
    let config = gtfs::Config {
        stops_path: "platforms.txt".into(),
        ..Default::default()
    };
    let schedule =
        gtfs::Schedule::new(config).from_bytes(include_bytes!("fixtures/schedule.zip").to_vec());
    let result = schedule.stream_stops(|_| {});
    assert!(matches!(result, Err(gtfs::Error::FileNotFound(_))));
}
