use serde_json::json;
use spokes::Envelope;
use spokes::feed::{Error, FeedType};
use spokes::gofs::{self, Feed, models::ZonesData};

fn discovery() -> Vec<u8> {
    serde_json::to_vec(&json!({
        "last_updated": 1724400000,
        "ttl": 300,
        "version": "1.0",
        "data": {
            "feeds": [
                { "name": "system_information", "url": "https://ride.example.com/system_information.json" },
                { "name": "zones", "url": "https://ride.example.com/zones.json" },
                { "name": "operating_rules", "url": "https://ride.example.com/operating_rules.json" },
                { "name": "vehicle_types", "url": "https://ride.example.com/vehicle_types.json" },
                { "name": "wait_times", "url": "https://ride.example.com/wait_times.json" }
            ]
        }
    }))
    .unwrap()
}

#[test]
fn discovery_decode_test() {
    let discovery = gofs::Discovery::decode(&discovery()).unwrap();
    assert_eq!(discovery.ttl, 300);
    assert_eq!(discovery.manifest.len(), 5);
    assert_eq!(
        discovery.manifest.url_for(Feed::Zones).unwrap().as_str(),
        "https://ride.example.com/zones.json"
    );
}

#[test]
fn round_trip_test() {
    let decoded = gofs::Discovery::decode(&discovery()).unwrap();
    let encoded = decoded.encode().unwrap();
    let again = gofs::Discovery::decode(&encoded).unwrap();
    assert_eq!(decoded.manifest, again.manifest);
}

#[test]
fn cross_family_registry_test() {
    // vehicle_types resolves in this family too, but to its own variant;
    // GBFS-only names stay unknown here.
    assert_eq!(Feed::from_wire("vehicle_types"), Some(Feed::VehicleTypes));
    assert!(Feed::from_wire("geofencing_zones").is_none());
    assert!(Feed::from_wire("station_status").is_none());

    let bytes = serde_json::to_vec(&json!({
        "last_updated": 1724400000,
        "ttl": 0,
        "data": {
            "feeds": [
                { "name": "station_information", "url": "https://ride.example.com/x.json" }
            ]
        }
    }))
    .unwrap();
    match gofs::Discovery::decode(&bytes) {
        Err(Error::UnknownFeedType(name)) => assert_eq!(name, "station_information"),
        other => panic!("expected UnknownFeedType, got {other:?}"),
    }
}

#[test]
fn zones_payload_test() {
    let bytes = serde_json::to_vec(&json!({
        "last_updated": 1724400000,
        "ttl": 300,
        "data": {
            "zones": {
                "type": "FeatureCollection",
                "features": [
                    {
                        "type": "Feature",
                        "properties": { "zone_id": "downtown" },
                        "geometry": {
                            "type": "Polygon",
                            "coordinates": [[
                                [18.05, 59.32], [18.07, 59.32],
                                [18.07, 59.34], [18.05, 59.34],
                                [18.05, 59.32]
                            ]]
                        }
                    }
                ]
            }
        }
    }))
    .unwrap();

    let zones: Envelope<ZonesData> = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(zones.data.zones.features.len(), 1);
}
