use serde::{Deserialize, Serialize};
use serde_json::json;
use spokes::FeedUrl;
use spokes::feed::{Error, Manifest, codec};
use spokes::gbfs::v1::{Discovery, Feed};
use std::collections::HashSet;

fn url(raw: &str) -> FeedUrl {
    FeedUrl::parse(raw).unwrap()
}

fn doc(feeds: serde_json::Value) -> Vec<u8> {
    serde_json::to_vec(&json!({
        "last_updated": 1724400000,
        "ttl": 60,
        "data": { "feeds": feeds }
    }))
    .unwrap()
}

#[test]
fn round_trip_test() {
    let manifest: Manifest<Feed> = [
        (
            Feed::SystemInformation,
            url("https://x.example.com/system_information.json"),
        ),
        (
            Feed::StationInformation,
            url("https://x.example.com/station_information.json"),
        ),
        (
            Feed::StationStatus,
            url("https://x.example.com/station_status.json"),
        ),
    ]
    .into_iter()
    .collect();
    let discovery = Discovery {
        last_updated: 1724400000,
        ttl: 60,
        version: Some("1.1".into()),
        manifest,
    };

    let encoded = discovery.encode().unwrap();
    let decoded = Discovery::decode(&encoded).unwrap();
    assert_eq!(discovery.manifest, decoded.manifest);
    assert_eq!(decoded.version.as_deref(), Some("1.1"));
}

#[test]
fn single_entry_test() {
    let manifest: Manifest<Feed> = [(
        Feed::SystemInformation,
        url("https://example.com/system_information.json"),
    )]
    .into_iter()
    .collect();
    let discovery = Discovery {
        last_updated: 0,
        ttl: 0,
        version: None,
        manifest,
    };

    let encoded = discovery.encode().unwrap();
    let value: serde_json::Value = serde_json::from_slice(&encoded).unwrap();
    assert_eq!(
        value["data"]["feeds"],
        json!([{
            "name": "system_information",
            "url": "https://example.com/system_information.json"
        }])
    );
}

#[test]
fn multi_entry_name_set_test() {
    let manifest: Manifest<Feed> = [
        (Feed::SystemInformation, url("https://x.example.com/a.json")),
        (Feed::StationStatus, url("https://x.example.com/b.json")),
        (Feed::SystemAlerts, url("https://x.example.com/c.json")),
    ]
    .into_iter()
    .collect();
    let discovery = Discovery {
        last_updated: 0,
        ttl: 0,
        version: None,
        manifest,
    };

    let encoded = discovery.encode().unwrap();
    let value: serde_json::Value = serde_json::from_slice(&encoded).unwrap();
    let feeds = value["data"]["feeds"].as_array().unwrap();
    assert_eq!(feeds.len(), 3);

    // Wire order carries no meaning, the names must match as a set.
    let names: HashSet<&str> = feeds
        .iter()
        .map(|feed| feed["name"].as_str().unwrap())
        .collect();
    let expected: HashSet<&str> = ["system_information", "station_status", "system_alerts"]
        .into_iter()
        .collect();
    assert_eq!(names, expected);
}

#[test]
fn empty_manifest_round_trip_test() {
    let discovery = Discovery {
        last_updated: 0,
        ttl: 0,
        version: None,
        manifest: Manifest::default(),
    };

    let encoded = discovery.encode().unwrap();
    let value: serde_json::Value = serde_json::from_slice(&encoded).unwrap();
    assert_eq!(value["data"]["feeds"], json!([]));

    let decoded = Discovery::decode(&encoded).unwrap();
    assert!(decoded.manifest.is_empty());
}

#[test]
fn unknown_feed_type_test() {
    let bytes = doc(json!([
        { "name": "not_a_real_feed", "url": "https://x.example.com/y.json" }
    ]));
    match Discovery::decode(&bytes) {
        Err(Error::UnknownFeedType(name)) => assert_eq!(name, "not_a_real_feed"),
        other => panic!("expected UnknownFeedType, got {other:?}"),
    }
}

#[test]
fn duplicate_feed_type_test() {
    let bytes = doc(json!([
        { "name": "station_status", "url": "https://x.example.com/a.json" },
        { "name": "station_status", "url": "https://x.example.com/b.json" }
    ]));
    match Discovery::decode(&bytes) {
        Err(Error::DuplicateKey(name)) => assert_eq!(name, "station_status"),
        other => panic!("expected DuplicateKey, got {other:?}"),
    }
}

#[test]
fn malformed_record_position_test() {
    let bytes = doc(json!([
        { "name": "station_status", "url": "https://x.example.com/a.json" },
        { "name": "system_information" }
    ]));
    match Discovery::decode(&bytes) {
        Err(Error::MalformedRecord { index, .. }) => assert_eq!(index, 1),
        other => panic!("expected MalformedRecord, got {other:?}"),
    }
}

#[test]
fn malformed_url_test() {
    let bytes = doc(json!([
        { "name": "station_status", "url": "not a url" }
    ]));
    match Discovery::decode(&bytes) {
        Err(Error::MalformedRecord { index, .. }) => assert_eq!(index, 0),
        other => panic!("expected MalformedRecord, got {other:?}"),
    }
}

#[test]
fn generic_codec_test() {
    // The codec is not tied to feed registries; any delegate with an entry
    // view works.
    #[derive(Serialize, Deserialize)]
    struct Pair {
        name: String,
        url: String,
    }

    let records = vec![
        json!({ "name": "a", "url": "one" }),
        json!({ "name": "b", "url": "two" }),
    ];
    let map = codec::decode_entries(records, |pair: Pair| Ok((pair.name, pair.url))).unwrap();
    assert_eq!(map.get("a").map(String::as_str), Some("one"));
    assert_eq!(map.get("b").map(String::as_str), Some("two"));

    let out = codec::encode_entries(&map, |name, url| Pair {
        name: name.clone(),
        url: url.clone(),
    });
    assert_eq!(out.len(), 2);
}
