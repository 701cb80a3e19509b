use serde::de::DeserializeOwned;
use std::fmt;

use super::models::*;
use crate::feed::{self, Envelope, Error, FeedList, FeedType, Manifest};
use crate::http::Fetcher;

/// Feeds named by GBFS v1.x.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feed {
    GbfsManifest,
    VersionManifest,
    SystemInformation,
    StationInformation,
    StationStatus,
    FreeBikeStatus,
    SystemHours,
    SystemCalendar,
    SystemRegions,
    SystemPricingPlans,
    SystemAlerts,
}

impl FeedType for Feed {
    fn wire_name(&self) -> &'static str {
        match self {
            Feed::GbfsManifest => "gbfs",
            Feed::VersionManifest => "gbfs_versions",
            Feed::SystemInformation => "system_information",
            Feed::StationInformation => "station_information",
            Feed::StationStatus => "station_status",
            Feed::FreeBikeStatus => "free_bike_status",
            Feed::SystemHours => "system_hours",
            Feed::SystemCalendar => "system_calendar",
            Feed::SystemRegions => "system_regions",
            Feed::SystemPricingPlans => "system_pricing_plans",
            Feed::SystemAlerts => "system_alerts",
        }
    }

    fn from_wire(name: &str) -> Option<Self> {
        Some(match name {
            "gbfs" => Feed::GbfsManifest,
            "gbfs_versions" => Feed::VersionManifest,
            "system_information" => Feed::SystemInformation,
            "station_information" => Feed::StationInformation,
            "station_status" => Feed::StationStatus,
            "free_bike_status" => Feed::FreeBikeStatus,
            "system_hours" => Feed::SystemHours,
            "system_calendar" => Feed::SystemCalendar,
            "system_regions" => Feed::SystemRegions,
            "system_pricing_plans" => Feed::SystemPricingPlans,
            "system_alerts" => Feed::SystemAlerts,
            _ => return None,
        })
    }
}

impl fmt::Display for Feed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// A decoded v1 discovery document: the envelope metadata plus the manifest
/// of published feeds.
#[derive(Debug, Clone)]
pub struct Discovery {
    pub last_updated: i64,
    pub ttl: u32,
    pub version: Option<String>,
    pub manifest: Manifest<Feed>,
}

impl Discovery {
    /// Decodes a raw v1 discovery document.
    pub fn decode(bytes: &[u8]) -> Result<Self, Error> {
        let doc: Envelope<FeedList<serde_json::Value>> = serde_json::from_slice(bytes)?;
        let manifest = Manifest::from_wire(doc.data.feeds)?;
        Ok(Self {
            last_updated: doc.last_updated,
            ttl: doc.ttl,
            version: doc.version,
            manifest,
        })
    }

    /// Encodes the document back to its wire envelope.
    pub fn encode(&self) -> Result<Vec<u8>, Error> {
        let doc = Envelope {
            last_updated: self.last_updated,
            ttl: self.ttl,
            version: self.version.clone(),
            data: FeedList {
                feeds: self.manifest.to_wire(),
            },
        };
        Ok(serde_json::to_vec(&doc)?)
    }
}

/// A GBFS v1 system client, generic over the transport it borrows.
pub struct Gbfs<F> {
    fetcher: F,
}

impl<F: Fetcher> Gbfs<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Fetches and decodes the discovery document at `url`.
    pub fn discover(&self, url: &str) -> Result<Discovery, Error> {
        let bytes = feed::fetch_bytes(&self.fetcher, url)?;
        Discovery::decode(&bytes)
    }

    fn feed<T: DeserializeOwned>(
        &self,
        manifest: &Manifest<Feed>,
        kind: Feed,
    ) -> Result<Envelope<T>, Error> {
        feed::fetch_feed(&self.fetcher, manifest, kind)
    }

    pub fn system_information(
        &self,
        manifest: &Manifest<Feed>,
    ) -> Result<Envelope<SystemInformation>, Error> {
        self.feed(manifest, Feed::SystemInformation)
    }

    pub fn station_information(
        &self,
        manifest: &Manifest<Feed>,
    ) -> Result<Envelope<StationInformationData>, Error> {
        self.feed(manifest, Feed::StationInformation)
    }

    pub fn station_status(
        &self,
        manifest: &Manifest<Feed>,
    ) -> Result<Envelope<StationStatusData>, Error> {
        self.feed(manifest, Feed::StationStatus)
    }

    pub fn free_bike_status(
        &self,
        manifest: &Manifest<Feed>,
    ) -> Result<Envelope<FreeBikeStatusData>, Error> {
        self.feed(manifest, Feed::FreeBikeStatus)
    }

    pub fn system_hours(
        &self,
        manifest: &Manifest<Feed>,
    ) -> Result<Envelope<SystemHoursData>, Error> {
        self.feed(manifest, Feed::SystemHours)
    }

    pub fn system_calendar(
        &self,
        manifest: &Manifest<Feed>,
    ) -> Result<Envelope<SystemCalendarData>, Error> {
        self.feed(manifest, Feed::SystemCalendar)
    }

    pub fn system_regions(
        &self,
        manifest: &Manifest<Feed>,
    ) -> Result<Envelope<SystemRegionsData>, Error> {
        self.feed(manifest, Feed::SystemRegions)
    }

    pub fn system_pricing_plans(
        &self,
        manifest: &Manifest<Feed>,
    ) -> Result<Envelope<SystemPricingPlansData>, Error> {
        self.feed(manifest, Feed::SystemPricingPlans)
    }

    pub fn system_alerts(
        &self,
        manifest: &Manifest<Feed>,
    ) -> Result<Envelope<SystemAlertsData>, Error> {
        self.feed(manifest, Feed::SystemAlerts)
    }

    pub fn versions(&self, manifest: &Manifest<Feed>) -> Result<Envelope<VersionsData>, Error> {
        self.feed(manifest, Feed::VersionManifest)
    }
}
