use serde::de::DeserializeOwned;
use std::{collections::HashMap, fmt};

use super::models::*;
use crate::feed::{self, Envelope, Error, FeedList, FeedType, Manifest};
use crate::http::Fetcher;

/// Feeds named by GBFS v2.x.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feed {
    GbfsManifest,
    VersionManifest,
    SystemInformation,
    StationInformation,
    StationStatus,
    FreeBikeStatus,
    VehicleTypes,
    GeofencingZones,
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
            Feed::VehicleTypes => "vehicle_types",
            Feed::GeofencingZones => "geofencing_zones",
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
            "vehicle_types" => Feed::VehicleTypes,
            "geofencing_zones" => Feed::GeofencingZones,
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

/// A decoded v2 discovery document: locale-keyed services, each a manifest
/// of published feeds.
#[derive(Debug, Clone)]
pub struct Services {
    pub last_updated: i64,
    pub ttl: u32,
    pub version: Option<String>,
    services: HashMap<String, Manifest<Feed>>,
}

impl Services {
    /// Decodes a raw v2 discovery document.
    pub fn decode(bytes: &[u8]) -> Result<Self, Error> {
        let doc: Envelope<HashMap<String, FeedList<serde_json::Value>>> =
            serde_json::from_slice(bytes)?;
        let mut services = HashMap::with_capacity(doc.data.len());
        for (locale, list) in doc.data {
            services.insert(locale, Manifest::from_wire(list.feeds)?);
        }
        Ok(Self {
            last_updated: doc.last_updated,
            ttl: doc.ttl,
            version: doc.version,
            services,
        })
    }

    /// Encodes the document back to its wire envelope.
    pub fn encode(&self) -> Result<Vec<u8>, Error> {
        let data: HashMap<&str, FeedList<feed::FeedEntry>> = self
            .services
            .iter()
            .map(|(locale, manifest)| {
                (
                    locale.as_str(),
                    FeedList {
                        feeds: manifest.to_wire(),
                    },
                )
            })
            .collect();
        let doc = Envelope {
            last_updated: self.last_updated,
            ttl: self.ttl,
            version: self.version.clone(),
            data,
        };
        Ok(serde_json::to_vec(&doc)?)
    }

    /// Manifest published for an exact locale code. No fallback and no case
    /// folding is performed.
    pub fn service(&self, locale: &str) -> Result<&Manifest<Feed>, Error> {
        self.services
            .get(locale)
            .ok_or_else(|| Error::ServiceNotFound(locale.to_owned()))
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.services.keys().map(|locale| locale.as_str())
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

/// A GBFS v2 system client, generic over the transport it borrows.
pub struct Gbfs<F> {
    fetcher: F,
}

impl<F: Fetcher> Gbfs<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Fetches and decodes the discovery document at `url`.
    pub fn discover(&self, url: &str) -> Result<Services, Error> {
        let bytes = feed::fetch_bytes(&self.fetcher, url)?;
        Services::decode(&bytes)
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

    pub fn vehicle_types(
        &self,
        manifest: &Manifest<Feed>,
    ) -> Result<Envelope<VehicleTypesData>, Error> {
        self.feed(manifest, Feed::VehicleTypes)
    }

    pub fn geofencing_zones(
        &self,
        manifest: &Manifest<Feed>,
    ) -> Result<Envelope<GeofencingZonesData>, Error> {
        self.feed(manifest, Feed::GeofencingZones)
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
