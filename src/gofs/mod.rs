//! Client and models for the General On-demand Feed Specification v1.
//!
//! GOFS shares the GBFS envelope and discovery shape but carries its own
//! feed vocabulary; the two registries are unrelated even where names match.

use serde::de::DeserializeOwned;
use std::fmt;

use crate::feed::{self, Envelope, Error, FeedList, FeedType, Manifest};
use crate::http::Fetcher;

pub mod models;
use models::*;

/// Feeds named by GOFS v1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feed {
    GofsManifest,
    SystemInformation,
    ServiceBrands,
    Zones,
    OperatingRules,
    Calendars,
    BookingRules,
    VehicleTypes,
    WaitTimes,
}

impl FeedType for Feed {
    fn wire_name(&self) -> &'static str {
        match self {
            Feed::GofsManifest => "gofs",
            Feed::SystemInformation => "system_information",
            Feed::ServiceBrands => "service_brands",
            Feed::Zones => "zones",
            Feed::OperatingRules => "operating_rules",
            Feed::Calendars => "calendars",
            Feed::BookingRules => "booking_rules",
            Feed::VehicleTypes => "vehicle_types",
            Feed::WaitTimes => "wait_times",
        }
    }

    fn from_wire(name: &str) -> Option<Self> {
        Some(match name {
            "gofs" => Feed::GofsManifest,
            "system_information" => Feed::SystemInformation,
            "service_brands" => Feed::ServiceBrands,
            "zones" => Feed::Zones,
            "operating_rules" => Feed::OperatingRules,
            "calendars" => Feed::Calendars,
            "booking_rules" => Feed::BookingRules,
            "vehicle_types" => Feed::VehicleTypes,
            "wait_times" => Feed::WaitTimes,
            _ => return None,
        })
    }
}

impl fmt::Display for Feed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// A decoded GOFS discovery document.
#[derive(Debug, Clone)]
pub struct Discovery {
    pub last_updated: i64,
    pub ttl: u32,
    pub version: Option<String>,
    pub manifest: Manifest<Feed>,
}

impl Discovery {
    /// Decodes a raw GOFS discovery document.
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

/// A GOFS system client, generic over the transport it borrows.
pub struct Gofs<F> {
    fetcher: F,
}

impl<F: Fetcher> Gofs<F> {
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

    pub fn service_brands(
        &self,
        manifest: &Manifest<Feed>,
    ) -> Result<Envelope<ServiceBrandsData>, Error> {
        self.feed(manifest, Feed::ServiceBrands)
    }

    pub fn zones(&self, manifest: &Manifest<Feed>) -> Result<Envelope<ZonesData>, Error> {
        self.feed(manifest, Feed::Zones)
    }

    pub fn operating_rules(
        &self,
        manifest: &Manifest<Feed>,
    ) -> Result<Envelope<OperatingRulesData>, Error> {
        self.feed(manifest, Feed::OperatingRules)
    }

    pub fn calendars(&self, manifest: &Manifest<Feed>) -> Result<Envelope<CalendarsData>, Error> {
        self.feed(manifest, Feed::Calendars)
    }

    pub fn booking_rules(
        &self,
        manifest: &Manifest<Feed>,
    ) -> Result<Envelope<BookingRulesData>, Error> {
        self.feed(manifest, Feed::BookingRules)
    }

    pub fn vehicle_types(
        &self,
        manifest: &Manifest<Feed>,
    ) -> Result<Envelope<VehicleTypesData>, Error> {
        self.feed(manifest, Feed::VehicleTypes)
    }

    pub fn wait_times(&self, manifest: &Manifest<Feed>) -> Result<Envelope<WaitTimesData>, Error> {
        self.feed(manifest, Feed::WaitTimes)
    }
}
