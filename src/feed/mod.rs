use chrono::{DateTime, TimeZone, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt, hash::Hash};
use thiserror::Error;
use tracing::debug;

pub mod codec;

use crate::http::Fetcher;
use crate::shared::url::{FeedUrl, UrlError};

#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown feed type `{0}`")]
    UnknownFeedType(String),
    #[error("discovery entry {index} is malformed")]
    MalformedRecord {
        index: usize,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("feed type `{0}` appears more than once in the discovery document")]
    DuplicateKey(String),
    #[error("no service published for locale `{0}`")]
    ServiceNotFound(String),
    #[error("feed `{0}` is not published by this system")]
    FeedNotPublished(String),
    #[error("invalid feed url: {0}")]
    InvalidUrl(#[from] UrlError),
    #[error("malformed document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to fetch `{url}`")]
    Fetch {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// A closed family of feed names bound to their canonical wire strings.
///
/// Each specification family (GBFS v1, GBFS v2, GOFS v1) implements this on
/// its own enum. Wire names are a bijection within one family, and families
/// are independent even where names overlap textually.
pub trait FeedType: Copy + Eq + Hash + fmt::Debug + fmt::Display {
    /// Canonical snake_case wire name of this feed.
    fn wire_name(&self) -> &'static str;

    /// Exact-match lookup in the family's wire table.
    fn from_wire(name: &str) -> Option<Self>;
}

/// Wire shape of one discovery entry.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FeedEntry {
    pub name: String,
    pub url: String,
}

/// The document wrapper shared by every GBFS and GOFS feed.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Envelope<T> {
    pub last_updated: i64,
    pub ttl: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub data: T,
}

impl<T> Envelope<T> {
    /// Publication instant, if `last_updated` is a representable timestamp.
    pub fn last_updated_utc(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.last_updated, 0).single()
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub(crate) struct FeedList<E> {
    pub(crate) feeds: Vec<E>,
}

/// Decoded discovery mapping from feed type to the URL it is served from.
///
/// A manifest is a pure value produced once by a decode; it may be partial
/// or empty, and it is never mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest<K: FeedType> {
    feeds: HashMap<K, FeedUrl>,
}

impl<K: FeedType> Manifest<K> {
    pub(crate) fn from_wire(records: Vec<serde_json::Value>) -> Result<Self, Error> {
        let feeds = codec::decode_entries(records, |entry: FeedEntry| {
            let kind = K::from_wire(&entry.name)
                .ok_or_else(|| Error::UnknownFeedType(entry.name.clone()))?;
            let url = FeedUrl::parse(&entry.url)?;
            Ok((kind, url))
        })?;
        Ok(Self { feeds })
    }

    pub(crate) fn to_wire(&self) -> Vec<FeedEntry> {
        codec::encode_entries(&self.feeds, |kind, url| FeedEntry {
            name: kind.wire_name().to_owned(),
            url: url.as_str().to_owned(),
        })
    }

    /// URL the given feed is served from, if the system publishes it.
    pub fn url_for(&self, kind: K) -> Option<&FeedUrl> {
        self.feeds.get(&kind)
    }

    pub fn contains(&self, kind: K) -> bool {
        self.feeds.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.feeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.feeds.is_empty()
    }

    /// Iterates the published feeds in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (K, &FeedUrl)> {
        self.feeds.iter().map(|(kind, url)| (*kind, url))
    }
}

impl<K: FeedType> Default for Manifest<K> {
    fn default() -> Self {
        Self {
            feeds: HashMap::new(),
        }
    }
}

/// Programmatic construction, mainly for encoding. Later entries for the
/// same feed type replace earlier ones; only the decode path rejects
/// duplicates, since there they signal a malformed document.
impl<K: FeedType> FromIterator<(K, FeedUrl)> for Manifest<K> {
    fn from_iter<I: IntoIterator<Item = (K, FeedUrl)>>(iter: I) -> Self {
        Self {
            feeds: iter.into_iter().collect(),
        }
    }
}

pub(crate) fn fetch_bytes<F: Fetcher>(fetcher: &F, url: &str) -> Result<Vec<u8>, Error> {
    fetcher.fetch(url).map_err(|source| Error::Fetch {
        url: url.to_owned(),
        source,
    })
}

/// Resolves `kind` against the manifest, fetches its document, and decodes
/// the enveloped payload.
pub(crate) fn fetch_feed<K, T, F>(
    fetcher: &F,
    manifest: &Manifest<K>,
    kind: K,
) -> Result<Envelope<T>, Error>
where
    K: FeedType,
    T: DeserializeOwned,
    F: Fetcher,
{
    let url = manifest
        .url_for(kind)
        .ok_or_else(|| Error::FeedNotPublished(kind.wire_name().to_owned()))?;
    debug!("Fetching feed {kind}");
    let bytes = fetch_bytes(fetcher, url.as_str())?;
    Ok(serde_json::from_slice(&bytes)?)
}
