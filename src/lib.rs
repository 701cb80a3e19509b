//! Typed clients for open mobility data feeds: GBFS v1/v2, GOFS v1, and
//! GTFS Schedule.
//!
//! Discovery documents decode into a [`Manifest`] mapping each known feed
//! type to the URL it is served from; per-family clients resolve feeds
//! against a manifest and decode their payloads through an injected
//! [`Fetcher`].

pub mod feed;
pub mod gbfs;
pub mod gofs;
pub mod gtfs;
pub mod http;
pub mod shared;

pub use feed::{Envelope, Error, FeedEntry, FeedType, Manifest};
#[cfg(feature = "http")]
pub use http::HttpFetcher;
pub use http::{FetchError, Fetcher};
pub use shared::url::{FeedUrl, UrlError};

pub mod prelude {
    pub use crate::feed::{Envelope, Error, FeedType, Manifest};
    #[cfg(feature = "http")]
    pub use crate::http::HttpFetcher;
    pub use crate::http::{FetchError, Fetcher};
    pub use crate::shared::url::FeedUrl;
    pub use crate::{gbfs, gofs, gtfs};
}
