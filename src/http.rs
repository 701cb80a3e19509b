/// Failure produced by a [`Fetcher`] implementation.
pub type FetchError = Box<dyn std::error::Error + Send + Sync>;

/// Single-shot byte transport for feed documents.
///
/// The library never opens connections on its own; every client borrows an
/// implementation supplied by the embedding application. Timeouts and
/// cancellation belong to the implementation.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        (**self).fetch(url)
    }
}

#[cfg(feature = "http")]
pub use reqwest_fetcher::HttpFetcher;

#[cfg(feature = "http")]
mod reqwest_fetcher {
    use super::{FetchError, Fetcher};
    use std::time::Duration;
    use tracing::debug;

    /// Blocking [`Fetcher`] backed by reqwest.
    pub struct HttpFetcher {
        client: reqwest::blocking::Client,
    }

    impl HttpFetcher {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
            let client = reqwest::blocking::Client::builder()
                .timeout(timeout)
                .build()?;
            Ok(Self { client })
        }
    }

    impl Default for HttpFetcher {
        fn default() -> Self {
            Self {
                client: reqwest::blocking::Client::new(),
            }
        }
    }

    impl Fetcher for HttpFetcher {
        fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
            debug!("Fetching {url}");
            let response = self.client.get(url).send()?.error_for_status()?;
            Ok(response.bytes()?.to_vec())
        }
    }
}
