//! Streaming reader for zipped GTFS Schedule archives.

use serde::de::DeserializeOwned;
use std::{
    fs::File,
    io::{self, Cursor, Read, Seek},
    path::PathBuf,
};
use thiserror::Error;
use tracing::debug;
use zip::ZipArchive;

mod config;
pub(crate) mod de;
pub mod models;
pub use config::*;
use models::*;

use crate::http::Fetcher;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Could not find file with name: {0}")]
    FileNotFound(String),
    #[error("Failed to fetch `{url}`")]
    Fetch {
        url: String,
        #[source]
        source: crate::http::FetchError,
    },
}

#[derive(Default)]
pub enum Storage {
    #[default]
    None,
    Zip(PathBuf),
    Bytes(Vec<u8>),
}

/// A schedule archive and the configuration to read it.
///
/// Tables are streamed record by record so large stop_times files never
/// have to be held decoded in full.
#[derive(Default)]
pub struct Schedule {
    config: Config,
    storage: Storage,
}

impl Schedule {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            storage: Default::default(),
        }
    }

    pub fn from_zip(mut self, path: PathBuf) -> Self {
        self.storage = Storage::Zip(path);
        self
    }

    pub fn from_bytes(mut self, bytes: Vec<u8>) -> Self {
        self.storage = Storage::Bytes(bytes);
        self
    }

    /// Fetches a remote archive through the given transport and keeps it
    /// in memory.
    pub fn fetch<F: Fetcher>(mut self, fetcher: &F, url: &str) -> Result<Self, Error> {
        debug!("Fetching schedule archive {url}");
        let bytes = fetcher.fetch(url).map_err(|source| Error::Fetch {
            url: url.to_owned(),
            source,
        })?;
        self.storage = Storage::Bytes(bytes);
        Ok(self)
    }

    pub fn stream_agencies<F>(&self, f: F) -> Result<(), Error>
    where
        F: FnMut((usize, Agency)),
    {
        self.stream(&self.config.agency_path, f)
    }

    pub fn stream_stops<F>(&self, f: F) -> Result<(), Error>
    where
        F: FnMut((usize, Stop)),
    {
        self.stream(&self.config.stops_path, f)
    }

    pub fn stream_routes<F>(&self, f: F) -> Result<(), Error>
    where
        F: FnMut((usize, Route)),
    {
        self.stream(&self.config.routes_path, f)
    }

    pub fn stream_trips<F>(&self, f: F) -> Result<(), Error>
    where
        F: FnMut((usize, Trip)),
    {
        self.stream(&self.config.trips_path, f)
    }

    pub fn stream_stop_times<F>(&self, f: F) -> Result<(), Error>
    where
        F: FnMut((usize, StopTime)),
    {
        self.stream(&self.config.stop_times_path, f)
    }

    pub fn stream_calendars<F>(&self, f: F) -> Result<(), Error>
    where
        F: FnMut((usize, Calendar)),
    {
        self.stream(&self.config.calendar_path, f)
    }

    pub fn stream_calendar_dates<F>(&self, f: F) -> Result<(), Error>
    where
        F: FnMut((usize, CalendarDate)),
    {
        self.stream(&self.config.calendar_dates_path, f)
    }

    fn stream<T, F>(&self, file_name: &str, f: F) -> Result<(), Error>
    where
        T: DeserializeOwned,
        F: FnMut((usize, T)),
    {
        match &self.storage {
            Storage::None => Ok(()),
            Storage::Zip(path) => {
                let file = File::open(path)?;
                stream_from_archive(ZipArchive::new(file)?, file_name, f)
            }
            Storage::Bytes(bytes) => stream_from_archive(
                ZipArchive::new(Cursor::new(bytes.as_slice()))?,
                file_name,
                f,
            ),
        }
    }
}

fn stream_from_archive<R, T, F>(
    mut archive: ZipArchive<R>,
    file_name: &str,
    mut f: F,
) -> Result<(), Error>
where
    R: Read + Seek,
    T: DeserializeOwned,
    F: FnMut((usize, T)),
{
    let index = archive
        .index_for_name(file_name)
        .ok_or_else(|| Error::FileNotFound(file_name.to_owned()))?;
    let file = archive.by_index(index)?;
    let mut reader = csv::Reader::from_reader(file);
    for (i, result) in reader.deserialize().enumerate() {
        let record: T = result?;
        f((i, record));
    }
    Ok(())
}
