//! Store configuration.

use crate::error::StoreError;
use sqlx::sqlite::SqliteConnectOptions;
use std::fmt::{self, Display};
use std::str::FromStr;

pub const MEMORY_URL: &str = "memory://";
pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;

const SQLITE_MEMORY_URL: &str = "sqlite::memory:";

/// Settings needed to open a [`RecordStore`](crate::RecordStore).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// `memory://` or a SQLite url such as `sqlite://catalog.db`.
    pub database_url: String,
    /// Capacity of the request channel. Senders wait while it is full.
    pub channel_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_url: MEMORY_URL.to_string(),
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl StoreConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            ..Self::default()
        }
    }

    pub fn with_channel_capacity(mut self, channel_capacity: usize) -> Self {
        self.channel_capacity = channel_capacity;
        self
    }
}

/// The database behind the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    /// A private in-memory SQLite database, gone when the store stops.
    Memory,
    /// A SQLite database file, created on first use.
    Sqlite(String),
}

impl Backend {
    pub fn from_url(url: &str) -> Result<Self, StoreError> {
        if url == MEMORY_URL || url == SQLITE_MEMORY_URL {
            return Ok(Backend::Memory);
        }
        let path = url
            .strip_prefix("sqlite://")
            .or_else(|| url.strip_prefix("sqlite:"));
        match path {
            Some(path) if !path.is_empty() => Ok(Backend::Sqlite(url.to_string())),
            Some(_) => Err(StoreError::Config(format!("missing database path in {url}"))),
            None => Err(StoreError::Config(format!(
                "unsupported database url {url}, expected {MEMORY_URL} or sqlite://<path>"
            ))),
        }
    }

    pub fn connect_options(&self) -> Result<SqliteConnectOptions, StoreError> {
        let options = match self {
            Backend::Memory => SqliteConnectOptions::from_str(SQLITE_MEMORY_URL),
            Backend::Sqlite(url) => {
                SqliteConnectOptions::from_str(url).map(|options| options.create_if_missing(true))
            }
        };
        options
            .map(|options| options.foreign_keys(true))
            .map_err(|e| StoreError::Config(e.to_string()))
    }
}

impl Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Memory => write!(f, "{MEMORY_URL}"),
            Backend::Sqlite(url) => write!(f, "{url}"),
        }
    }
}
