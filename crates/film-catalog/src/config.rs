//! # Application Configuration
//!
//! Settings are read from the environment. `main` loads an optional `.env` file first, so
//! local overrides can live next to the binary.
//!
//! | Variable | Default | |
//! |---|---|---|
//! | `DB_URL` | `memory://` | store location, see [`record_store::Backend`] |
//! | `HOST` | `0.0.0.0` | HTTP bind address |
//! | `PORT` | `8000` | HTTP port |
//! | `STORE_CHANNEL_CAPACITY` | `32` | queued store requests |

use record_store::config::{DEFAULT_CHANNEL_CAPACITY, MEMORY_URL};
use record_store::StoreConfig;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got {0:?}")]
    InvalidPort(String),
    #[error("STORE_CHANNEL_CAPACITY must be a positive number, got {0:?}")]
    InvalidChannelCapacity(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub store: StoreConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Missing keys take their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DB_URL").unwrap_or_else(|| MEMORY_URL.to_string());
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match lookup("PORT") {
            Some(raw) => {
                let parsed = raw.trim().parse::<u16>();
                parsed.map_err(|_| ConfigError::InvalidPort(raw))?
            }
            None => 8000,
        };

        let channel_capacity = match lookup("STORE_CHANNEL_CAPACITY") {
            Some(raw) => {
                let parsed = raw.trim().parse::<usize>();
                match parsed {
                    Ok(capacity) if capacity > 0 => capacity,
                    _ => return Err(ConfigError::InvalidChannelCapacity(raw)),
                }
            }
            None => DEFAULT_CHANNEL_CAPACITY,
        };

        Ok(Self {
            host,
            port,
            store: StoreConfig::new(database_url).with_channel_capacity(channel_capacity),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
