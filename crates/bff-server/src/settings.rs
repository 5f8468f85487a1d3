//! Listener settings.
//!
//! # Environment Variables
//!
//! - `HOST` - Bind address (default: `0.0.0.0`)
//! - `PORT` - Bind port (default: `3000`)

use std::net::{AddrParseError, SocketAddr};

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// Where the HTTP server listens.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerSettings {
    /// Loads settings from `HOST` / `PORT`, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(Environment::default())
    }

    /// Loads settings from an explicit environment source.
    pub fn from_source(source: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("host", DEFAULT_HOST)?
            .set_default("port", i64::from(DEFAULT_PORT))?
            .add_source(source)
            .build()?
            .try_deserialize()
    }

    /// Returns the socket address to bind.
    pub fn addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}
