use std::{env, fs, io, path::Path};

use dotenv::dotenv;
use log::info;
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "dietplan.ron";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] io::Error),
    #[error("malformed config file: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("invalid port \"{0}\"")]
    InvalidPort(String),
}

type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    /// Origins allowed by CORS. Empty means any origin.
    pub allowed_origins: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8080,
            allowed_origins: Vec::new(),
        }
    }
}

impl ApiConfig {
    /// Reads `.env`, then the RON config file, then applies
    /// `DIETPLAN_HOST` and `DIETPLAN_PORT` on top.
    pub fn load() -> Result<Self> {
        dotenv().ok();
        let path = env::var("DIETPLAN_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_owned());

        Self::load_from(
            path,
            env::var("DIETPLAN_HOST").ok(),
            env::var("DIETPLAN_PORT").ok(),
        )
    }

    /// Reads the config file at `path` if present and applies the host and
    /// port overrides on top.
    pub fn load_from(
        path: impl AsRef<Path>,
        host: Option<String>,
        port: Option<String>,
    ) -> Result<Self> {
        let path = path.as_ref();
        let config = if path.exists() {
            info!("Loading configuration from {}", path.display());
            Self::from_file(path)?
        } else {
            info!("No configuration file at {}, using defaults", path.display());
            Self::default()
        };

        config.with_overrides(host, port)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_ron(&fs::read_to_string(path)?)
    }

    pub fn from_ron(s: &str) -> Result<Self> {
        Ok(ron::from_str(s)?)
    }

    pub fn with_overrides(mut self, host: Option<String>, port: Option<String>) -> Result<Self> {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port.parse().map_err(|_| ConfigError::InvalidPort(port))?;
        }
        Ok(self)
    }
}
