//! Runtime configuration, read from ~/.capital-quest/config.json.
//!
//! Every field has a default, so a missing file (or a partial one) is fine.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::capitals::CountryKey;
use crate::enrich::provider::{DEFAULT_API_ENDPOINT, DEFAULT_USER_AGENT};
use crate::enrich::summary::DEFAULT_MAX_LENGTH;
use crate::enrich::{Enricher, SummaryCache, WikipediaProvider};

const APP_DIR: &str = ".capital-quest";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub cache_path: PathBuf,
    pub summary_max_length: usize,
    pub fetch_timeout_secs: u64,
    pub api_endpoint: String,
    pub user_agent: String,
    pub host: String,
    pub port: u16,
    pub default_country: CountryKey,
    pub offline: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cache_path: app_dir().join("capital_facts_cache.json"),
            summary_max_length: DEFAULT_MAX_LENGTH,
            fetch_timeout_secs: 5,
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            host: "127.0.0.1".to_string(),
            port: 5000,
            default_country: CountryKey::Us,
            offline: false,
        }
    }
}

fn app_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

impl AppConfig {
    pub fn default_path() -> PathBuf {
        app_dir().join("config.json")
    }

    /// Load from the default location; missing file means defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::default_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Build the process-wide enricher: load the cache once, wire the provider.
    pub fn build_enricher(&self) -> Enricher {
        let cache = SummaryCache::load_from(self.cache_path.clone());
        let provider = WikipediaProvider::new(&self.api_endpoint, &self.user_agent, self.fetch_timeout());
        let mut enricher = Enricher::new(cache, Box::new(provider)).with_max_length(self.summary_max_length);
        enricher.set_offline(self.offline);
        enricher
    }
}
