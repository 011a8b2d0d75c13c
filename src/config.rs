use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Dashboard pages inventoried when no other list is configured
pub const DEFAULT_URLS: [&str; 6] = [
    "https://www.plan-alytics-demo.com/dashboard",
    "https://www.plan-alytics-demo.com/dashboard/revenue",
    "https://www.plan-alytics-demo.com/dashboard/retention",
    "https://www.plan-alytics-demo.com/dashboard/crm",
    "https://www.plan-alytics-demo.com/dashboard/usage",
    "https://www.plan-alytics-demo.com/dashboard/clv",
];

pub const DEFAULT_JSON_PATH: &str = "page_inventory_enhanced.json";
pub const DEFAULT_CSV_PATH: &str = "page_inventory_enhanced.csv";

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("no URLs configured")]
    NoUrls,
}

/// Configuration for an inventory run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryConfig {
    /// Pages to scrape, in order
    #[serde(default = "default_urls")]
    pub urls: Vec<String>,

    /// Destination of the nested JSON export
    #[serde(default = "default_json_path")]
    pub json_path: PathBuf,

    /// Destination of the flattened CSV export
    #[serde(default = "default_csv_path")]
    pub csv_path: PathBuf,

    /// Pause between consecutive requests, in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

fn default_urls() -> Vec<String> {
    DEFAULT_URLS.iter().map(|u| u.to_string()).collect()
}

fn default_json_path() -> PathBuf {
    PathBuf::from(DEFAULT_JSON_PATH)
}

fn default_csv_path() -> PathBuf {
    PathBuf::from(DEFAULT_CSV_PATH)
}

fn default_delay_ms() -> u64 {
    1000
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            urls: default_urls(),
            json_path: default_json_path(),
            csv_path: default_csv_path(),
            delay_ms: default_delay_ms(),
        }
    }
}

impl InventoryConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Check that there is something to scrape and every URL is absolute
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.urls.is_empty() {
            return Err(ConfigError::NoUrls);
        }

        for url in &self.urls {
            Url::parse(url).map_err(|source| ConfigError::InvalidUrl {
                url: url.clone(),
                source,
            })?;
        }

        Ok(())
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
