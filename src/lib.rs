pub mod config;
pub mod crawlers;
pub mod parsers;
pub mod results;
pub mod utils;
pub mod writers;

// Re-export commonly used types for convenience
pub use config::InventoryConfig;
pub use crawlers::{FetchError, Fetcher, WebFetcher};
pub use results::{PageOutcome, PageResult};
pub use writers::ExportError;

use std::path::PathBuf;

/// Main builder for an inventory run over a list of pages
pub struct Inventory {
    config: InventoryConfig,
}

impl Inventory {
    /// Create a new Inventory builder from a configuration
    pub fn new(config: InventoryConfig) -> Self {
        Self { config }
    }

    /// Set the pause between consecutive requests
    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.config.delay_ms = delay_ms;
        self
    }

    /// Set where the JSON and CSV exports are written
    pub fn with_output_paths(mut self, json_path: impl Into<PathBuf>, csv_path: impl Into<PathBuf>) -> Self {
        self.config.json_path = json_path.into();
        self.config.csv_path = csv_path.into();
        self
    }

    pub fn config(&self) -> &InventoryConfig {
        &self.config
    }

    /// Scrape every configured page, one after another
    pub async fn run<F: Fetcher>(&self, fetcher: &F) -> Vec<PageResult> {
        ::log::info!("Starting inventory of {} pages", self.config.urls.len());
        crawlers::web::scrape_all(fetcher, &self.config.urls, self.config.delay()).await
    }

    /// Write the JSON and CSV exports, replacing any previous files
    pub fn export(&self, results: &[PageResult]) -> Result<(), ExportError> {
        writers::export_all(results, &self.config.json_path, &self.config.csv_path)
    }
}
