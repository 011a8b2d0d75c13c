use clap::Parser;
use page_inventory::config::{ConfigError, InventoryConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "page-inventory")]
#[command(about = "Inventories headings, tabs, cards and charts of dashboard pages")]
#[command(version)]
pub struct Args {
    /// JSON configuration file (urls, json_path, csv_path, delay_ms)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Page to scrape; repeat to build the list. Replaces the configured URLs
    #[arg(short, long = "url")]
    pub urls: Vec<String>,

    /// Output path for the JSON export
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Output path for the CSV export
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Delay between requests in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

impl Args {
    /// Build the run configuration: defaults, then the config file, then flags
    pub fn load_config(&self) -> Result<InventoryConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => InventoryConfig::from_file(path)?,
            None => InventoryConfig::default(),
        };

        if !self.urls.is_empty() {
            config.urls = self.urls.clone();
        }
        if let Some(path) = &self.json {
            config.json_path = path.clone();
        }
        if let Some(path) = &self.csv {
            config.csv_path = path.clone();
        }
        if let Some(delay_ms) = self.delay_ms {
            config.delay_ms = delay_ms;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_uses_defaults() {
        let args = Args::parse_from(["page-inventory"]);
        assert_eq!(args.load_config().unwrap(), InventoryConfig::default());
    }

    #[test]
    fn test_flags_override() {
        let args = Args::parse_from([
            "page-inventory",
            "--url",
            "https://example.com/one",
            "-u",
            "https://example.com/two",
            "--csv",
            "out.csv",
            "--delay-ms",
            "0",
        ]);
        let config = args.load_config().unwrap();

        assert_eq!(
            config.urls,
            vec!["https://example.com/one", "https://example.com/two"]
        );
        assert_eq!(config.csv_path, PathBuf::from("out.csv"));
        assert_eq!(config.json_path, InventoryConfig::default().json_path);
        assert_eq!(config.delay_ms, 0);
    }

    #[test]
    fn test_invalid_url_flag() {
        let args = Args::parse_from(["page-inventory", "--url", "not a url"]);
        assert!(args.load_config().is_err());
    }
}
