use clap::Parser;
use page_inventory::{Inventory, WebFetcher};
use std::process::ExitCode;

mod args;
use args::Args;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let config = match args.load_config() {
        Ok(config) => config,
        Err(e) => {
            ::log::error!("Invalid configuration: {}", e);
            eprintln!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let fetcher = match WebFetcher::new() {
        Ok(fetcher) => fetcher,
        Err(e) => {
            ::log::error!("Failed to build HTTP client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let inventory = Inventory::new(config);
    let start_time = std::time::Instant::now();
    let results = inventory.run(&fetcher).await;

    if let Err(e) = inventory.export(&results) {
        ::log::error!("Failed to write exports: {}", e);
        eprintln!("Failed to write exports: {}", e);
        return ExitCode::FAILURE;
    }

    ::log::info!(
        "Inventory complete - {} pages in {:.2} seconds",
        results.len(),
        start_time.elapsed().as_secs_f64()
    );
    println!(
        "Enhanced scraping complete! Data saved to {} and {}",
        inventory.config().json_path.display(),
        inventory.config().csv_path.display()
    );

    ExitCode::SUCCESS
}
