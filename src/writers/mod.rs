pub mod csv;
pub mod json;

use crate::results::PageResult;
use std::path::Path;
use thiserror::Error;

/// Errors raised while writing export files
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV serialization failed: {0}")]
    Csv(#[from] ::csv::Error),
}

/// Write both exports, overwriting whatever is at the given paths
pub fn export_all(
    results: &[PageResult],
    json_path: impl AsRef<Path>,
    csv_path: impl AsRef<Path>,
) -> Result<(), ExportError> {
    json::write_file(json_path.as_ref(), results)?;
    ::log::info!("Wrote JSON inventory to {}", json_path.as_ref().display());

    let rows = csv::write_file(csv_path.as_ref(), results)?;
    ::log::info!(
        "Wrote {} CSV rows to {}",
        rows,
        csv_path.as_ref().display()
    );

    Ok(())
}
