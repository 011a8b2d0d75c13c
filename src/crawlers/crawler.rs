use thiserror::Error;

/// Why a page could not be fetched
#[derive(Debug, Error)]
pub enum FetchError {
    /// Server answered with a non-2xx status
    #[error("{code} {reason} for url: {url}")]
    Status {
        code: u16,
        reason: String,
        url: String,
    },

    /// Transport-level failure (DNS, connection, TLS, body decoding)
    #[error("{0}")]
    Request(#[from] reqwest::Error),
}

// Base trait for page sources
pub trait Fetcher {
    /// Fetch the body of a page, failing on transport errors and non-2xx statuses
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}
