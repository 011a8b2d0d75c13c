pub mod crawler;
pub mod web;

pub use crawler::{FetchError, Fetcher};
pub use web::WebFetcher;
