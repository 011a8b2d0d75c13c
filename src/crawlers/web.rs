use crate::crawlers::crawler::{FetchError, Fetcher};
use crate::parsers;
use crate::results::PageResult;
use reqwest::Client;
use std::time::Duration;

/// Fetches pages over HTTP(S) with a default reqwest client
pub struct WebFetcher {
    client: Client,
}

impl WebFetcher {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }
}

impl Fetcher for WebFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
                url: response.url().to_string(),
            });
        }

        Ok(response.text().await?)
    }
}

/// Scrapes every URL in order, pausing `delay` between consecutive requests.
///
/// Always returns one result per URL: fetch failures are recorded, never propagated.
pub async fn scrape_all<F: Fetcher>(fetcher: &F, urls: &[String], delay: Duration) -> Vec<PageResult> {
    let mut results = Vec::with_capacity(urls.len());

    for (i, url) in urls.iter().enumerate() {
        if i > 0 && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        results.push(scrape_page(fetcher, url).await);
    }

    let failed = results.iter().filter(|r| !r.is_success()).count();
    ::log::info!(
        "Scraped {} pages ({} failed)",
        results.len(),
        failed
    );

    results
}

/// Fetches one page and runs the extractors on it
pub async fn scrape_page<F: Fetcher>(fetcher: &F, url: &str) -> PageResult {
    println!("Scraping: {}", url);

    match fetcher.fetch(url).await {
        Ok(body) => {
            let inventory = parsers::extract(&body);
            ::log::info!(
                "Found {} elements in {}",
                inventory.element_count(),
                url
            );
            PageResult::success(url, inventory)
        }
        Err(e) => {
            eprintln!("Error scraping {}: {}", url, e);
            ::log::warn!("Recording failed page {}", url);
            PageResult::failed(url, e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::time::Instant;

    /// Serves canned bodies; unknown URLs answer 404
    struct StubFetcher {
        pages: HashMap<&'static str, &'static str>,
    }

    impl Fetcher for StubFetcher {
        async fn fetch(&self, url: &str) -> Result<String, FetchError> {
            match self.pages.get(url) {
                Some(body) => Ok(body.to_string()),
                None => Err(FetchError::Status {
                    code: 404,
                    reason: "Not Found".to_string(),
                    url: url.to_string(),
                }),
            }
        }
    }

    fn stub() -> StubFetcher {
        let mut pages = HashMap::new();
        pages.insert(
            "https://example.com/a",
            "<html><head><title>A</title></head><body><h1>Alpha</h1></body></html>",
        );
        pages.insert(
            "https://example.com/c",
            r#"<div class="card"><h3>Gamma</h3></div>"#,
        );
        StubFetcher { pages }
    }

    fn urls(list: &[&str]) -> Vec<String> {
        list.iter().map(|u| u.to_string()).collect()
    }

    #[tokio::test]
    async fn test_one_result_per_url_in_order() {
        let urls = urls(&[
            "https://example.com/c",
            "https://example.com/missing",
            "https://example.com/a",
        ]);
        let results = scrape_all(&stub(), &urls, Duration::ZERO).await;

        let got: Vec<&str> = results.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(got, vec![
            "https://example.com/c",
            "https://example.com/missing",
            "https://example.com/a",
        ]);
        assert!(results[0].is_success());
        assert!(!results[1].is_success());
        assert!(results[2].is_success());
    }

    #[tokio::test]
    async fn test_failed_page_records_error() {
        let result = scrape_page(&stub(), "https://example.com/missing").await;

        assert!(result.inventory().is_none());
        assert_eq!(
            result.error(),
            Some("404 Not Found for url: https://example.com/missing")
        );
    }

    #[tokio::test]
    async fn test_successful_page_is_extracted() {
        let result = scrape_page(&stub(), "https://example.com/a").await;
        let inventory = result.inventory().unwrap();

        assert_eq!(inventory.page_title, "A");
        assert_eq!(inventory.headings.len(), 1);
        assert_eq!(inventory.headings[0].text, "Alpha");
    }

    #[tokio::test]
    async fn test_delay_between_requests() {
        let urls = urls(&[
            "https://example.com/a",
            "https://example.com/c",
            "https://example.com/a",
        ]);
        let delay = Duration::from_millis(20);

        let start = Instant::now();
        let results = scrape_all(&stub(), &urls, delay).await;

        assert_eq!(results.len(), 3);
        assert!(start.elapsed() >= delay * 2);
    }

    #[tokio::test]
    async fn test_connection_failure_is_request_error() {
        let fetcher = WebFetcher::new().unwrap();
        let result = fetcher.fetch("http://127.0.0.1:1/").await;
        assert!(matches!(result, Err(FetchError::Request(_))));
    }
}
