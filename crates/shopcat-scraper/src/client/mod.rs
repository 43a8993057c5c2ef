//! HTTP client for a storefront's public `products.json` feed.

mod origin;

use std::time::Duration;

use reqwest::Client;

use crate::error::ScraperError;
use crate::fetch::{PageFetcher, PageOutcome};
use crate::types::{ProductsPage, RawProduct};

pub use origin::extract_store_origin;
#[cfg(test)]
use origin::extract_domain;

/// Fetches numbered pages of a storefront's `products.json` feed.
///
/// One request per call, bounded by the configured timeout. 429, 404 and
/// any other non-200 response surface as typed errors; nothing is retried here.
pub struct FeedClient {
    client: Client,
    /// Store origin, e.g. `https://www.jbhifi.co.nz`.
    origin: String,
    page_size: u32,
}

impl FeedClient {
    /// Creates a `FeedClient` for `feed_url` with the given page size, request
    /// timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidFeedUrl`] if no valid origin can be derived from `feed_url`.
    /// - [`ScraperError::Http`] if the underlying `reqwest::Client` cannot be built.
    pub fn new(
        feed_url: &str,
        page_size: u32,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ScraperError> {
        // Validate once up front so every page request can build its URL.
        Self::products_url(feed_url, page_size, 1)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.min(10)))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            origin: extract_store_origin(feed_url),
            page_size,
        })
    }

    /// Origin all page requests are sent to.
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Fetches one page of products.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::RateLimited`] for HTTP 429.
    /// - [`ScraperError::NotFound`] for HTTP 404.
    /// - [`ScraperError::UnexpectedStatus`] for any other status than 200.
    /// - [`ScraperError::Http`] for network, TLS or timeout failures.
    /// - [`ScraperError::Deserialize`] when the body is not a products page.
    pub async fn fetch_products_page(&self, page: u32) -> Result<Vec<RawProduct>, ScraperError> {
        let url = Self::products_url(&self.origin, self.page_size, page)?;
        tracing::debug!(%url, page, "fetching feed page");

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after_secs = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.trim().parse::<u64>().ok())
                .unwrap_or(60);

            return Err(ScraperError::RateLimited {
                domain: origin::extract_domain(&self.origin),
                retry_after_secs,
            });
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ScraperError::NotFound { url });
        }

        if status != reqwest::StatusCode::OK {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        let parsed = serde_json::from_str::<ProductsPage>(&body).map_err(|e| {
            ScraperError::Deserialize {
                context: format!("products page {page} from {}", self.origin),
                source: e,
            }
        })?;

        Ok(parsed.products)
    }

    /// Builds the `products.json` URL for the given store, page size and page.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidFeedUrl`] if the extracted origin cannot
    /// be parsed as a valid URL base.
    fn products_url(feed_url: &str, limit: u32, page: u32) -> Result<String, ScraperError> {
        let origin = extract_store_origin(feed_url);
        let base = format!("{origin}/products.json");
        let mut url = reqwest::Url::parse(&base).map_err(|e| ScraperError::InvalidFeedUrl {
            feed_url: feed_url.to_owned(),
            reason: format!("origin \"{origin}\" is not a valid URL base: {e}"),
        })?;

        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string())
            .append_pair("page", &page.to_string());

        Ok(url.to_string())
    }
}

impl PageFetcher for FeedClient {
    async fn fetch_page(&self, page: u32) -> PageOutcome {
        let outcome = PageOutcome::from(self.fetch_products_page(page).await);
        match &outcome {
            PageOutcome::Items(products) => {
                tracing::info!(page, products = products.len(), "fetched feed page");
            }
            PageOutcome::Empty => tracing::info!(page, "feed page is empty"),
            PageOutcome::Error(e) if e.is_timeout() => {
                tracing::warn!(page, error = %e, "feed page timed out");
            }
            PageOutcome::Error(e) => tracing::warn!(page, error = %e, "feed page failed"),
        }
        outcome
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
