//! Page-fetch outcome and the seam between the controller and the network.

use std::future::Future;

use crate::error::ScraperError;
use crate::types::RawProduct;

/// Classified result of requesting one feed page.
#[derive(Debug)]
pub enum PageOutcome {
    /// Successful response carrying at least one product.
    Items(Vec<RawProduct>),
    /// Successful response with no products: the feed is exhausted.
    Empty,
    /// Transport failure, non-success status, or unreadable body.
    Error(ScraperError),
}

impl PageOutcome {
    /// Classifies a parsed page, mapping an empty product list to [`PageOutcome::Empty`].
    #[must_use]
    pub fn from_products(products: Vec<RawProduct>) -> Self {
        if products.is_empty() {
            PageOutcome::Empty
        } else {
            PageOutcome::Items(products)
        }
    }
}

impl From<Result<Vec<RawProduct>, ScraperError>> for PageOutcome {
    fn from(result: Result<Vec<RawProduct>, ScraperError>) -> Self {
        match result {
            Ok(products) => PageOutcome::from_products(products),
            Err(e) => PageOutcome::Error(e),
        }
    }
}

/// Source of feed pages for [`crate::ScrapeController`].
///
/// Implementations issue exactly one request per call and never retry.
pub trait PageFetcher {
    /// Fetches the 1-based `page` and classifies the result.
    fn fetch_page(&self, page: u32) -> impl Future<Output = PageOutcome> + Send;
}
