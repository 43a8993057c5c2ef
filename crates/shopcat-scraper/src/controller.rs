//! Pagination controller: drives page fetches until the feed is exhausted,
//! the page ceiling is hit, or too many pages fail in a row.
//!
//! ## State machine
//!
//! ```text
//! Fetching(p) --Items--> Fetching(p+1)            (after page delay)
//!             --Items--> Stopped(PageCeiling)     when p >= max_pages
//!             --Empty--> Stopped(FeedExhausted)
//!             --Error--> ErrorBackoff(p, n)
//! ErrorBackoff(p, n) --> Stopped(TooManyErrors)   when n >= max_consecutive_errors
//!                    --> Fetching(p+1)            otherwise, no delay
//! ```
//!
//! A failed page is skipped, never re-requested. Rows accumulated before the
//! run stops are always returned, whatever the stop reason.

use std::fmt;
use std::time::Duration;

use shopcat_core::{AppConfig, NormalizedRow};

use crate::fetch::{PageFetcher, PageOutcome};
use crate::normalize::{normalize_variant, NormalizeOutcome};
use crate::store::VariantStore;
use crate::types::RawProduct;

/// Limits and pacing for one scrape run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrapeConfig {
    /// A successful page at or beyond this index ends the run.
    pub max_pages: u32,
    /// Consecutive failed pages that end the run.
    pub max_consecutive_errors: u32,
    /// Pause after each successful page before requesting the next.
    pub page_delay: Duration,
}

impl Default for ScrapeConfig {
    /// 100 pages of 250 covers the feed's 25,000-item cap.
    fn default() -> Self {
        Self {
            max_pages: 100,
            max_consecutive_errors: 5,
            page_delay: Duration::from_millis(100),
        }
    }
}

impl From<&AppConfig> for ScrapeConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            max_pages: config.max_pages,
            max_consecutive_errors: config.max_consecutive_errors,
            page_delay: Duration::from_millis(config.page_delay_ms),
        }
    }
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// An empty page signalled the end of the feed.
    FeedExhausted,
    /// The configured page ceiling was reached.
    PageCeiling,
    /// Too many consecutive pages failed.
    TooManyErrors,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::FeedExhausted => write!(f, "feed exhausted"),
            StopReason::PageCeiling => write!(f, "page ceiling reached"),
            StopReason::TooManyErrors => write!(f, "too many errors"),
        }
    }
}

/// Controller state; see the module docs for transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Fetching { page: u32 },
    ErrorBackoff { page: u32, consecutive_errors: u32 },
    Stopped(StopReason),
}

/// Position and error streak of a run in progress.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScrapeRunState {
    pub current_page: u32,
    pub consecutive_error_count: u32,
}

/// Everything a finished run produced.
#[derive(Debug)]
pub struct ScrapeReport {
    /// Deduplicated rows in first-seen order.
    pub rows: Vec<NormalizedRow>,
    pub stop_reason: StopReason,
    /// Total page requests issued, failed ones included.
    pub pages_requested: u32,
    pub pages_failed: u32,
    /// Distinct variant IDs recorded.
    pub variants_seen: usize,
    pub gift_cards_skipped: usize,
    /// Variants dropped because their ID was already recorded.
    pub duplicates_dropped: usize,
    /// Run state at the moment the run stopped.
    pub final_state: ScrapeRunState,
}

/// Drives a [`PageFetcher`] through the pagination state machine.
pub struct ScrapeController<F> {
    fetcher: F,
    config: ScrapeConfig,
    run: ScrapeRunState,
    store: VariantStore,
    pages_requested: u32,
    pages_failed: u32,
    gift_cards_skipped: usize,
    duplicates_dropped: usize,
}

impl<F: PageFetcher> ScrapeController<F> {
    #[must_use]
    pub fn new(fetcher: F, config: ScrapeConfig) -> Self {
        Self {
            fetcher,
            config,
            run: ScrapeRunState::default(),
            store: VariantStore::new(),
            pages_requested: 0,
            pages_failed: 0,
            gift_cards_skipped: 0,
            duplicates_dropped: 0,
        }
    }

    /// Runs the fetch loop from page 1 until a stop condition is reached.
    pub async fn run(mut self) -> ScrapeReport {
        let mut state = ControllerState::Fetching { page: 1 };

        let stop_reason = loop {
            state = match state {
                ControllerState::Fetching { page } => {
                    self.run.current_page = page;
                    self.pages_requested += 1;
                    let outcome = self.fetcher.fetch_page(page).await;
                    let next = self.apply_outcome(page, outcome);
                    // Only a successful page leads straight back to Fetching.
                    if matches!(next, ControllerState::Fetching { .. })
                        && !self.config.page_delay.is_zero()
                    {
                        tokio::time::sleep(self.config.page_delay).await;
                    }
                    next
                }
                ControllerState::ErrorBackoff {
                    page,
                    consecutive_errors,
                } => {
                    if consecutive_errors >= self.config.max_consecutive_errors {
                        ControllerState::Stopped(StopReason::TooManyErrors)
                    } else {
                        ControllerState::Fetching {
                            page: page.saturating_add(1),
                        }
                    }
                }
                ControllerState::Stopped(reason) => break reason,
            };
        };

        tracing::info!(
            reason = %stop_reason,
            last_page = self.run.current_page,
            pages_requested = self.pages_requested,
            rows = self.store.rows().len(),
            "scrape stopped"
        );

        ScrapeReport {
            variants_seen: self.store.seen_count(),
            rows: self.store.into_rows(),
            stop_reason,
            pages_requested: self.pages_requested,
            pages_failed: self.pages_failed,
            gift_cards_skipped: self.gift_cards_skipped,
            duplicates_dropped: self.duplicates_dropped,
            final_state: self.run,
        }
    }

    /// Applies one fetch outcome for `page` and returns the next state.
    fn apply_outcome(&mut self, page: u32, outcome: PageOutcome) -> ControllerState {
        match outcome {
            PageOutcome::Error(e) => {
                self.pages_failed += 1;
                self.run.consecutive_error_count += 1;
                tracing::warn!(
                    page,
                    consecutive_errors = self.run.consecutive_error_count,
                    max_consecutive_errors = self.config.max_consecutive_errors,
                    error = %e,
                    "skipping failed page"
                );
                ControllerState::ErrorBackoff {
                    page,
                    consecutive_errors: self.run.consecutive_error_count,
                }
            }
            PageOutcome::Empty => {
                self.run.consecutive_error_count = 0;
                ControllerState::Stopped(StopReason::FeedExhausted)
            }
            // `FeedClient` never yields this, but other fetchers may.
            PageOutcome::Items(products) if products.is_empty() => {
                self.run.consecutive_error_count = 0;
                ControllerState::Stopped(StopReason::FeedExhausted)
            }
            PageOutcome::Items(products) => {
                self.run.consecutive_error_count = 0;
                let added = self.ingest(&products);
                tracing::debug!(page, added, total = self.store.rows().len(), "page ingested");

                if page >= self.config.max_pages {
                    ControllerState::Stopped(StopReason::PageCeiling)
                } else {
                    ControllerState::Fetching {
                        page: page.saturating_add(1),
                    }
                }
            }
        }
    }

    /// Normalizes and records every variant of a page in feed order.
    /// Returns the number of new rows.
    fn ingest(&mut self, products: &[RawProduct]) -> usize {
        let mut added = 0;
        for product in products {
            for variant in &product.variants {
                match normalize_variant(product, variant) {
                    NormalizeOutcome::GiftCard => self.gift_cards_skipped += 1,
                    NormalizeOutcome::Row(row) => {
                        if self.store.record(variant.id, row) {
                            added += 1;
                        } else {
                            self.duplicates_dropped += 1;
                        }
                    }
                }
            }
        }
        added
    }
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;
