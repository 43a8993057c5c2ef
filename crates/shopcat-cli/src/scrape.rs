//! `scrape` command: run the pagination controller and write the dataset.

use anyhow::Context;
use shopcat_scraper::{FeedClient, ScrapeConfig, ScrapeController, ScrapeReport};

/// Scrapes the configured feed and writes every collected row to
/// `config.output_path`.
///
/// Page failures never fail the command; rows gathered before the run stopped
/// are written whatever the stop reason.
///
/// # Errors
///
/// Returns an error if the feed client cannot be built or the dataset file
/// cannot be written.
pub(crate) async fn run_scrape(config: &shopcat_core::AppConfig) -> anyhow::Result<()> {
    let client = FeedClient::new(
        &config.feed_url,
        config.page_size,
        config.request_timeout_secs,
        &config.user_agent,
    )
    .context("failed to build feed client")?;

    tracing::info!(
        origin = client.origin(),
        page_size = config.page_size,
        max_pages = config.max_pages,
        "starting scrape"
    );

    let report = ScrapeController::new(client, ScrapeConfig::from(config))
        .run()
        .await;
    log_summary(&report);

    let written = shopcat_dataset::write_dataset(&config.output_path, &report.rows)
        .with_context(|| {
            format!(
                "failed to write dataset to {}",
                config.output_path.display()
            )
        })?;

    tracing::info!(
        path = %config.output_path.display(),
        rows = written,
        "saved products"
    );
    Ok(())
}

fn log_summary(report: &ScrapeReport) {
    tracing::info!(
        variants_seen = report.variants_seen,
        rows_kept = report.rows.len(),
        discounted = report.rows.iter().filter(|r| r.is_discounted()).count(),
        gift_cards_skipped = report.gift_cards_skipped,
        duplicates_dropped = report.duplicates_dropped,
        pages_requested = report.pages_requested,
        pages_failed = report.pages_failed,
        stop_reason = %report.stop_reason,
        "scrape summary"
    );
    if report.rows.is_empty() {
        tracing::warn!(stop_reason = %report.stop_reason, "scrape produced no rows");
    }
}
