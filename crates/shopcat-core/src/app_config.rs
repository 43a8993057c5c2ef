use std::path::PathBuf;

/// Runtime configuration for one scrape run.
///
/// Every field has a default, so a bare invocation with no environment
/// overrides scrapes the default feed into the default output file.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Storefront URL; only its origin is used to build feed requests.
    pub feed_url: String,
    /// Products requested per page (`limit` query parameter).
    pub page_size: u32,
    /// Last page index fetched after a successful page.
    pub max_pages: u32,
    /// Consecutive failed pages that end the run.
    pub max_consecutive_errors: u32,
    /// Fixed pause between successful page fetches.
    pub page_delay_ms: u64,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Destination of the CSV dataset.
    pub output_path: PathBuf,
    pub log_level: String,
}
