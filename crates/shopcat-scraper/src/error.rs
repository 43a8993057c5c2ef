use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("rate limited by {domain} (retry after {retry_after_secs}s)")]
    RateLimited {
        domain: String,
        retry_after_secs: u64,
    },

    #[error("endpoint not found: {url}")]
    NotFound { url: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid feed URL \"{feed_url}\": {reason}")]
    InvalidFeedUrl { feed_url: String, reason: String },
}

impl ScraperError {
    /// Returns `true` for request timeouts, which are reported separately in logs.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, ScraperError::Http(e) if e.is_timeout())
    }
}
