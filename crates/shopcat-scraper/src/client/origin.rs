//! URL origin and domain extraction for the feed client.

/// Extracts the scheme+host origin from a storefront URL.
///
/// Given `"https://www.jbhifi.co.nz/collections/all"`, returns
/// `"https://www.jbhifi.co.nz"`, so `products.json` is always requested from
/// the store root.
#[must_use]
pub fn extract_store_origin(feed_url: &str) -> String {
    reqwest::Url::parse(feed_url).map_or_else(
        |e| {
            tracing::warn!(
                feed_url,
                error = %e,
                "could not parse feed URL; falling back to string split for origin extraction"
            );
            feed_url
                .trim_end_matches('/')
                .splitn(4, '/')
                .take(3)
                .collect::<Vec<_>>()
                .join("/")
        },
        |u| u.origin().ascii_serialization(),
    )
}

/// Extracts the hostname from a feed URL for error messages.
///
/// Falls back to the full URL string if parsing fails.
pub(super) fn extract_domain(feed_url: &str) -> String {
    reqwest::Url::parse(feed_url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_owned))
        .unwrap_or_else(|| feed_url.to_owned())
}
