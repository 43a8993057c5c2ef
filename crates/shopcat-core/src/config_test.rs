use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn build_app_config_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.feed_url, "https://www.jbhifi.co.nz");
    assert_eq!(cfg.page_size, 250);
    assert_eq!(cfg.max_pages, 100);
    assert_eq!(cfg.max_consecutive_errors, 5);
    assert_eq!(cfg.page_delay_ms, 100);
    assert_eq!(cfg.request_timeout_secs, 20);
    assert_eq!(cfg.user_agent, "shopcat/0.1 (catalog-scraper)");
    assert_eq!(
        cfg.output_path,
        std::path::PathBuf::from("products_with_category.csv")
    );
    assert_eq!(cfg.log_level, "info");
}

#[test]
fn build_app_config_applies_overrides() {
    let mut map = HashMap::new();
    map.insert("SHOPCAT_FEED_URL", "https://shop.example.com/collections/all");
    map.insert("SHOPCAT_PAGE_SIZE", "50");
    map.insert("SHOPCAT_MAX_PAGES", "3");
    map.insert("SHOPCAT_MAX_CONSECUTIVE_ERRORS", "2");
    map.insert("SHOPCAT_PAGE_DELAY_MS", "0");
    map.insert("SHOPCAT_OUTPUT_PATH", "/tmp/out.csv");
    map.insert("SHOPCAT_LOG_LEVEL", "debug");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.feed_url, "https://shop.example.com/collections/all");
    assert_eq!(cfg.page_size, 50);
    assert_eq!(cfg.max_pages, 3);
    assert_eq!(cfg.max_consecutive_errors, 2);
    assert_eq!(cfg.page_delay_ms, 0);
    assert_eq!(cfg.output_path, std::path::PathBuf::from("/tmp/out.csv"));
    assert_eq!(cfg.log_level, "debug");
}

#[test]
fn build_app_config_rejects_non_numeric_page_size() {
    let mut map = HashMap::new();
    map.insert("SHOPCAT_PAGE_SIZE", "lots");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SHOPCAT_PAGE_SIZE"),
        "expected InvalidEnvVar(SHOPCAT_PAGE_SIZE), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_page_size_above_feed_cap() {
    let mut map = HashMap::new();
    map.insert("SHOPCAT_PAGE_SIZE", "251");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SHOPCAT_PAGE_SIZE"),
        "expected InvalidEnvVar(SHOPCAT_PAGE_SIZE), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_zero_error_ceiling() {
    let mut map = HashMap::new();
    map.insert("SHOPCAT_MAX_CONSECUTIVE_ERRORS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SHOPCAT_MAX_CONSECUTIVE_ERRORS"),
        "expected InvalidEnvVar(SHOPCAT_MAX_CONSECUTIVE_ERRORS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_zero_max_pages() {
    let mut map = HashMap::new();
    map.insert("SHOPCAT_MAX_PAGES", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SHOPCAT_MAX_PAGES"),
        "expected InvalidEnvVar(SHOPCAT_MAX_PAGES), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_zero_timeout() {
    let mut map = HashMap::new();
    map.insert("SHOPCAT_REQUEST_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SHOPCAT_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(SHOPCAT_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_feed_url_without_scheme() {
    let mut map = HashMap::new();
    map.insert("SHOPCAT_FEED_URL", "www.jbhifi.co.nz");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SHOPCAT_FEED_URL"),
        "expected InvalidEnvVar(SHOPCAT_FEED_URL), got: {result:?}"
    );
}

#[test]
fn build_app_config_trims_numeric_whitespace() {
    let mut map = HashMap::new();
    map.insert("SHOPCAT_PAGE_DELAY_MS", " 250 ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.page_delay_ms, 250);
}
