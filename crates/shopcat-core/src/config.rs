use crate::app_config::AppConfig;
use crate::ConfigError;

/// Shopify's hard cap on `limit` for the public `products.json` endpoint.
const MAX_PAGE_SIZE: u32 = 250;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if any override is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if any override is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<u32>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let feed_url = or_default("SHOPCAT_FEED_URL", "https://www.jbhifi.co.nz");
    if !(feed_url.starts_with("https://") || feed_url.starts_with("http://")) {
        return Err(ConfigError::InvalidEnvVar {
            var: "SHOPCAT_FEED_URL".to_string(),
            reason: format!("\"{feed_url}\" must start with http:// or https://"),
        });
    }

    let page_size = parse_u32("SHOPCAT_PAGE_SIZE", "250")?;
    if page_size == 0 || page_size > MAX_PAGE_SIZE {
        return Err(ConfigError::InvalidEnvVar {
            var: "SHOPCAT_PAGE_SIZE".to_string(),
            reason: format!("must be between 1 and {MAX_PAGE_SIZE}, got {page_size}"),
        });
    }

    let max_pages = require_positive("SHOPCAT_MAX_PAGES", parse_u32("SHOPCAT_MAX_PAGES", "100")?)?;
    let max_consecutive_errors = require_positive(
        "SHOPCAT_MAX_CONSECUTIVE_ERRORS",
        parse_u32("SHOPCAT_MAX_CONSECUTIVE_ERRORS", "5")?,
    )?;
    let page_delay_ms = parse_u64("SHOPCAT_PAGE_DELAY_MS", "100")?;
    let request_timeout_secs = parse_u64("SHOPCAT_REQUEST_TIMEOUT_SECS", "20")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "SHOPCAT_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    let user_agent = or_default("SHOPCAT_USER_AGENT", "shopcat/0.1 (catalog-scraper)");
    let output_path = PathBuf::from(or_default(
        "SHOPCAT_OUTPUT_PATH",
        "products_with_category.csv",
    ));
    let log_level = or_default("SHOPCAT_LOG_LEVEL", "info");

    Ok(AppConfig {
        feed_url,
        page_size,
        max_pages,
        max_consecutive_errors,
        page_delay_ms,
        request_timeout_secs,
        user_agent,
        output_path,
        log_level,
    })
}

fn require_positive(var: &str, value: u32) -> Result<u32, ConfigError> {
    if value == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    Ok(value)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
