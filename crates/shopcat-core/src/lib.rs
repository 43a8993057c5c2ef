pub mod app_config;
pub mod config;
pub mod rows;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use rows::{NormalizedRow, DATASET_HEADER, FALLBACK_CATEGORY};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
