pub mod app_config;
pub mod category;
pub mod config;
pub mod vendor;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use category::{ImportBatch, VendorCategory};
pub use config::{load_app_config, load_app_config_from_env};
pub use vendor::{VendorField, VendorRecord};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown vendor field: {0}")]
    UnknownField(String),

    #[error("unknown vendor category: {0}")]
    UnknownCategory(String),

    #[error("vendor name must be non-empty")]
    EmptyName,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
