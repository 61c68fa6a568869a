use crate::VendorCategory;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Unclassified lines must be strictly longer than this many characters
    /// to be taken as a vendor name.
    pub min_name_chars: usize,
    /// Category tag applied to batches when the caller does not pick one.
    pub default_category: Option<VendorCategory>,
    pub pretty_json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            env: Environment::Development,
            log_level: "info".to_string(),
            min_name_chars: 3,
            default_category: None,
            pretty_json: true,
        }
    }
}
