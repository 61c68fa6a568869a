use crate::app_config::{AppConfig, Environment};
use crate::{ConfigError, VendorCategory};

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but holds an invalid value.
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
/// Returns `ConfigError` if a variable is present but holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional; absent ones fall back to [`AppConfig::default`].
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let defaults = AppConfig::default();

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let env = match lookup("VENDORBOOK_ENV") {
        Ok(raw) => parse_environment(&raw).map_err(|e| invalid("VENDORBOOK_ENV", e))?,
        Err(_) => defaults.env,
    };

    let log_level = lookup("VENDORBOOK_LOG_LEVEL").unwrap_or(defaults.log_level);

    let min_name_chars = match lookup("VENDORBOOK_MIN_NAME_CHARS") {
        Ok(raw) => raw
            .trim()
            .parse::<usize>()
            .map_err(|e| invalid("VENDORBOOK_MIN_NAME_CHARS", e.to_string()))?,
        Err(_) => defaults.min_name_chars,
    };

    let default_category = match lookup("VENDORBOOK_DEFAULT_CATEGORY") {
        Ok(raw) if raw.trim().is_empty() => None,
        Ok(raw) => Some(
            raw.parse::<VendorCategory>()
                .map_err(|e| invalid("VENDORBOOK_DEFAULT_CATEGORY", e.to_string()))?,
        ),
        Err(_) => defaults.default_category,
    };

    let pretty_json = match lookup("VENDORBOOK_PRETTY_JSON") {
        Ok(raw) => parse_bool(&raw).map_err(|e| invalid("VENDORBOOK_PRETTY_JSON", e))?,
        Err(_) => defaults.pretty_json,
    };

    Ok(AppConfig {
        env,
        log_level,
        min_name_chars,
        default_category,
        pretty_json,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, String> {
    match s.trim() {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(format!(
            "unknown environment '{other}'; expected development, test, or production"
        )),
    }
}

fn parse_bool(s: &str) -> Result<bool, String> {
    match s.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(format!("expected a boolean, got '{other}'")),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
