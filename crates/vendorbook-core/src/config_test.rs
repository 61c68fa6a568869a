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
fn parse_environment_known_values() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_is_error() {
    assert!(parse_environment("staging").is_err());
}

#[test]
fn parse_bool_accepts_common_spellings() {
    assert_eq!(parse_bool("TRUE"), Ok(true));
    assert_eq!(parse_bool("on"), Ok(true));
    assert_eq!(parse_bool("0"), Ok(false));
    assert_eq!(parse_bool(" no "), Ok(false));
    assert!(parse_bool("maybe").is_err());
}

#[test]
fn build_app_config_uses_defaults_when_env_is_empty() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.min_name_chars, 3);
    assert!(cfg.default_category.is_none());
    assert!(cfg.pretty_json);
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("VENDORBOOK_ENV", "production");
    map.insert("VENDORBOOK_LOG_LEVEL", "debug");
    map.insert("VENDORBOOK_MIN_NAME_CHARS", "5");
    map.insert("VENDORBOOK_DEFAULT_CATEGORY", "caterer");
    map.insert("VENDORBOOK_PRETTY_JSON", "false");

    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(cfg.min_name_chars, 5);
    assert_eq!(cfg.default_category, Some(VendorCategory::Caterer));
    assert!(!cfg.pretty_json);
}

#[test]
fn build_app_config_blank_category_is_none() {
    let mut map = HashMap::new();
    map.insert("VENDORBOOK_DEFAULT_CATEGORY", "  ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.default_category.is_none());
}

#[test]
fn build_app_config_fails_with_invalid_environment() {
    let mut map = HashMap::new();
    map.insert("VENDORBOOK_ENV", "staging");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "VENDORBOOK_ENV"),
        "expected InvalidEnvVar(VENDORBOOK_ENV), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_with_invalid_min_name_chars() {
    let mut map = HashMap::new();
    map.insert("VENDORBOOK_MIN_NAME_CHARS", "three");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "VENDORBOOK_MIN_NAME_CHARS"),
        "expected InvalidEnvVar(VENDORBOOK_MIN_NAME_CHARS), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_with_unknown_category() {
    let mut map = HashMap::new();
    map.insert("VENDORBOOK_DEFAULT_CATEGORY", "juggler");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "VENDORBOOK_DEFAULT_CATEGORY"),
        "expected InvalidEnvVar(VENDORBOOK_DEFAULT_CATEGORY), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_with_invalid_pretty_flag() {
    let mut map = HashMap::new();
    map.insert("VENDORBOOK_PRETTY_JSON", "sometimes");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "VENDORBOOK_PRETTY_JSON"),
        "expected InvalidEnvVar(VENDORBOOK_PRETTY_JSON), got: {result:?}"
    );
}
