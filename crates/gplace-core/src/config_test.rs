use std::collections::HashMap;
use std::env::VarError;

use super::*;
use crate::app_config::{DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS};

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

/// Returns a map with all required env vars populated.
fn full_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("GOOGLE_MAPS_API_KEY", "test-key");
    m
}

#[test]
fn build_resolver_config_fails_without_api_key() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_resolver_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "GOOGLE_MAPS_API_KEY"),
        "expected MissingEnvVar(GOOGLE_MAPS_API_KEY), got: {result:?}"
    );
}

#[test]
fn build_resolver_config_treats_blank_api_key_as_missing() {
    let mut map = HashMap::new();
    map.insert("GOOGLE_MAPS_API_KEY", "   ");
    let result = build_resolver_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::MissingEnvVar(_))));
}

#[test]
fn build_resolver_config_succeeds_with_defaults() {
    let map = full_env();
    let cfg = build_resolver_config(lookup_from_map(&map)).expect("config should build");
    assert_eq!(cfg.api_key, "test-key");
    assert_eq!(cfg.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    assert_eq!(cfg.connect_timeout_secs, DEFAULT_CONNECT_TIMEOUT_SECS);
    assert_eq!(cfg.user_agent, DEFAULT_BROWSER_USER_AGENT);
    assert_eq!(cfg.places_base_url, DEFAULT_PLACES_BASE_URL);
    assert_eq!(cfg.log_level, "info");
}

#[test]
fn request_timeout_override() {
    let mut map = full_env();
    map.insert("GPLACE_REQUEST_TIMEOUT_SECS", "60");
    let cfg = build_resolver_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.request_timeout_secs, 60);
}

#[test]
fn request_timeout_invalid() {
    let mut map = full_env();
    map.insert("GPLACE_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_resolver_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "GPLACE_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(GPLACE_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn zero_connect_timeout_is_rejected() {
    let mut map = full_env();
    map.insert("GPLACE_CONNECT_TIMEOUT_SECS", "0");
    let result = build_resolver_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "GPLACE_CONNECT_TIMEOUT_SECS"),
        "expected InvalidEnvVar(GPLACE_CONNECT_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn user_agent_and_log_level_override() {
    let mut map = full_env();
    map.insert("GPLACE_USER_AGENT", "custom-agent/2.0");
    map.insert("GPLACE_LOG_LEVEL", "gplace_resolver=debug");
    let cfg = build_resolver_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.user_agent, "custom-agent/2.0");
    assert_eq!(cfg.log_level, "gplace_resolver=debug");
}

#[test]
fn places_base_url_must_be_http() {
    let mut map = full_env();
    map.insert("GPLACE_PLACES_BASE_URL", "ftp://example.com/");
    let result = build_resolver_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "GPLACE_PLACES_BASE_URL"),
        "expected InvalidEnvVar(GPLACE_PLACES_BASE_URL), got: {result:?}"
    );
}

#[test]
fn debug_output_redacts_api_key() {
    let mut map = HashMap::new();
    map.insert("GOOGLE_MAPS_API_KEY", "super-secret-key");
    let cfg = build_resolver_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("super-secret-key"));
    assert!(rendered.contains("[redacted]"));
}
