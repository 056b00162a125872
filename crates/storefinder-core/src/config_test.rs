use std::collections::HashMap;
use std::env::VarError;
use std::path::Path;

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
fn build_app_config_uses_defaults_for_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should be valid");
    assert_eq!(cfg.catalog_path, Path::new("./store-locations.csv"));
    assert_eq!(cfg.log_level, "warn");
    assert_eq!(cfg.geocoder_base_url, "https://nominatim.openstreetmap.org/");
    assert_eq!(cfg.geocoder_timeout_secs, 10);
    assert_eq!(cfg.geocoder_connect_timeout_secs, 10);
    assert_eq!(cfg.geocoder_user_agent, "storefinder/0.1 (nearest-store-lookup)");
}

#[test]
fn build_app_config_applies_overrides() {
    let mut map = HashMap::new();
    map.insert("STOREFINDER_CATALOG_PATH", "/data/stores.csv");
    map.insert("STOREFINDER_LOG_LEVEL", "debug");
    map.insert("STOREFINDER_GEOCODER_BASE_URL", "http://localhost:8080");
    map.insert("STOREFINDER_GEOCODER_TIMEOUT_SECS", "3");
    map.insert("STOREFINDER_GEOCODER_CONNECT_TIMEOUT_SECS", "2");
    map.insert("STOREFINDER_GEOCODER_USER_AGENT", "custom-agent/2.0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.catalog_path, Path::new("/data/stores.csv"));
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(cfg.geocoder_base_url, "http://localhost:8080");
    assert_eq!(cfg.geocoder_timeout_secs, 3);
    assert_eq!(cfg.geocoder_connect_timeout_secs, 2);
    assert_eq!(cfg.geocoder_user_agent, "custom-agent/2.0");
}

#[test]
fn build_app_config_rejects_non_numeric_timeout() {
    let mut map = HashMap::new();
    map.insert("STOREFINDER_GEOCODER_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STOREFINDER_GEOCODER_TIMEOUT_SECS"),
        "expected InvalidEnvVar(STOREFINDER_GEOCODER_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_zero_timeout() {
    let mut map = HashMap::new();
    map.insert("STOREFINDER_GEOCODER_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STOREFINDER_GEOCODER_TIMEOUT_SECS"),
        "expected InvalidEnvVar(STOREFINDER_GEOCODER_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_blank_base_url() {
    let mut map = HashMap::new();
    map.insert("STOREFINDER_GEOCODER_BASE_URL", "  ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STOREFINDER_GEOCODER_BASE_URL"),
        "expected InvalidEnvVar(STOREFINDER_GEOCODER_BASE_URL), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_zero_connect_timeout() {
    let mut map = HashMap::new();
    map.insert("STOREFINDER_GEOCODER_CONNECT_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STOREFINDER_GEOCODER_CONNECT_TIMEOUT_SECS"),
        "expected InvalidEnvVar(STOREFINDER_GEOCODER_CONNECT_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn load_app_config_reads_process_env_after_dotenv() {
    // No `.env` ships with the workspace, so both paths see the same env.
    let cfg = load_app_config().expect("config should load");
    assert_eq!(cfg, load_app_config_from_env().unwrap());
}
