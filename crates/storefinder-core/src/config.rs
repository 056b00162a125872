use crate::app_config::{AppConfig, DEFAULT_GEOCODER_BASE_URL};
use crate::ConfigError;

/// Read the store finder's settings, letting a `.env` file in the working
/// directory (or an ancestor) fill in variables the shell did not set.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Read settings from the process environment only; no `.env` lookup.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build configuration from an env-var lookup so tests can feed a plain map.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let catalog_path = PathBuf::from(or_default(
        "STOREFINDER_CATALOG_PATH",
        "./store-locations.csv",
    ));
    let log_level = or_default("STOREFINDER_LOG_LEVEL", "warn");

    let geocoder_base_url = or_default("STOREFINDER_GEOCODER_BASE_URL", DEFAULT_GEOCODER_BASE_URL);
    if geocoder_base_url.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "STOREFINDER_GEOCODER_BASE_URL".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    let parse_secs = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let secs = parse_u64(var, default)?;
        if secs == 0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(secs)
    };

    let geocoder_timeout_secs = parse_secs("STOREFINDER_GEOCODER_TIMEOUT_SECS", "10")?;
    let geocoder_connect_timeout_secs =
        parse_secs("STOREFINDER_GEOCODER_CONNECT_TIMEOUT_SECS", "10")?;

    let geocoder_user_agent = or_default(
        "STOREFINDER_GEOCODER_USER_AGENT",
        "storefinder/0.1 (nearest-store-lookup)",
    );

    Ok(AppConfig {
        catalog_path,
        log_level,
        geocoder_base_url,
        geocoder_timeout_secs,
        geocoder_connect_timeout_secs,
        geocoder_user_agent,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
