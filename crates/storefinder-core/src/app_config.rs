use std::path::PathBuf;

pub const DEFAULT_GEOCODER_BASE_URL: &str = "https://nominatim.openstreetmap.org/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// CSV store catalog searched for the nearest match.
    pub catalog_path: PathBuf,
    /// Fallback `tracing` filter when `RUST_LOG` is unset.
    pub log_level: String,
    pub geocoder_base_url: String,
    /// Whole-request timeout for a geocoder call.
    pub geocoder_timeout_secs: u64,
    pub geocoder_connect_timeout_secs: u64,
    /// Nominatim's usage policy requires an identifying `User-Agent`.
    pub geocoder_user_agent: String,
}
