//! Core domain for the nearest-store finder: store records, the haversine
//! distance engine, catalog loading, result formatting, and configuration.

pub mod app_config;
pub mod catalog;
pub mod config;
pub mod distance;
pub mod format;
pub mod nearest;
pub mod store;

pub use app_config::AppConfig;
pub use catalog::{load_catalog, load_catalog_from_reader, CatalogError};
pub use config::{load_app_config, load_app_config_from_env};
pub use distance::{haversine_km, km_to_mi, mi_to_km, Unit};
pub use format::{render, FormatError, OutputFormat, StoreMatch};
pub use nearest::{nearest, NearestError, NearestStore};
pub use store::{Coordinate, CoordinateError, StoreRecord};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
