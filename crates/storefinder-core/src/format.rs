//! Rendering of the nearest-store result for the terminal or for machines.

use serde::Serialize;
use thiserror::Error;

use crate::distance::Unit;
use crate::nearest::NearestStore;
use crate::store::StoreRecord;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("failed to serialize result as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// The winning store with its distance expressed in the requested unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreMatch {
    #[serde(flatten)]
    pub store: StoreRecord,
    #[serde(rename = "distance_to_store")]
    pub distance: f64,
    #[serde(rename = "units")]
    pub unit: Unit,
}

impl StoreMatch {
    #[must_use]
    pub fn new(nearest: NearestStore, unit: Unit) -> Self {
        Self {
            distance: unit.from_km(nearest.distance_km),
            store: nearest.store,
            unit,
        }
    }
}

/// Render a match.
///
/// Text is two lines: the store's postal address, then the distance rounded
/// to two decimals. JSON is one flat object holding every store field plus
/// `distance_to_store` at full precision and `units`.
///
/// # Errors
///
/// Returns [`FormatError::Json`] if JSON serialization fails.
pub fn render(found: &StoreMatch, format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Text => Ok(format!(
            "{}\nDistance to store: {:.2}",
            found.store.address_line(),
            found.distance
        )),
        OutputFormat::Json => Ok(serde_json::to_string(found)?),
    }
}
