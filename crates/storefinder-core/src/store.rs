//! Store catalog records and geographic coordinates.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when a latitude/longitude pair is not a usable point on the globe.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    #[error("coordinate components must be finite (got {latitude}, {longitude})")]
    NotFinite { latitude: f64, longitude: f64 },

    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}

/// A point on the globe in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Builds a coordinate, rejecting non-finite or out-of-range degrees.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError`] when either component is NaN/infinite or
    /// falls outside the valid latitude/longitude range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(CoordinateError::NotFinite {
                latitude,
                longitude,
            });
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// One row of the store catalog.
///
/// Field order matches the catalog's CSV columns and the key order of the
/// JSON output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreRecord {
    pub name: String,
    pub location: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub county: String,
}

impl StoreRecord {
    /// The store's position as a validated [`Coordinate`].
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError`] if the record carries out-of-range degrees.
    /// Records produced by the catalog loader are already validated.
    pub fn coordinate(&self) -> Result<Coordinate, CoordinateError> {
        Coordinate::new(self.latitude, self.longitude)
    }

    /// Single-line postal address: `address, city, state, zip`.
    #[must_use]
    pub fn address_line(&self) -> String {
        format!(
            "{}, {}, {}, {}",
            self.address, self.city, self.state, self.zip_code
        )
    }
}

impl std::fmt::Display for StoreRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} located at {}", self.name, self.address_line())
    }
}

#[cfg(test)]
pub(crate) fn crystal_store() -> StoreRecord {
    StoreRecord {
        name: "Crystal".to_string(),
        location: "SWC Broadway & Bass Lake Rd".to_string(),
        address: "5537 W Broadway Ave".to_string(),
        city: "Crystal".to_string(),
        state: "MN".to_string(),
        zip_code: "55428-3507".to_string(),
        latitude: 45.052_153_9,
        longitude: -93.364_854,
        county: "Hennepin County".to_string(),
    }
}
