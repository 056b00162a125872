//! Great-circle distance on a spherical Earth.
//!
//! Everything here works in kilometers; miles are derived by a single
//! post-multiplication so the nearest-store search stays unit-agnostic.

use serde::Serialize;

use crate::store::Coordinate;

/// Mean Earth radius.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

pub const KM_TO_MI: f64 = 0.621_371;

/// Distance unit requested for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Unit {
    #[default]
    #[serde(rename = "mi")]
    Miles,
    #[serde(rename = "km")]
    Kilometers,
}

impl Unit {
    /// Express a kilometer distance in this unit.
    #[must_use]
    pub fn from_km(self, km: f64) -> f64 {
        match self {
            Unit::Miles => km_to_mi(km),
            Unit::Kilometers => km,
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unit::Miles => write!(f, "mi"),
            Unit::Kilometers => write!(f, "km"),
        }
    }
}

#[must_use]
pub fn km_to_mi(km: f64) -> f64 {
    km * KM_TO_MI
}

#[must_use]
pub fn mi_to_km(mi: f64) -> f64 {
    mi / KM_TO_MI
}

/// Haversine great-circle distance between two points, in kilometers.
///
/// `a = sin²(Δφ/2) + cos φ₁ · cos φ₂ · sin²(Δλ/2)`, `c = 2 · atan2(√a, √(1−a))`,
/// `d = R · c`.
#[must_use]
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let lat1 = from.latitude().to_radians();
    let lat2 = to.latitude().to_radians();
    let d_lat = (to.latitude() - from.latitude()).to_radians();
    let d_lon = (to.longitude() - from.longitude()).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push `a` a hair past 1.0 for antipodal points.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}
