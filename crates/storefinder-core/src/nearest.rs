//! Linear nearest-store search over the in-memory catalog.

use thiserror::Error;

use crate::distance::haversine_km;
use crate::store::{Coordinate, CoordinateError, StoreRecord};

#[derive(Debug, Error)]
pub enum NearestError {
    #[error("store catalog is empty; there is no store to compare against")]
    EmptyCatalog,

    #[error("store \"{name}\" has an invalid position: {source}")]
    InvalidStoreCoordinate {
        name: String,
        #[source]
        source: CoordinateError,
    },
}

/// The closest store and its great-circle distance in kilometers.
#[derive(Debug, Clone, PartialEq)]
pub struct NearestStore {
    pub store: StoreRecord,
    pub distance_km: f64,
}

/// Find the store closest to `query`.
///
/// A later store only displaces the current best when it is strictly closer,
/// so equidistant stores resolve to whichever comes first in `catalog`.
///
/// # Errors
///
/// Returns [`NearestError::EmptyCatalog`] when `catalog` has no records, or
/// [`NearestError::InvalidStoreCoordinate`] for a record whose degrees are
/// out of range.
pub fn nearest(query: Coordinate, catalog: &[StoreRecord]) -> Result<NearestStore, NearestError> {
    let mut best: Option<(&StoreRecord, f64)> = None;

    for store in catalog {
        let position = store
            .coordinate()
            .map_err(|source| NearestError::InvalidStoreCoordinate {
                name: store.name.clone(),
                source,
            })?;
        let distance_km = haversine_km(query, position);
        if best.is_none_or(|(_, best_km)| distance_km < best_km) {
            best = Some((store, distance_km));
        }
    }

    let (store, distance_km) = best.ok_or(NearestError::EmptyCatalog)?;
    tracing::debug!(
        store = %store.name,
        distance_km,
        candidates = catalog.len(),
        "selected nearest store"
    );
    Ok(NearestStore {
        store: store.clone(),
        distance_km,
    })
}
