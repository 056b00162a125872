//! Fixed lookup table geocoder.
//!
//! Useful offline, for pinned test fixtures, or for a curated set of postal
//! codes. Queries match case-insensitively after trimming and collapsing
//! whitespace; the first matching entry wins.

use std::future::Future;

use storefinder_core::Coordinate;

use crate::error::GeocodeError;
use crate::Geocoder;

#[derive(Debug, Clone, Default)]
pub struct StaticGeocoder {
    entries: Vec<(String, Coordinate)>,
}

impl StaticGeocoder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry. Earlier entries take precedence over later ones with
    /// the same key.
    #[must_use]
    pub fn with_entry(mut self, query: &str, coordinate: Coordinate) -> Self {
        self.entries.push((normalize(query), coordinate));
        self
    }

    /// # Errors
    ///
    /// Returns [`GeocodeError::NotFound`] when no entry matches `query`.
    pub fn lookup(&self, query: &str) -> Result<Coordinate, GeocodeError> {
        let key = normalize(query);
        self.entries
            .iter()
            .find(|(entry, _)| *entry == key)
            .map(|(_, coordinate)| *coordinate)
            .ok_or_else(|| GeocodeError::NotFound {
                query: query.trim().to_string(),
            })
    }
}

impl Geocoder for StaticGeocoder {
    fn geocode(&self, query: &str) -> impl Future<Output = Result<Coordinate, GeocodeError>> + Send {
        let result = self.lookup(query);
        async move { result }
    }
}

fn normalize(query: &str) -> String {
    query
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
