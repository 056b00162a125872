//! Address and postal-code geocoding.
//!
//! [`Geocoder`] is the capability the store finder needs: turn free text into
//! a [`Coordinate`] or report that nothing matched. [`NominatimClient`] asks
//! OpenStreetMap's Nominatim service; [`StaticGeocoder`] answers from a fixed
//! in-memory table.

pub mod client;
pub mod error;
pub mod static_table;
pub mod types;

use std::future::Future;

use storefinder_core::Coordinate;

pub use client::NominatimClient;
pub use error::GeocodeError;
pub use static_table::StaticGeocoder;

/// Resolves an address or postal code to a coordinate.
///
/// When several candidates match, implementations return the first one in
/// their own ranking.
pub trait Geocoder {
    /// # Errors
    ///
    /// Returns [`GeocodeError::NotFound`] when nothing matches `query`, or
    /// another [`GeocodeError`] when the lookup itself fails.
    fn geocode(&self, query: &str) -> impl Future<Output = Result<Coordinate, GeocodeError>> + Send;
}
