//! The single-query pipeline: geocode, pick the nearest store, render.

use anyhow::Context;
use storefinder_core::{nearest, render, OutputFormat, StoreMatch, StoreRecord, Unit};
use storefinder_geocode::Geocoder;

pub(crate) struct FindRequest<'a> {
    pub(crate) query: &'a str,
    pub(crate) unit: Unit,
    pub(crate) format: OutputFormat,
}

/// Resolve the request's query and render the closest store in `catalog`.
///
/// The nearest-store search only runs once geocoding has succeeded.
///
/// # Errors
///
/// Returns an error wrapping [`storefinder_geocode::GeocodeError`] if the
/// query cannot be resolved, [`storefinder_core::NearestError`] if the
/// catalog is empty, or [`storefinder_core::FormatError`] if rendering fails.
pub(crate) async fn run_find<G: Geocoder>(
    geocoder: &G,
    catalog: &[StoreRecord],
    request: &FindRequest<'_>,
) -> anyhow::Result<String> {
    let origin = match geocoder.geocode(request.query).await {
        Ok(origin) => origin,
        Err(err) => {
            tracing::warn!(query = request.query, error = %err, "geocoding failed");
            return Err(err).with_context(|| format!("could not locate \"{}\"", request.query));
        }
    };

    let found = nearest(origin, catalog).context("finding the nearest store")?;
    tracing::info!(
        query = request.query,
        store = %found.store,
        distance_km = found.distance_km,
        "nearest store found"
    );

    let found = StoreMatch::new(found, request.unit);
    Ok(render(&found, request.format)?)
}
