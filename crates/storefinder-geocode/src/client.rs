//! HTTP client for OpenStreetMap's Nominatim geocoding service.
//!
//! Issues one `search` request per query with `limit=1`, so the service's
//! own ranking decides which candidate wins. Nothing is retried: a failed
//! lookup is reported straight back to the caller.

use std::future::Future;
use std::time::Duration;

use reqwest::{Client, Url};
use storefinder_core::app_config::DEFAULT_GEOCODER_BASE_URL;
use storefinder_core::Coordinate;

use crate::error::GeocodeError;
use crate::types::NominatimPlace;
use crate::Geocoder;

/// Client for the Nominatim `search` endpoint.
///
/// Use [`NominatimClient::new`] for the public service or
/// [`NominatimClient::with_base_url`] to point at a self-hosted instance or a
/// mock server in tests.
pub struct NominatimClient {
    client: Client,
    search_url: Url,
}

impl NominatimClient {
    /// Creates a client pointed at the public Nominatim service.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        timeout_secs: u64,
        connect_timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, GeocodeError> {
        Self::with_base_url(
            timeout_secs,
            connect_timeout_secs,
            user_agent,
            DEFAULT_GEOCODER_BASE_URL,
        )
    }

    /// Creates a client with a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeocodeError::InvalidBaseUrl`] if
    /// `base_url` is not an absolute HTTP(S) URL.
    pub fn with_base_url(
        timeout_secs: u64,
        connect_timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .user_agent(user_agent)
            .build()?;

        let invalid = |reason: String| GeocodeError::InvalidBaseUrl {
            base_url: base_url.to_string(),
            reason,
        };

        // Exactly one trailing slash so `join` appends instead of replacing
        // the last path segment of a self-hosted prefix like `/nominatim`.
        let normalised = format!("{}/", base_url.trim().trim_end_matches('/'));
        let base = Url::parse(&normalised).map_err(|e| invalid(e.to_string()))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", base.scheme())));
        }
        let search_url = base.join("search").map_err(|e| invalid(e.to_string()))?;

        Ok(Self { client, search_url })
    }

    /// Resolves `query` to the coordinate of the best-ranked match.
    ///
    /// # Errors
    ///
    /// - [`GeocodeError::NotFound`] if the query is blank or no place matches.
    /// - [`GeocodeError::Http`] on network failure.
    /// - [`GeocodeError::UnexpectedStatus`] on a non-2xx response.
    /// - [`GeocodeError::Deserialize`] if the body is not a Nominatim result list.
    /// - [`GeocodeError::InvalidCoordinate`] if the match is off the globe.
    pub async fn search(&self, query: &str) -> Result<Coordinate, GeocodeError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(GeocodeError::NotFound {
                query: query.to_string(),
            });
        }

        let url = self.build_search_url(query);
        tracing::debug!(query, url = %url, "geocoding query");

        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let places: Vec<NominatimPlace> =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Deserialize {
                context: format!("search(q={query})"),
                source: e,
            })?;

        let Some(place) = places.into_iter().next() else {
            return Err(GeocodeError::NotFound {
                query: query.to_string(),
            });
        };

        let coordinate = Coordinate::new(place.lat, place.lon)?;
        tracing::debug!(
            query,
            %coordinate,
            display_name = place.display_name.as_deref().unwrap_or(""),
            "geocoded query"
        );
        Ok(coordinate)
    }

    fn build_search_url(&self, query: &str) -> Url {
        let mut url = self.search_url.clone();
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("format", "jsonv2")
            .append_pair("limit", "1");
        url
    }
}

impl Geocoder for NominatimClient {
    fn geocode(&self, query: &str) -> impl Future<Output = Result<Coordinate, GeocodeError>> + Send {
        self.search(query)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
