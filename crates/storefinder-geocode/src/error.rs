use storefinder_core::CoordinateError;
use thiserror::Error;

/// Errors returned while geocoding a query.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// Nothing matched the query.
    #[error("no location found for \"{query}\"")]
    NotFound { query: String },

    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The service answered with a point that is not on the globe.
    #[error("geocoder returned an invalid coordinate: {0}")]
    InvalidCoordinate(#[from] CoordinateError),

    #[error("invalid geocoder base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}
