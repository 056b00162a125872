//! Nominatim `search` response types.
//!
//! With `format=jsonv2` the endpoint returns a JSON array of places, best
//! match first. Coordinates arrive as decimal strings.

use serde::{Deserialize, Deserializer};

/// One candidate place from a Nominatim search.
#[derive(Debug, Deserialize)]
pub struct NominatimPlace {
    #[serde(deserialize_with = "f64_from_string_or_number")]
    pub lat: f64,
    #[serde(deserialize_with = "f64_from_string_or_number")]
    pub lon: f64,
    #[serde(default)]
    pub display_name: Option<String>,
}

fn f64_from_string_or_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.trim().parse::<f64>().map_err(serde::de::Error::custom),
    }
}
