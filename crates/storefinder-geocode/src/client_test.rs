use super::*;

fn test_client(base_url: &str) -> NominatimClient {
    NominatimClient::with_base_url(5, 2, "storefinder-test/0.1", base_url)
        .expect("client construction should not fail")
}

#[test]
fn build_search_url_constructs_correct_query_string() {
    let client = test_client("https://nominatim.openstreetmap.org");
    let url = client.build_search_url("94109");
    assert_eq!(
        url.as_str(),
        "https://nominatim.openstreetmap.org/search?q=94109&format=jsonv2&limit=1"
    );
}

#[test]
fn build_search_url_strips_trailing_slashes() {
    let client = test_client("https://nominatim.openstreetmap.org//");
    let url = client.build_search_url("94109");
    assert_eq!(
        url.as_str(),
        "https://nominatim.openstreetmap.org/search?q=94109&format=jsonv2&limit=1"
    );
}

#[test]
fn build_search_url_keeps_path_prefix() {
    let client = test_client("http://geo.internal:8080/nominatim");
    let url = client.build_search_url("94109");
    assert_eq!(
        url.as_str(),
        "http://geo.internal:8080/nominatim/search?q=94109&format=jsonv2&limit=1"
    );
}

#[test]
fn build_search_url_encodes_special_characters() {
    let client = test_client("https://nominatim.openstreetmap.org");
    let url = client.build_search_url("1462 Pine St, San Francisco, CA 94109");
    assert!(
        url.as_str()
            .contains("q=1462+Pine+St%2C+San+Francisco%2C+CA+94109"),
        "query param should be form-encoded: {url}"
    );
}

#[test]
fn with_base_url_rejects_unparseable_url() {
    let result = NominatimClient::with_base_url(5, 2, "ua", "not a url");
    assert!(
        matches!(result, Err(GeocodeError::InvalidBaseUrl { .. })),
        "expected InvalidBaseUrl"
    );
}

#[test]
fn with_base_url_rejects_non_http_scheme() {
    let result = NominatimClient::with_base_url(5, 2, "ua", "ftp://example.com");
    assert!(
        matches!(result, Err(GeocodeError::InvalidBaseUrl { ref reason, .. }) if reason.contains("ftp")),
        "expected InvalidBaseUrl for ftp scheme"
    );
}

#[tokio::test]
async fn blank_query_is_not_found_without_a_request() {
    // Port 9 (discard) would fail the request if one were made.
    let client = test_client("http://127.0.0.1:9");
    let result = client.search("   ").await;
    assert!(
        matches!(result, Err(GeocodeError::NotFound { .. })),
        "expected NotFound, got: {result:?}"
    );
}

#[test]
fn new_targets_public_nominatim() {
    let client =
        NominatimClient::new(5, 2, "storefinder-test/0.1").expect("client should build");
    assert_eq!(
        client.search_url.as_str(),
        format!("{DEFAULT_GEOCODER_BASE_URL}search")
    );
    assert_eq!(
        client.search_url.as_str(),
        "https://nominatim.openstreetmap.org/search"
    );
}
