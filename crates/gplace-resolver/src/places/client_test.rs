use super::*;

fn test_client(base_url: &str) -> PlacesClient {
    PlacesClient::with_base_url("test-key", 30, base_url)
        .expect("client construction should not fail")
}

#[test]
fn build_url_joins_endpoint_under_base_path() {
    let client = test_client("https://maps.googleapis.com/maps/api/place");
    let url = client
        .build_url(FIND_PLACE_ENDPOINT, &[("input", "Sydney Opera House")])
        .unwrap();
    assert_eq!(
        url.as_str(),
        "https://maps.googleapis.com/maps/api/place/findplacefromtext/json?input=Sydney+Opera+House&key=test-key"
    );
}

#[test]
fn build_url_strips_duplicate_trailing_slashes() {
    let client = test_client("http://127.0.0.1:9999//");
    let url = client.build_url(DETAILS_ENDPOINT, &[("cid", "42")]).unwrap();
    assert_eq!(
        url.as_str(),
        "http://127.0.0.1:9999/details/json?cid=42&key=test-key"
    );
}

#[test]
fn build_url_encodes_special_characters() {
    let client = test_client("https://maps.googleapis.com/maps/api/place/");
    let url = client
        .build_url(TEXT_SEARCH_ENDPOINT, &[("query", "Fish & Chips #1")])
        .unwrap();
    assert!(
        url.as_str().contains("query=Fish+%26+Chips+%231"),
        "query param should be percent-encoded: {url}"
    );
}

#[test]
fn invalid_base_url_is_rejected() {
    let result = PlacesClient::with_base_url("k", 30, "not a url");
    assert!(matches!(result, Err(PlacesError::InvalidBaseUrl { .. })));
}

#[test]
fn check_status_accepts_ok_and_zero_results() {
    assert!(PlacesClient::check_status(&serde_json::json!({"status": "OK"})).is_ok());
    assert!(PlacesClient::check_status(&serde_json::json!({"status": "ZERO_RESULTS"})).is_ok());
}

#[test]
fn check_status_surfaces_error_message() {
    let body = serde_json::json!({
        "status": "REQUEST_DENIED",
        "error_message": "The provided API key is invalid."
    });
    match PlacesClient::check_status(&body) {
        Err(PlacesError::ApiStatus { status, message }) => {
            assert_eq!(status, "REQUEST_DENIED");
            assert_eq!(message, "The provided API key is invalid.");
        }
        other => panic!("expected ApiStatus, got {other:?}"),
    }
}

#[test]
fn check_status_treats_missing_status_as_error() {
    assert!(matches!(
        PlacesClient::check_status(&serde_json::json!({"results": []})),
        Err(PlacesError::ApiStatus { .. })
    ));
}
