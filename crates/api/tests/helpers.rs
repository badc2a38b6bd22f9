//! Test helper utilities for API crate integration tests.

#![allow(dead_code)]

use kupo_rs_api::{ClientConfig, KupoClient};
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Start a mock Kupo server.
pub async fn start_mock_server() -> MockServer {
    MockServer::start().await
}

/// Create a ClientConfig pointing to a mock server.
pub fn client_config_with_mock(mock: &MockServer) -> ClientConfig {
    ClientConfig::new().with_endpoint_url(Url::parse(&mock.uri()).unwrap())
}

/// Create a client pointing to a mock server.
pub fn client_with_mock(mock: &MockServer) -> KupoClient {
    KupoClient::with_config(client_config_with_mock(mock)).unwrap()
}

/// Load a fixture file as a string.
pub fn load_fixture(name: &str) -> String {
    let path = format!(
        "{}/tests/fixtures/{}.json",
        env!("CARGO_MANIFEST_DIR"),
        name
    );
    std::fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to load fixture: {}", path))
}

/// Mock a GET on `request_path` with a fixture response.
pub async fn mock_fixture(server: &MockServer, request_path: &str, fixture_name: &str) {
    mock_body(server, request_path, &load_fixture(fixture_name)).await;
}

/// Mock a GET on `request_path` with a literal 200 body.
pub async fn mock_body(server: &MockServer, request_path: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(request_path))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// Mock an HTTP error response on every GET.
pub async fn mock_http_error(server: &MockServer, status_code: u16, body: &str) {
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(status_code).set_body_string(body))
        .mount(server)
        .await;
}

/// Path and query of the single request the server received.
pub async fn requested_target(server: &MockServer) -> String {
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1, "expected exactly one request");
    let url = &requests[0].url;
    match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    }
}
