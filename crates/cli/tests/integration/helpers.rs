//! Test helper utilities for CLI integration tests.

#![allow(deprecated)] // Command::cargo_bin deprecation

use assert_cmd::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Start a mock Kupo server.
pub async fn start_mock_server() -> MockServer {
    MockServer::start().await
}

/// Create a CLI command pointing to a mock server.
pub fn kupo_cmd_with_mock(mock: &MockServer) -> Command {
    let mut cmd = Command::cargo_bin("kupo").unwrap();
    cmd.env("KUPO_ENDPOINT", mock.uri());
    cmd
}

/// Create a CLI command without mock server (for validation tests).
pub fn kupo_cmd() -> Command {
    Command::cargo_bin("kupo").unwrap()
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
