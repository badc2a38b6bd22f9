//! Integration tests for the diagnostics written to stderr.

use predicates::prelude::*;
use wiremock::matchers::method;
use wiremock::{Mock, ResponseTemplate};

use super::helpers::{kupo_cmd_with_mock, mock_fixture, start_mock_server};

#[tokio::test]
async fn test_debug_level_logs_finished_query() {
    let server = start_mock_server().await;
    mock_fixture(&server, "/v1/matches", "matches").await;

    kupo_cmd_with_mock(&server)
        .args(["--log-level", "debug", "matches"])
        .assert()
        .success()
        .stderr(predicate::str::contains("query finished"))
        .stderr(predicate::str::contains(r#"operation="matches""#))
        .stderr(predicate::str::contains("duration_ms="))
        .stderr(predicate::str::contains("matched=2"))
        .stderr(predicate::str::contains("url=http://127.0.0.1:"));
}

#[tokio::test]
async fn test_failed_query_logs_warning() {
    let server = start_mock_server().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    kupo_cmd_with_mock(&server)
        .arg("matches")
        .assert()
        .failure()
        .stderr(predicate::str::contains("WARN"))
        .stderr(predicate::str::contains("query failed"))
        .stderr(predicate::str::contains(r#"operation="matches""#))
        .stderr(predicate::str::contains("error="));
}

#[tokio::test]
async fn test_default_level_hides_debug_events() {
    let server = start_mock_server().await;
    mock_fixture(&server, "/v1/matches", "matches").await;

    kupo_cmd_with_mock(&server)
        .arg("matches")
        .assert()
        .success()
        .stderr(predicate::str::contains("query finished").not());
}
