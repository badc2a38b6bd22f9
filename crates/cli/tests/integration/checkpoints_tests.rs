//! Integration tests for the checkpoints command.

use predicates::prelude::*;

use super::helpers::{kupo_cmd_with_mock, mock_fixture, requested_target, start_mock_server};

#[tokio::test]
async fn test_checkpoints_latest() {
    let server = start_mock_server().await;
    mock_fixture(&server, "/v1/checkpoints", "checkpoints").await;

    kupo_cmd_with_mock(&server)
        .args(["checkpoints", "--latest"])
        .assert()
        .success()
        .stdout(predicate::str::contains("51541500"))
        .stdout(predicate::str::contains("51541480").not());
}

#[tokio::test]
async fn test_checkpoints_by_slot_json() {
    let server = start_mock_server().await;
    super::helpers::mock_body(
        &server,
        "/v1/checkpoints/51540727",
        r#"{"slot_no": 51540727, "header_hash": "fe5f"}"#,
    )
    .await;

    let output = kupo_cmd_with_mock(&server)
        .args(["checkpoints", "--slot", "51540727", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{"slot_no": 51_540_727, "header_hash": "fe5f"}])
    );
    assert_eq!(
        requested_target(&server).await,
        "/v1/checkpoints/51540727"
    );
}

#[tokio::test]
async fn test_checkpoints_empty() {
    let server = start_mock_server().await;
    super::helpers::mock_body(&server, "/v1/checkpoints", "[]").await;

    kupo_cmd_with_mock(&server)
        .arg("checkpoints")
        .assert()
        .success()
        .stdout(predicate::str::contains("No checkpoints found."));
}
