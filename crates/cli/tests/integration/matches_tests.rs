//! Integration tests for the matches command.

use predicates::prelude::*;

use super::helpers::{kupo_cmd_with_mock, mock_fixture, requested_target, start_mock_server};

const POLICY_ID: &str = "4fc16c94d066e949e771c5581235f8090ad6aaffaf373a426445ca51";

#[tokio::test]
async fn test_matches_table_output() {
    let server = start_mock_server().await;
    mock_fixture(&server, "/v1/matches", "matches").await;

    kupo_cmd_with_mock(&server)
        .arg("matches")
        .assert()
        .success()
        .stdout(predicate::str::contains("1.500000"))
        .stdout(predicate::str::contains("42.000000"))
        .stdout(predicate::str::contains("51540727"))
        .stdout(predicate::str::contains("51541000"));
}

#[tokio::test]
async fn test_matches_json_output() {
    let server = start_mock_server().await;
    mock_fixture(&server, "/v1/matches", "matches").await;

    let output = kupo_cmd_with_mock(&server)
        .args(["matches", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let matches = json.as_array().unwrap();
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0]["value"]["coins"], 1_500_000);
    assert_eq!(matches[1]["spent_at"]["slot_no"], 51_541_000);
}

#[tokio::test]
async fn test_matches_policy_and_hex_asset_name() {
    let server = start_mock_server().await;
    mock_fixture(
        &server,
        &format!("/v1/matches/{POLICY_ID}.scoop"),
        "matches",
    )
    .await;

    kupo_cmd_with_mock(&server)
        .args([
            "matches",
            "--unspent",
            "--policy-id",
            POLICY_ID,
            "--asset-name-hex",
            "73636f6f70",
        ])
        .assert()
        .success();

    assert_eq!(
        requested_target(&server).await,
        format!("/v1/matches/{POLICY_ID}.scoop?unspent")
    );
}

#[tokio::test]
async fn test_matches_binary_hex_asset_name_stays_hex() {
    let server = start_mock_server().await;
    mock_fixture(
        &server,
        &format!("/v1/matches/{POLICY_ID}.ff00fe"),
        "matches",
    )
    .await;

    kupo_cmd_with_mock(&server)
        .args([
            "matches",
            "--policy-id",
            POLICY_ID,
            "--asset-name-hex",
            "ff00fe",
        ])
        .assert()
        .success();

    assert_eq!(
        requested_target(&server).await,
        format!("/v1/matches/{POLICY_ID}.ff00fe")
    );
}

#[tokio::test]
async fn test_matches_spent_bounds() {
    let server = start_mock_server().await;
    mock_fixture(&server, "/v1/matches/addr_test1xyz", "matches").await;

    kupo_cmd_with_mock(&server)
        .args([
            "matches",
            "--pattern",
            "addr_test1xyz",
            "--spent",
            "--spent-before",
            "900",
            "--spent-after",
            "800",
        ])
        .assert()
        .success();

    assert_eq!(
        requested_target(&server).await,
        "/v1/matches/addr_test1xyz?spent&spent_before=900&spent_after=800"
    );
}

#[tokio::test]
async fn test_matches_server_error() {
    let server = start_mock_server().await;

    kupo_cmd_with_mock(&server)
        .arg("matches")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to find matches"))
        .stderr(predicate::str::contains("404"));
}
