//! CLI argument validation tests.
//!
//! These tests verify that the CLI properly validates arguments and provides
//! helpful error messages without requiring network access.

use predicates::prelude::*;

use super::helpers::kupo_cmd;

#[test]
fn test_help_output() {
    kupo_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("kupo"))
        .stdout(predicate::str::contains("matches"))
        .stdout(predicate::str::contains("checkpoints"))
        .stdout(predicate::str::contains("patterns"));
}

#[test]
fn test_matches_help_output() {
    kupo_cmd()
        .args(["matches", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--spent-before"))
        .stdout(predicate::str::contains("--asset-name-hex"))
        .stdout(predicate::str::contains("--overlapping"));
}

#[test]
fn test_invalid_command() {
    kupo_cmd()
        .arg("invalid_command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_spent_and_unspent_conflict() {
    kupo_cmd()
        .args(["matches", "--spent", "--unspent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_invalid_asset_name_hex() {
    kupo_cmd()
        .args(["matches", "--policy-id", "abc", "--asset-name-hex", "zz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid hex"));
}

#[test]
fn test_asset_name_requires_policy() {
    kupo_cmd()
        .args(["matches", "--asset-name", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--policy-id"));
}

#[test]
fn test_checkpoints_slot_and_latest_conflict() {
    kupo_cmd()
        .args(["checkpoints", "--slot", "1", "--latest"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_datum_missing_hash() {
    kupo_cmd()
        .arg("datum")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_invalid_endpoint() {
    kupo_cmd()
        .args(["patterns", "--endpoint", "not a url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid endpoint"));
}

#[test]
fn test_invalid_slot_value() {
    kupo_cmd()
        .args(["metadata", "soon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
