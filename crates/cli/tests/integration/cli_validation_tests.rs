//! CLI argument validation tests.
//!
//! These tests verify that the CLI properly validates arguments and provides
//! helpful error messages without requiring network access.

use predicates::prelude::*;

use super::helpers::{comet_cmd, SLOT0};

#[test]
fn test_help_output() {
    comet_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("comet"))
        .stdout(predicate::str::contains("compute"))
        .stdout(predicate::str::contains("fetch"));
}

#[test]
fn test_fetch_help_output() {
    comet_cmd()
        .args(["fetch", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--market"))
        .stdout(predicate::str::contains("--block"))
        .stdout(predicate::str::contains("--verify"));
}

#[test]
fn test_invalid_command() {
    comet_cmd()
        .arg("invalid_command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_compute_missing_slot() {
    comet_cmd()
        .args(["compute", "--slot0", SLOT0])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_compute_invalid_hex() {
    comet_cmd()
        .args(["compute", "--slot0", "0xnothex", "--slot1", SLOT0])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_compute_short_word() {
    comet_cmd()
        .args(["compute", "--slot0", "0x1234", "--slot1", SLOT0])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_invalid_format() {
    comet_cmd()
        .args(["compute", "--slot0", SLOT0, "--slot1", SLOT0, "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_fetch_missing_rpc_url() {
    comet_cmd()
        .arg("fetch")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_fetch_invalid_market() {
    comet_cmd()
        .args(["fetch", "--market", "not-an-address", "--rpc-url", "http://127.0.0.1:9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_fetch_unreachable_node() {
    comet_cmd()
        .args(["fetch", "--rpc-url", "http://127.0.0.1:9", "--block", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read storage slot"));
}
