// Contract tests for `vcmp parse` and configuration handling

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn vcmp() -> Command {
    let mut cmd = Command::cargo_bin("vcmp").unwrap();
    cmd.env_remove("VCMP_CONFIG")
        .env("XDG_CONFIG_HOME", "/nonexistent/vcmp-test-config")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_parse_prints_sections() {
    vcmp()
        .args(["parse", "2.13.4", "10"])
        .assert()
        .success()
        .stdout("2.13.4 -> [2, 13, 4]\n10 -> [10]\n");
}

#[test]
fn test_parse_failure() {
    vcmp()
        .args(["parse", "1..2"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("section 1 is empty"));
}

#[test]
fn test_parse_json() {
    let output = vcmp().args(["parse", "--json", "01.2"]).output().unwrap();
    assert!(output.status.success());

    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(entries[0]["input"], "01.2");
    assert_eq!(entries[0]["version"], "1.2");
    assert_eq!(entries[0]["sections"], serde_json::json!([1, 2]));
}

#[test]
fn test_config_file_selects_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "output = \"json\"\n").unwrap();

    let output = Command::cargo_bin("vcmp")
        .unwrap()
        .args(["parse", "1.2"])
        .arg("--config")
        .arg(&config_path)
        .output()
        .unwrap();
    assert!(output.status.success());
    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(entries[0]["sections"], serde_json::json!([1, 2]));
}

#[test]
fn test_missing_config_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();

    Command::cargo_bin("vcmp")
        .unwrap()
        .env("VCMP_CONFIG", temp_dir.path().join("absent.toml"))
        .args(["eq", "1", "1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration file not found"));
}
