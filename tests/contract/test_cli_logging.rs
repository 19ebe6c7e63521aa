// Contract tests for log routing and filter precedence

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const REJECTED: &str = "left operand rejected";

fn vcmp() -> Command {
    let mut cmd = Command::cargo_bin("vcmp").unwrap();
    cmd.env_remove("VCMP_CONFIG")
        .env("XDG_CONFIG_HOME", "/nonexistent/vcmp-test-config")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    vcmp()
        .args(["-v", "eq", "1.x", "1"])
        .assert()
        .code(2)
        .stdout("error\n")
        .stderr(predicate::str::contains(REJECTED));
}

#[test]
fn test_default_level_hides_debug_events() {
    vcmp()
        .args(["eq", "1.x", "1"])
        .assert()
        .code(2)
        .stdout("error\n")
        .stderr(predicate::str::contains(REJECTED).not());
}

#[test]
fn test_config_log_level_enables_debug_events() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "log_level = \"vcmp=debug\"\n").unwrap();

    vcmp()
        .args(["eq", "1.x", "1"])
        .arg("--config")
        .arg(&config_path)
        .assert()
        .code(2)
        .stdout("error\n")
        .stderr(predicate::str::contains(REJECTED));
}

#[test]
fn test_rust_log_overrides_verbose_and_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "log_level = \"vcmp=debug\"\n").unwrap();

    vcmp()
        .env("RUST_LOG", "off")
        .args(["-v", "eq", "1.x", "1"])
        .arg("--config")
        .arg(&config_path)
        .assert()
        .code(2)
        .stdout("error\n")
        .stderr(predicate::str::contains(REJECTED).not());
}

#[test]
fn test_invalid_config_log_level_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "log_level = \"vcmp=loud\"\n").unwrap();

    vcmp()
        .args(["eq", "1", "1"])
        .arg("--config")
        .arg(&config_path)
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid log_level"));
}
