// Contract tests for the comparison commands

use assert_cmd::Command;
use predicates::prelude::*;

fn vcmp() -> Command {
    let mut cmd = Command::cargo_bin("vcmp").unwrap();
    // Keep a developer's own config file out of the picture
    cmd.env_remove("VCMP_CONFIG")
        .env("XDG_CONFIG_HOME", "/nonexistent/vcmp-test-config")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_eq_true_exits_zero() {
    vcmp()
        .args(["eq", "2.13.4", "2.13.4"])
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn test_eq_length_mismatch_exits_one() {
    vcmp()
        .args(["eq", "2.13.4", "2.13.4.2.4"])
        .assert()
        .code(1)
        .stdout("false\n");
}

#[test]
fn test_each_relation_subcommand() {
    let cases = [
        ("ne", "2.13.4", "2.13.2", 0),
        ("gt", "2.13.4.2.4", "2.2.13", 0),
        ("gt", "2.13.4", "2.13.4.2.4", 1),
        ("ge", "2.13.4", "2.13.4", 0),
        ("lt", "2.3.4", "2.13.4", 0),
        ("le", "2.13.4.2.4", "2.13.4", 1),
    ];

    for (op, a, b, code) in cases {
        vcmp().args([op, a, b]).assert().code(code);
    }
}

#[test]
fn test_invalid_version_exits_two() {
    vcmp()
        .args(["eq", "apple78pear.4.5", "0.4.5"])
        .assert()
        .code(2)
        .stdout("error\n")
        .stderr(predicate::str::contains("Invalid version 'apple78pear.4.5'"));
}

#[test]
fn test_compare_with_operator() {
    vcmp()
        .args(["compare", "2.13.4", ">=", "2.3.4"])
        .assert()
        .success()
        .stdout("true\n");

    vcmp()
        .args(["compare", "2.13.4", "lt", "2.3.4"])
        .assert()
        .code(1);
}

#[test]
fn test_compare_rejects_unknown_operator() {
    vcmp()
        .args(["compare", "1.0", "~>", "1.0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown relation"));
}

#[test]
fn test_compare_json_output() {
    let output = vcmp()
        .args(["--json", "gt", "2.13.4", "2.3.4"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["left"], "2.13.4");
    assert_eq!(report["relation"], ">");
    assert_eq!(report["right"], "2.3.4");
    assert_eq!(report["result"], "true");
    assert!(report.get("errors").is_none());
}

#[test]
fn test_compare_json_reports_errors() {
    let output = vcmp()
        .args(["ne", "3.4.5", "0.apple.5", "--json"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["result"], "error");
    assert_eq!(report["errors"].as_array().unwrap().len(), 1);
}
