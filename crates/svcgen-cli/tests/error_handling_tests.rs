//! Tests for error handling, suggestions and exit codes.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn svcgen(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("svcgen").unwrap();
    cmd.current_dir(temp.path())
        .env_remove("NO_COLOR")
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(temp.path().join("svcgen.toml"));
    cmd
}

#[test]
fn test_error_invalid_service_name() {
    let temp = TempDir::new().unwrap();

    svcgen(&temp)
        .args(["new", "Billing_Service"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid service name"))
        .stderr(predicate::str::contains("--permissive"));

    assert!(!temp.path().join("apps").exists());
}

#[test]
fn test_error_empty_name_is_strict_rejected() {
    let temp = TempDir::new().unwrap();

    svcgen(&temp).args(["new", ""]).assert().code(2);
    assert!(!temp.path().join("apps").exists());
}

#[test]
fn test_permissive_empty_name_writes_into_apps_dir() {
    let temp = TempDir::new().unwrap();

    svcgen(&temp)
        .args(["new", "", "--permissive"])
        .assert()
        .success();

    assert!(temp.path().join("apps/main.py").is_file());
    assert!(temp.path().join("apps/k8s/deployment.yaml").is_file());
}

#[test]
fn test_permissive_still_refuses_parent_dirs() {
    let temp = TempDir::new().unwrap();

    svcgen(&temp)
        .args(["new", "../escape", "--permissive"])
        .assert()
        .code(2);

    assert!(!temp.path().join("escape").exists());
}

#[test]
fn test_error_malformed_config_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("svcgen.toml"), "[cluster\nnamespace =").unwrap();

    svcgen(&temp)
        .args(["new", "billing"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_error_invalid_config_value() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("svcgen.toml"),
        "[cluster]\nnamespace = \"Not Valid\"\n",
    )
    .unwrap();

    svcgen(&temp)
        .args(["list"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("namespace"));
}

#[test]
fn test_error_unknown_config_key() {
    let temp = TempDir::new().unwrap();

    svcgen(&temp)
        .args(["config", "get", "cluster.nope"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_error_name_starting_with_digit() {
    let temp = TempDir::new().unwrap();

    svcgen(&temp)
        .args(["new", "9lives"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("start with a lowercase letter"));

    assert!(!temp.path().join("apps").exists());
}

#[test]
fn test_error_domain_with_newline() {
    let temp = TempDir::new().unwrap();

    svcgen(&temp)
        .args(["new", "billing", "--domain", "homelab.lan\n      evil: injected"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("domain"));

    assert!(!temp.path().join("apps").exists());
}

#[test]
fn test_error_registry_from_env_with_whitespace() {
    let temp = TempDir::new().unwrap();

    svcgen(&temp)
        .env("SVCGEN_CLUSTER__IMAGE_REGISTRY", "ghcr.io/your evil")
        .args(["new", "billing"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("image_registry"));
}

#[test]
fn test_error_port_zero() {
    let temp = TempDir::new().unwrap();

    svcgen(&temp)
        .args(["new", "billing", "--port", "0"])
        .assert()
        .code(2);
}

#[test]
fn test_error_quiet_with_verbose() {
    let temp = TempDir::new().unwrap();

    svcgen(&temp).args(["-q", "-v", "list"]).assert().code(2);
}

#[test]
fn test_log_file_receives_events() {
    let temp = TempDir::new().unwrap();
    let log = temp.path().join("logs/svcgen.log");

    svcgen(&temp)
        .args(["-v", "new", "billing", "--log-file"])
        .arg(&log)
        .assert()
        .success();

    let content = fs::read_to_string(&log).unwrap();
    assert!(content.contains("Generation completed"));
}
