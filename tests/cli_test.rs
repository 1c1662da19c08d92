//! End-to-end tests of the `devfile-recognizer` binary

use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_devfile-recognizer"));
    cmd.env_remove("RECOGNIZER_LOG_LEVEL")
        .env_remove("RECOGNIZER_MAX_FILES")
        .env_remove("RECOGNIZER_MAX_DEPTH")
        .env_remove("RECOGNIZER_MIN_DETECTION_USAGE")
        .env_remove("RECOGNIZER_EXCLUDED_DIRS")
        .env_remove("RUST_LOG");
    cmd
}

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_cli_help() {
    let output = bin().arg("--help").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("analyze"));
    assert!(stdout.contains("select"));
}

#[test]
fn test_cli_version() {
    let output = bin().arg("--version").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_analyze_json_output() {
    let output = bin()
        .args(["analyze", "--format", "json"])
        .arg(fixture_path("golang-gin-app"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let languages: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(languages[0]["name"], "Go");
    assert_eq!(languages[0]["usageInPercentage"], 100.0);
    assert_eq!(languages[0]["frameworks"][0], "Gin");
}

#[test]
fn test_select_yaml_output() {
    let output = bin()
        .arg("select")
        .arg(fixture_path("quarkus"))
        .arg("--catalog")
        .arg(fixture_path("devfile-types.yaml"))
        .args(["-f", "yaml"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("name: java-quarkus"));
}

#[test]
fn test_select_human_output() {
    let output = bin()
        .arg("select")
        .arg(fixture_path("django"))
        .arg("--catalog")
        .arg(fixture_path("devfile-types.yaml"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Devfile type: python-django"));
}

#[test]
fn test_empty_project_exit_code() {
    let dir = TempDir::new().unwrap();
    let output = bin().arg("analyze").arg(dir.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No language detected"));
}

#[test]
fn test_missing_catalog_exit_code() {
    let dir = TempDir::new().unwrap();
    let output = bin()
        .arg("select")
        .arg(fixture_path("quarkus"))
        .arg("--catalog")
        .arg(dir.path().join("missing.yaml"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_invalid_config_exit_code() {
    let output = bin()
        .env("RECOGNIZER_MAX_FILES", "many")
        .arg("analyze")
        .arg(fixture_path("quarkus"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("RECOGNIZER_MAX_FILES"));
}
