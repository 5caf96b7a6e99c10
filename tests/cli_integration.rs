//! Testes de integração para a CLI do Memora.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn memora_bin() -> Command {
    Command::cargo_bin("memora").expect("binary should be built")
}

#[test]
fn test_version_command() {
    memora_bin()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("memora"));
}

#[test]
fn test_help_command() {
    memora_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("simulate"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_init_creates_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("memora.toml");

    memora_bin()
        .arg("init")
        .arg("--path")
        .arg(temp_dir.path())
        .assert()
        .success();

    assert!(config_path.exists(), "Config file was not created");

    let content = std::fs::read_to_string(&config_path).expect("Failed to read config");
    assert!(content.contains("[general]"));
    assert!(content.contains("[cache]"));
    assert!(content.contains("unbounded"));
}

#[test]
fn test_simulate_unbounded_text() {
    memora_bin()
        .args(["simulate", "5,1", "5,1", "42,1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[hit ] f(5, 1) = 6"))
        .stdout(predicate::str::contains("[miss] f(42, 1) = 43"));
}

#[test]
fn test_simulate_bounded_json() {
    let output = memora_bin()
        .args([
            "simulate",
            "--strategy",
            "bounded",
            "--capacity",
            "1",
            "--json",
            "5,1",
            "42,1",
            "5,1",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");

    assert_eq!(report["cache"]["strategy"], "bounded");
    assert_eq!(report["stats"]["misses"], 3);
    assert_eq!(report["stats"]["evictions"], 2);
    assert_eq!(report["calls"][2]["hit"], false);
}

#[test]
fn test_simulate_uses_config_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("custom.toml");
    std::fs::write(&config_path, "[cache]\nstrategy = \"bounded\"\ncapacity = 1\n")
        .expect("Failed to write config");

    memora_bin()
        .arg("--config")
        .arg(&config_path)
        .args(["simulate", "--json", "1,1", "2,2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"evictions\": 1"));
}

#[test]
fn test_malformed_config_file_is_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("broken.toml");
    std::fs::write(&config_path, "[cache]\nstrategy = \"bounded\"\ncapacity = \"many\"\n")
        .expect("Failed to write config");

    memora_bin()
        .arg("--config")
        .arg(&config_path)
        .args(["simulate", "1,1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("TomlParse"));
}

#[test]
fn test_simulate_rejects_zero_capacity() {
    memora_bin()
        .args(["simulate", "--strategy", "bounded", "--capacity", "0", "1,1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("InvalidCacheCapacity"));
}

#[test]
fn test_simulate_rejects_malformed_call() {
    memora_bin()
        .args(["simulate", "not-a-call"])
        .assert()
        .failure();
}

#[test]
fn test_config_command_prints_toml() {
    memora_bin()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("[cache]"))
        .stdout(predicate::str::contains("strategy"));
}

#[test]
fn test_invalid_command() {
    memora_bin()
        .arg("invalid-command-that-does-not-exist")
        .assert()
        .failure();
}
