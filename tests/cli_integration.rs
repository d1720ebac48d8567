//! Integration tests for the adapman binary.
//!
//! These tests only use invocations that never touch real adapters:
//! invalid command lines, help, configuration errors, and dry runs of
//! WiFi actions.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a command for running adapman with an isolated configuration home.
fn adapman(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("adapman").unwrap();
    cmd.env_remove("ADAPMAN_CONFIG")
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("xdg"));
    cmd
}

#[test]
fn no_arguments_prints_usage_and_fails() {
    let home = TempDir::new().unwrap();
    adapman(&home)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid command line"))
        .stderr(predicate::str::contains("Usage: adapman"));
}

#[test]
fn incomplete_connect_fails() {
    let home = TempDir::new().unwrap();
    adapman(&home)
        .args(["-cw:ssid", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("-cw:pwd"));
}

#[test]
fn unknown_flag_fails() {
    let home = TempDir::new().unwrap();
    adapman(&home).arg("-random").assert().failure();
}

#[test]
fn help_lists_actions() {
    let home = TempDir::new().unwrap();
    adapman(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("-dw:ssid <SSID>"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn dry_run_connect_reports_without_key() {
    let home = TempDir::new().unwrap();
    adapman(&home)
        .args(["--dry-run", "-CW:SSID", "home", "-cw:pwd", "hunter2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would connect to 'home'"))
        .stdout(predicate::str::contains("hunter2").not());
}

#[test]
fn dry_run_disconnect() {
    let home = TempDir::new().unwrap();
    adapman(&home)
        .args(["--dry-run", "-dw:ssid", "The Worst Astronomer"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Would disconnect from 'The Worst Astronomer'",
        ));
}

#[test]
fn quiet_dry_run_prints_nothing() {
    let home = TempDir::new().unwrap();
    adapman(&home)
        .args(["--quiet", "--dry-run", "-dw:ssid", "home"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn debug_from_config_file() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("adapman.toml");
    fs::write(&config, "debug = true\n").unwrap();

    adapman(&home)
        .arg("--config")
        .arg(&config)
        .args(["--dry-run", "-dw:ssid", "home"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[debug] loaded configuration from"))
        .stderr(predicate::str::contains("DisconnectWifi"));
}

#[cfg(unix)]
#[test]
fn config_from_home_directory() {
    let home = TempDir::new().unwrap();
    fs::create_dir_all(home.path().join(".adapman")).unwrap();
    fs::write(home.path().join(".adapman/config.toml"), "debug = true\n").unwrap();

    adapman(&home)
        .args(["--dry-run", "-dw:ssid", "home"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[debug]"));
}

#[test]
fn invalid_config_fails() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("adapman.toml");
    fs::write(&config, "[wifi]\ninterfce = \"wlan0\"\n").unwrap();

    adapman(&home)
        .arg("--config")
        .arg(&config)
        .args(["--dry-run", "-dw:ssid", "home"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}
