//! Integration tests for the warren CLI.
//!
//! The `connect` command needs a real terminal, so these tests drive the
//! `provision` surface and argument handling only; the terminal guard is
//! covered by library tests against the mock backend.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write a warren.yml pointing every path into the temp dir.
fn setup_config(temp: &TempDir) -> PathBuf {
    let misc = temp.path().join("misc");
    fs::create_dir_all(&misc).unwrap();
    fs::write(misc.join("rc"), "set color\n").unwrap();

    let config = format!(
        "playground_root: {root}\ntemplate_dir: {misc}\ndatabase: {db}\n",
        root = temp.path().join("userdata").display(),
        misc = misc.display(),
        db = temp.path().join("warren.db").display(),
    );
    let path = temp.path().join("warren.yml");
    fs::write(&path, config).unwrap();
    path
}

fn warren() -> Command {
    Command::new(cargo_bin("warren"))
}

#[test]
fn provision_creates_sharded_playground() {
    let temp = TempDir::new().unwrap();
    let config = setup_config(&temp);

    warren()
        .args(["--config", config.to_str().unwrap(), "provision", "mira"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Provisioned playground for 'mira'"));

    let home = temp.path().join("userdata/m/mira");
    assert!(home.is_dir());
    assert_eq!(fs::read_to_string(home.join(".rc")).unwrap(), "set color\n");
}

#[test]
fn provision_twice_keeps_player_files() {
    let temp = TempDir::new().unwrap();
    let config = setup_config(&temp);
    let config = config.to_str().unwrap().to_string();

    warren()
        .args(["--config", config.as_str(), "provision", "mira"])
        .assert()
        .success();

    let save = temp.path().join("userdata/m/mira/save.dat");
    fs::write(&save, b"progress").unwrap();

    warren()
        .args(["--config", config.as_str(), "provision", "mira"])
        .assert()
        .success();

    assert_eq!(fs::read(&save).unwrap(), b"progress");
}

#[test]
fn provision_with_empty_name_fails() {
    let temp = TempDir::new().unwrap();
    let config = setup_config(&temp);

    warren()
        .args(["--config", config.to_str().unwrap(), "provision", ""])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid player name"));
}

#[test]
fn provision_survives_missing_template_dir() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("warren.yml");
    fs::write(
        &config_path,
        format!(
            "playground_root: {root}\ntemplate_dir: {misc}\ndatabase: {db}\n",
            root = temp.path().join("userdata").display(),
            misc = temp.path().join("nowhere").display(),
            db = temp.path().join("warren.db").display(),
        ),
    )
    .unwrap();

    warren()
        .args([
            "--config",
            config_path.to_str().unwrap(),
            "provision",
            "mira",
        ])
        .assert()
        .success();

    assert!(temp.path().join("userdata/m/mira").is_dir());
}

#[test]
fn quiet_suppresses_success_output() {
    let temp = TempDir::new().unwrap();
    let config = setup_config(&temp);

    warren()
        .args([
            "--config",
            config.to_str().unwrap(),
            "--quiet",
            "provision",
            "mira",
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn explicit_missing_config_is_an_error() {
    let temp = TempDir::new().unwrap();
    let absent = temp.path().join("absent.yml");

    warren()
        .args(["--config", absent.to_str().unwrap(), "provision", "mira"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse config"));
}

#[test]
fn cli_requires_a_subcommand() {
    warren()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn cli_version_flag_works() {
    warren()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
