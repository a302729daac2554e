// json-env-export: JSON to environment variable exporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the binary.
//!
//! Runs the binary the way the Actions runner does: inputs in `INPUT_*`
//! variables, exports into the file named by `GITHUB_ENV`.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::NamedTempFile;

/// Binary with a clean environment and workflow-command logging.
fn export_cmd(env_file: &NamedTempFile) -> Command {
    let mut cmd = cargo_bin_cmd!("json-env-export");
    cmd.env_clear()
        .env("GITHUB_ENV", env_file.path())
        .args(["--log-format", "workflow"]);
    cmd
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_works() {
    cargo_bin_cmd!("json-env-export")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--json-envs"));
}

#[test]
fn version_flag_works() {
    cargo_bin_cmd!("json-env-export")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// =============================================================================
// Exports
// =============================================================================

#[test]
fn exports_from_action_inputs() {
    let env_file = NamedTempFile::new().unwrap();

    export_cmd(&env_file)
        .env("INPUT_JSON_ENVS", r#"{"FOO_BAR": "1", "github_token": "x"}"#)
        .env("INPUT_CONVERT", "camel")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported secret fooBar"));

    let content = std::fs::read_to_string(env_file.path()).unwrap();
    assert!(content.starts_with("fooBar<<ghadelimiter_"), "{content}");
    assert!(!content.contains("github_token"));
}

#[test]
fn flags_override_action_inputs() {
    let env_file = NamedTempFile::new().unwrap();

    export_cmd(&env_file)
        .env("INPUT_JSON_ENVS", r#"{"A_B": "v"}"#)
        .env("INPUT_PREFIX", "ENV_")
        .args(["--prefix", "MY_", "--convert", "snake", "--convert-prefix", "false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported secret MY_a_b"));
}

#[test]
fn warns_before_overwriting() {
    let env_file = NamedTempFile::new().unwrap();

    export_cmd(&env_file)
        .env("INPUT_JSON_ENVS", r#"{"HOME_DIR": "/new"}"#)
        .env("HOME_DIR", "/old")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "::warning::Will re-write \"HOME_DIR\" environment variable.",
        ));
}

#[test]
fn dry_run_writes_nothing() {
    let env_file = NamedTempFile::new().unwrap();

    export_cmd(&env_file)
        .env("INPUT_JSON_ENVS", r#"{"A": "1"}"#)
        .arg("--dry")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported secret A"));

    assert!(std::fs::read_to_string(env_file.path()).unwrap().is_empty());
}

#[test]
fn falls_back_to_set_env_without_env_file() {
    let mut cmd = cargo_bin_cmd!("json-env-export");
    cmd.env_clear()
        .args(["--log-format", "workflow", "--json-envs", r#"{"A": "x,y"}"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("::set-env name=A::x,y"));
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn unknown_converter_fails() {
    let env_file = NamedTempFile::new().unwrap();

    export_cmd(&env_file)
        .env("INPUT_JSON_ENVS", r#"{"A": "1"}"#)
        .env("INPUT_CONVERT", "screaming")
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "::error::Unknown convert value \"screaming\". Available: lower, upper, camel, constant, pascal, snake",
        ));

    assert!(std::fs::read_to_string(env_file.path()).unwrap().is_empty());
}

#[test]
fn malformed_json_fails() {
    let env_file = NamedTempFile::new().unwrap();

    export_cmd(&env_file)
        .env("INPUT_JSON_ENVS", "{not json")
        .assert()
        .failure()
        .stdout(predicate::str::contains("::error::Cannot parse JSON.%0A"));

    assert!(std::fs::read_to_string(env_file.path()).unwrap().is_empty());
}

#[test]
fn missing_json_envs_fails() {
    let env_file = NamedTempFile::new().unwrap();

    export_cmd(&env_file)
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "::error::Input required and not supplied: json_envs",
        ));
}
