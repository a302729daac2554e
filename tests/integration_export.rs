// json-env-export: JSON to environment variable exporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the export pipeline.
//!
//! Drives the library the way the binary does: inputs from a loader, export
//! into a `GITHUB_ENV` style file.

use std::collections::HashMap;

use json_env_export::cmd::export::run;
use json_env_export::config::ActionInputs;
use json_env_export::env::GithubEnv;

fn action_env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

fn env_file_names(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| line.split_once("<<ghadelimiter_").map(|(name, _)| name.to_string()))
        .collect()
}

// =============================================================================
// Secrets-style payloads
// =============================================================================

#[test]
fn export_secrets_with_constant_case_and_prefix() {
    let inputs = ActionInputs::loader()
        .with_env_prefix("INPUT")
        .with_env_source(action_env(&[
            (
                "INPUT_JSON_ENVS",
                r#"{"github_token": "ghs_x", "npmToken": "n", "aws-key-id": "k", "DEBUG": "1"}"#,
            ),
            ("INPUT_PREFIX", "secret_"),
            ("INPUT_EXCLUDE", "^DEBUG$"),
            ("INPUT_CONVERT", "constant"),
        ]))
        .build()
        .unwrap();

    let file = tempfile::NamedTempFile::new().unwrap();
    let mut sink = GithubEnv::with_env_file(file.path());
    let report = run(&inputs, &mut sink).unwrap();

    let content = std::fs::read_to_string(file.path()).unwrap();
    insta::assert_snapshot!(env_file_names(&content).join("\n"), @r"
    SECRET_NPM_TOKEN
    SECRET_AWS_KEY_ID
    ");
    assert_eq!(report.skipped, 2);
}

#[test]
fn export_keeps_raw_prefix_when_convert_prefix_is_off() {
    let inputs = ActionInputs::parse(
        r#"
json_envs = '{"fooBar": "1", "baz_qux": "2"}'
prefix = "TF_VAR_"
convert = "snake"
convert_prefix = "false"
"#,
    )
    .unwrap();

    let file = tempfile::NamedTempFile::new().unwrap();
    let mut sink = GithubEnv::with_env_file(file.path());
    run(&inputs, &mut sink).unwrap();

    let content = std::fs::read_to_string(file.path()).unwrap();
    assert_eq!(env_file_names(&content), ["TF_VAR_foo_bar", "TF_VAR_baz_qux"]);
}

#[test]
fn export_writes_multiline_values_verbatim() {
    let inputs = ActionInputs {
        json_envs: r#"{"CERT": "-----BEGIN-----\nabc\n-----END-----"}"#.to_string(),
        ..ActionInputs::default()
    };

    let file = tempfile::NamedTempFile::new().unwrap();
    let mut sink = GithubEnv::with_env_file(file.path());
    run(&inputs, &mut sink).unwrap();

    let content = std::fs::read_to_string(file.path()).unwrap();
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("CERT<<ghadelimiter_"));
    assert_eq!(&lines[1..4], ["-----BEGIN-----", "abc", "-----END-----"]);
    assert_eq!(lines[4], lines[0].trim_start_matches("CERT<<"));
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn export_nothing_on_invalid_converter() {
    let inputs = ActionInputs {
        json_envs: r#"{"A": "1"}"#.to_string(),
        convert: "kebab".to_string(),
        ..ActionInputs::default()
    };

    let file = tempfile::NamedTempFile::new().unwrap();
    let mut sink = GithubEnv::with_env_file(file.path());
    let err = run(&inputs, &mut sink).unwrap_err();

    assert!(err.to_string().contains("lower, upper, camel, constant, pascal, snake"));
    assert!(std::fs::read_to_string(file.path()).unwrap().is_empty());
}

#[test]
fn export_nothing_on_malformed_json() {
    let inputs = ActionInputs {
        json_envs: "{\"A\": \"1\"".to_string(),
        ..ActionInputs::default()
    };

    let file = tempfile::NamedTempFile::new().unwrap();
    let mut sink = GithubEnv::with_env_file(file.path());
    assert!(run(&inputs, &mut sink).is_err());
    assert!(std::fs::read_to_string(file.path()).unwrap().is_empty());
}
