// json-env-export: JSON to environment variable exporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::Cli;
use crate::logging::{LogFormat, LogLevel};
use clap::Parser;

#[test]
fn test_parse_input_flags() {
    let cli = Cli::try_parse_from([
        "json-env-export",
        "--json-envs",
        r#"{"A":"1"}"#,
        "--prefix",
        "MY_",
        "--convert",
        "snake",
        "--convert-prefix",
        "false",
    ])
    .unwrap();

    assert_eq!(cli.inputs.json_envs.as_deref(), Some(r#"{"A":"1"}"#));
    assert_eq!(cli.inputs.prefix.as_deref(), Some("MY_"));
    assert_eq!(cli.inputs.convert.as_deref(), Some("snake"));
    assert_eq!(cli.inputs.convert_prefix.as_deref(), Some("false"));
    assert_eq!(cli.inputs.include, None);
    assert!(!cli.global.dry);
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "json-env-export",
        "-l",
        "4",
        "--log-format",
        "workflow",
        "--env-file",
        "/tmp/env",
        "--dry",
    ])
    .unwrap();

    assert_eq!(cli.global.log_level, Some(4));
    assert_eq!(cli.global.log_format, Some(LogFormat::Workflow));
    assert!(cli.global.dry);
}

#[test]
fn test_log_level_out_of_range_rejected() {
    assert!(Cli::try_parse_from(["json-env-export", "-l", "6"]).is_err());
}

#[test]
fn test_log_config_defaults_follow_environment() {
    let cli = Cli::try_parse_from(["json-env-export"]).unwrap();

    let local = cli.global.log_config(false);
    assert_eq!(local.format(), LogFormat::Pretty);
    assert_eq!(local.console_level(), LogLevel::INFO);

    let actions = cli.global.log_config(true);
    assert_eq!(actions.format(), LogFormat::Workflow);
    assert_eq!(actions.console_level(), LogLevel::DEBUG);
    assert_eq!(actions.file_level(), LogLevel::DEBUG);
}

#[test]
fn test_explicit_log_options_win() {
    let cli = Cli::try_parse_from([
        "json-env-export",
        "--log-format",
        "pretty",
        "-l",
        "2",
        "--file-log-level",
        "5",
        "--log-file",
        "export.log",
    ])
    .unwrap();

    let config = cli.global.log_config(true);
    assert_eq!(config.format(), LogFormat::Pretty);
    assert_eq!(config.console_level(), LogLevel::WARN);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert_eq!(config.log_file(), Some("export.log"));
}

#[test]
fn test_flags_override_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inputs.toml");
    std::fs::write(&path, "json_envs = '{\"A\": \"1\"}'\nprefix = \"FILE_\"\n").unwrap();

    let cli = Cli::try_parse_from([
        "json-env-export",
        "--config",
        path.to_str().unwrap(),
        "--prefix",
        "FLAG_",
    ])
    .unwrap();

    let inputs = cli.inputs.loader().unwrap().build().unwrap();
    assert_eq!(inputs.json_envs, r#"{"A": "1"}"#);
    assert_eq!(inputs.prefix, "FLAG_");
}
