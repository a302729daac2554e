// json-env-export: JSON to environment variable exporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> InputLoader --> run_action
//!                                                |
//!                               GithubEnv  (or MemoryEnv with --dry)
//! ```

use std::process::ExitCode;

use json_env_export::cli::{self, Cli};
use json_env_export::cmd::export::run_action;
use json_env_export::config::ActionInputs;
use json_env_export::env::{GithubEnv, MemoryEnv};
use json_env_export::error::Result;
use json_env_export::logging::init_logging;
use json_env_export::workflow::is_github_actions;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = cli.global.log_config(is_github_actions());
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    let inputs = load_inputs(&cli);

    if cli.global.dry {
        tracing::info!("Dry run, nothing is written to the environment");
        let mut sink = MemoryEnv::from_process();
        return run_action(inputs, &mut sink);
    }

    let mut sink = match &cli.global.env_file {
        Some(path) => GithubEnv::with_env_file(path),
        None => GithubEnv::from_env(),
    };
    if sink.env_file().is_none() {
        tracing::debug!("GITHUB_ENV is not set, falling back to ::set-env commands");
    }
    run_action(inputs, &mut sink)
}

fn load_inputs(cli: &Cli) -> Result<ActionInputs> {
    let loader = cli.inputs.loader()?;
    for line in loader.format_loaded_files() {
        tracing::debug!("input file {line}");
    }
    loader.build()
}
