// json-env-export: JSON to environment variable exporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Export driver.
//!
//! ```text
//! ActionInputs --> env_map() then rules()   (all config errors surface here)
//!                        |
//!                        v
//!          for key in env_map (source order)
//!            is_eligible? --no--> skip
//!            compute_name
//!            existing non-empty value? --> warn
//!            sink.export_variable(name, value)
//! ```

use std::process::ExitCode;

use tracing::{debug, error, info, warn};

use crate::config::{ActionInputs, EnvMap};
use crate::env::EnvSink;
use crate::error::{ExportResult, Result};
use crate::rules::Rules;

/// Outcome of one export pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    /// Final names, in export order.
    pub exported: Vec<String>,
    /// Final names that replaced a non-empty existing value.
    pub overwritten: Vec<String>,
    /// Keys rejected by the filters.
    pub skipped: usize,
}

/// Resolves `inputs` and exports every eligible key to `sink`.
///
/// Nothing is exported when the inputs are invalid.
///
/// # Errors
///
/// Returns an error for invalid inputs or when the sink fails to write.
pub fn run<E: EnvSink>(inputs: &ActionInputs, sink: &mut E) -> Result<ExportReport> {
    let envs = inputs.env_map()?;
    let rules = inputs.rules()?;
    Ok(export_envs(&rules, &envs, sink)?)
}

/// Single pass over `envs`: filter, rename, export.
///
/// # Errors
///
/// Stops at the first variable the sink cannot write.
pub fn export_envs<E: EnvSink>(
    rules: &Rules,
    envs: &EnvMap,
    sink: &mut E,
) -> ExportResult<ExportReport> {
    let mut report = ExportReport::default();

    for (key, value) in envs {
        if !rules.is_eligible(key) {
            report.skipped += 1;
            continue;
        }

        let name = rules.compute_name(key);

        if sink.read_variable(&name).is_some_and(|v| !v.is_empty()) {
            warn!("Will re-write \"{name}\" environment variable.");
            report.overwritten.push(name.clone());
        }

        sink.export_variable(&name, value)?;
        info!("Exported secret {name}");
        report.exported.push(name);
    }

    Ok(report)
}

/// Marks the run as failed with `message`.
pub fn report_failure(message: &str) -> ExitCode {
    error!("{message}");
    ExitCode::FAILURE
}

/// Top-level entry: runs the export and turns any error into a failure report.
pub fn run_action<E: EnvSink>(inputs: Result<ActionInputs>, sink: &mut E) -> ExitCode {
    match inputs.and_then(|inputs| run(&inputs, sink)) {
        Ok(report) => {
            debug!(
                "exported {} variable(s), skipped {}, overwrote {}",
                report.exported.len(),
                report.skipped,
                report.overwritten.len()
            );
            ExitCode::SUCCESS
        }
        Err(e) => report_failure(&e.to_string()),
    }
}
