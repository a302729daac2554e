// json-env-export: JSON to environment variable exporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::BTreeMap;

use super::EnvSink;
use crate::error::ExportResult;

/// In-memory environment used for dry runs and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryEnv {
    vars: BTreeMap<String, String>,
    exports: Vec<(String, String)>,
}

impl MemoryEnv {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing set of variables.
    #[must_use]
    pub fn from_map(vars: BTreeMap<String, String>) -> Self {
        Self {
            vars,
            exports: Vec::new(),
        }
    }

    /// Snapshot of the current process environment.
    #[must_use]
    pub fn from_process() -> Self {
        Self::from_map(std::env::vars().collect())
    }

    /// Adds a pre-existing variable.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Exports in the order they happened.
    #[must_use]
    pub fn exports(&self) -> &[(String, String)] {
        &self.exports
    }
}

impl EnvSink for MemoryEnv {
    fn read_variable(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn export_variable(&mut self, name: &str, value: &str) -> ExportResult<()> {
        self.vars.insert(name.to_string(), value.to_string());
        self.exports.push((name.to_string(), value.to_string()));
        Ok(())
    }
}
