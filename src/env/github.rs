// json-env-export: JSON to environment variable exporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! GitHub Actions environment file commands.
//!
//! ```text
//! GITHUB_ENV set:    NAME<<ghadelimiter_<uuid>
//!                    VALUE
//!                    ghadelimiter_<uuid>
//! GITHUB_ENV unset:  ::set-env name=NAME::VALUE   (stdout)
//! ```

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::trace;

use super::EnvSink;
use crate::error::{ExportError, ExportResult};
use crate::workflow;

const EOL: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Exports variables to the runner through the `GITHUB_ENV` file.
#[derive(Debug, Clone, Default)]
pub struct GithubEnv {
    env_file: Option<PathBuf>,
    exported: BTreeMap<String, String>,
}

impl GithubEnv {
    /// Uses the file named by `GITHUB_ENV`, if set and non-empty.
    #[must_use]
    pub fn from_env() -> Self {
        let env_file = std::env::var_os("GITHUB_ENV")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self {
            env_file,
            exported: BTreeMap::new(),
        }
    }

    /// Writes to an explicit environment file.
    #[must_use]
    pub fn with_env_file(path: impl Into<PathBuf>) -> Self {
        Self {
            env_file: Some(path.into()),
            exported: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn env_file(&self) -> Option<&Path> {
        self.env_file.as_deref()
    }

    fn append_to_file(path: &Path, name: &str, value: &str) -> ExportResult<()> {
        let delimiter = format!("ghadelimiter_{}", uuid::Uuid::new_v4());
        Self::append_entry(path, name, value, &delimiter)
    }

    pub(super) fn append_entry(
        path: &Path,
        name: &str,
        value: &str,
        delimiter: &str,
    ) -> ExportResult<()> {
        if name.contains(delimiter) || value.contains(delimiter) {
            return Err(ExportError::DelimiterCollision {
                name: name.to_string(),
                delimiter: delimiter.to_string(),
            });
        }

        let entry = format!("{name}<<{delimiter}{EOL}{value}{EOL}{delimiter}{EOL}");
        let write_failed = |source: std::io::Error| ExportError::WriteFailed {
            path: path.display().to_string(),
            source,
        };

        // The runner creates the file; a missing one is an error, not something to create.
        let mut file = std::fs::OpenOptions::new()
            .append(true)
            .open(path)
            .map_err(write_failed)?;
        file.write_all(entry.as_bytes()).map_err(write_failed)?;

        trace!("appended {name} to {}", path.display());
        Ok(())
    }
}

impl EnvSink for GithubEnv {
    fn read_variable(&self, name: &str) -> Option<String> {
        self.exported
            .get(name)
            .cloned()
            .or_else(|| std::env::var(name).ok())
    }

    fn export_variable(&mut self, name: &str, value: &str) -> ExportResult<()> {
        match &self.env_file {
            Some(path) => Self::append_to_file(path, name, value)?,
            None => println!("{}", workflow::command("set-env", &[("name", name)], value)),
        }
        self.exported.insert(name.to_string(), value.to_string());
        Ok(())
    }
}
