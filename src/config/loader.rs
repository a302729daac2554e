// json-env-export: JSON to environment variable exporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Input loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! InputLoader::new()
//!   .add_toml_file(req)
//!   .add_toml_str()
//!   .with_env_prefix("INPUT")
//!   .set()
//!        |
//!        v
//!    build() --> ActionInputs (trimmed)
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::ActionInputs;
use crate::error::Result;

const INPUT_KEYS: [&str; 6] = [
    "json_envs",
    "prefix",
    "include",
    "exclude",
    "convert",
    "convert_prefix",
];

/// Builder for loading action inputs from multiple sources.
pub struct InputLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    env_source: Option<HashMap<String, String>>,
    files: Vec<(String, PathBuf)>,
}

impl InputLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            env_source: None,
            files: Vec::new(),
        }
    }

    /// Adds a TOML input file.
    ///
    /// The file will be read when `build()` is called. If the file doesn't exist
    /// or contains invalid TOML, `build()` will return an error.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(true));
        self.files.push(("file".to_string(), p.to_path_buf()));
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        use config::{File, FileFormat};
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.files
            .push(("string".to_string(), PathBuf::from("<string>")));
        self
    }

    /// Reads `<PREFIX>_<KEY>` environment variables, e.g. `INPUT_JSON_ENVS`.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Reads prefixed variables from `vars` instead of the process environment.
    #[must_use]
    pub fn with_env_source(mut self, vars: HashMap<String, String>) -> Self {
        self.env_source = Some(vars);
        self
    }

    /// Sets an input override.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid.
    pub fn set(mut self, key: &str, value: &str) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| anyhow::anyhow!("Config error: {e}"))?;
        Ok(self)
    }

    /// Sets an override only when `value` is present.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid.
    pub fn set_opt(self, key: &str, value: Option<&str>) -> Result<Self> {
        match value {
            Some(value) => self.set(key, value),
            None => Ok(self),
        }
    }

    /// Builds the inputs from all added sources, trimming every value.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required input files are missing.
    /// - Input files have invalid TOML syntax or unknown keys.
    pub fn build(self) -> Result<ActionInputs> {
        let mut builder = self.builder;
        for key in INPUT_KEYS {
            builder = builder
                .set_default(key, "")
                .map_err(|e| anyhow::anyhow!("Config error: {e}"))?;
        }

        if let Some(prefix) = &self.env_prefix {
            let vars = self
                .env_source
                .unwrap_or_else(|| std::env::vars().collect());
            builder = builder.add_source(
                config::Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .source(Some(input_vars(prefix, vars))),
            );
        }

        let inputs: ActionInputs = builder.build()?.try_deserialize()?;
        Ok(inputs.trimmed())
    }

    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.files
            .iter()
            .enumerate()
            .map(|(i, (source, path))| format!("{}. [{}] {}", i + 1, source, path.display()))
            .collect()
    }
}

/// Keeps only `<PREFIX>_<KEY>` variables for known input keys.
fn input_vars(prefix: &str, vars: HashMap<String, String>) -> HashMap<String, String> {
    let prefix = format!("{}_", prefix.to_lowercase());
    vars.into_iter()
        .filter(|(name, _)| {
            name.to_lowercase()
                .strip_prefix(&prefix)
                .is_some_and(|key| INPUT_KEYS.contains(&key))
        })
        .collect()
}

impl Default for InputLoader {
    fn default() -> Self {
        Self::new()
    }
}
