// json-env-export: JSON to environment variable exporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Action inputs and their resolution into [`Rules`].
//!
//! # Input Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults (all empty)
//! 2. --config FILE (TOML)
//! 3. INPUT_* env vars
//! 4. CLI flags
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! INPUT_JSON_ENVS='{"A":"1"}'  → json_envs
//! INPUT_CONVERT=snake          → convert
//! INPUT_CONVERT_PREFIX=false   → convert_prefix
//! ```

pub mod loader;


use indexmap::IndexMap;
use serde::Deserialize;
use tracing::debug;

use crate::convert::Converter;
use crate::error::{ConfigError, ConfigResult, Result};
use crate::rules::Rules;

use loader::InputLoader;

/// Parsed `json_envs` payload, in source order.
pub type EnvMap = IndexMap<String, String>;

/// Raw action inputs, as strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ActionInputs {
    /// JSON object of key/value pairs to export. Required.
    pub json_envs: String,
    /// Prepended to every exported name.
    pub prefix: String,
    /// Comma separated include patterns.
    pub include: String,
    /// Comma separated exclude patterns, added to the built-in token exclusion.
    pub exclude: String,
    /// Converter name, empty for none.
    pub convert: String,
    /// `"true"` or anything else; empty means true.
    pub convert_prefix: String,
}

impl ActionInputs {
    /// Create a new input loader.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use json_env_export::config::ActionInputs;
    ///
    /// let inputs = ActionInputs::loader()
    ///     .add_toml_file("json-env-export.toml")
    ///     .with_env_prefix("INPUT")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn loader() -> InputLoader {
        InputLoader::new()
    }

    /// Load inputs from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or has unknown keys.
    pub fn parse(content: &str) -> Result<Self> {
        Self::loader().add_toml_str(content).build()
    }

    /// Copy with every value whitespace-trimmed.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self {
            json_envs: self.json_envs.trim().to_string(),
            prefix: self.prefix.trim().to_string(),
            include: self.include.trim().to_string(),
            exclude: self.exclude.trim().to_string(),
            convert: self.convert.trim().to_string(),
            convert_prefix: self.convert_prefix.trim().to_string(),
        }
    }

    /// Builds the export rules.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for an unknown converter or a bad pattern.
    pub fn rules(&self) -> ConfigResult<Rules> {
        let include = split_patterns(&self.include);
        let exclude = split_patterns(&self.exclude).unwrap_or_default();
        let converter = Converter::from_input(&self.convert)?;
        let convert_prefix = parse_convert_prefix(&self.convert_prefix);

        let rules = Rules::builder()
            .prefix(self.prefix.as_str())
            .maybe_include(include)
            .exclude(exclude)
            .maybe_converter(converter)
            .convert_prefix(convert_prefix)
            .build()?;

        debug!(
            "Using include list: {}",
            rules.include().map(ToString::to_string).unwrap_or_default()
        );
        debug!("Using exclude list: {}", rules.exclude());
        Ok(rules)
    }

    /// Parses `json_envs`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingInput`] when it's empty and
    /// [`ConfigError::InvalidJson`] when it isn't a flat string map.
    pub fn env_map(&self) -> ConfigResult<EnvMap> {
        if self.json_envs.is_empty() {
            return Err(ConfigError::MissingInput {
                name: "json_envs".to_string(),
            });
        }
        parse_env_map(&self.json_envs)
    }
}

/// Splits a comma separated pattern list. Empty input means no list.
#[must_use]
pub fn split_patterns(raw: &str) -> Option<Vec<String>> {
    if raw.is_empty() {
        return None;
    }
    Some(raw.split(',').map(|s| s.trim().to_string()).collect())
}

/// Empty defaults to true, otherwise only the literal `true` enables it.
#[must_use]
pub fn parse_convert_prefix(raw: &str) -> bool {
    raw.is_empty() || raw == "true"
}

/// Parses a JSON object of string values, keeping key order.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidJson`] for anything but a flat string map.
pub fn parse_env_map(json: &str) -> ConfigResult<EnvMap> {
    serde_json::from_str(json).map_err(|source| ConfigError::InvalidJson { source })
}
