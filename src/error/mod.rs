// json-env-export: JSON to environment variable exporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!   anyhow::Error  (application layer, cmd / main)
//!         ^
//!         |
//!   +-----+--------+
//!   |              |
//! ConfigError   ExportError
//!   MissingInput   DelimiterCollision
//!   InvalidJson    WriteFailed
//!   UnknownConverter
//!   InvalidPattern
//! ```
//!
//! Every `ConfigError` is detected before the first variable is exported.

use thiserror::Error;

use crate::convert::Converter;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`ConfigError`].
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type using [`ExportError`].
pub type ExportResult<T> = std::result::Result<T, ExportError>;

/// Configuration-related errors.
///
/// These abort the run; the message text is what ends up in the failure report.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required input was empty or absent.
    #[error("Input required and not supplied: {name}")]
    MissingInput { name: String },

    /// `json_envs` is not a flat object of string values.
    #[error("Cannot parse JSON.\nMake sure you pass a valid key:value pairs JSON ({source})")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },

    /// `convert` names something outside the fixed converter set.
    #[error(
        "Unknown convert value \"{value}\". Available: {}",
        Converter::available()
    )]
    UnknownConverter { value: String },

    /// An include or exclude pattern is not a valid regular expression.
    #[error("invalid filter pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: Box<regex::Error>,
    },
}

/// Errors raised while publishing a variable to the environment.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The heredoc delimiter shows up inside the name or the value.
    #[error("unexpected input: name or value of '{name}' contains the delimiter {delimiter}")]
    DelimiterCollision { name: String, delimiter: String },

    /// Appending to the environment file failed.
    #[error("failed to write environment file '{path}': {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
