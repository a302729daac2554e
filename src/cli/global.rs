// json-env-export: JSON to environment variable exporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options.
//!
//! ```text
//! --log-level N     ← Console verbosity (0-5)
//! --file-log-level  ← File verbosity (falls back to --log-level)
//! --log-file FILE   ← Also log to FILE
//! --log-format F    ← pretty | workflow (auto: workflow under GitHub Actions)
//! --env-file FILE   ← Export target, overrides $GITHUB_ENV
//! --dry             ← Resolve and log only, export nothing
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::logging::{LogConfig, LogFormat, LogLevel};

/// Global options.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Resolves inputs and logs what would be exported without writing anything.
    #[arg(long)]
    pub dry: bool,

    /// File to append exported variables to. Defaults to $GITHUB_ENV.
    #[arg(long = "env-file", value_name = "FILE")]
    pub env_file: Option<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Console output style. Defaults to `workflow` when GITHUB_ACTIONS=true.
    #[arg(long = "log-format", value_enum, value_name = "FORMAT")]
    pub log_format: Option<LogFormat>,
}

impl GlobalOptions {
    /// Builds the logging configuration.
    ///
    /// `in_actions` selects the workflow format and debug level when nothing
    /// was asked for explicitly; the runner hides debug lines by itself.
    #[must_use]
    pub fn log_config(&self, in_actions: bool) -> LogConfig {
        let format = self.log_format.unwrap_or(if in_actions {
            LogFormat::Workflow
        } else {
            LogFormat::Pretty
        });

        let default_level = if format == LogFormat::Workflow {
            LogLevel::DEBUG
        } else {
            LogLevel::INFO
        };

        let console_level = self
            .log_level
            .and_then(LogLevel::from_u8)
            .unwrap_or(default_level);

        let file_level = self
            .file_log_level
            .and_then(LogLevel::from_u8)
            .unwrap_or(console_level);

        LogConfig::builder()
            .with_console_level(console_level)
            .with_file_level(file_level)
            .with_format(format)
            .maybe_with_log_file(self.log_file.as_ref().map(|p| p.display().to_string()))
            .build()
    }
}
