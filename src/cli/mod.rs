// json-env-export: JSON to environment variable exporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module using clap derive.
//!
//! # Argument Structure
//!
//! ```text
//! json-env-export [global options] [input flags]
//!
//! input flags   --json-envs --prefix --include --exclude
//!               --convert --convert-prefix
//! sources       --config FILE, INPUT_* env vars
//! output        --env-file FILE (default $GITHUB_ENV), --dry
//! ```

pub mod global;

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use clap::{Args, Parser};

use crate::cli::global::GlobalOptions;
use crate::config::loader::InputLoader;
use crate::error::Result;

/// Export a JSON object as environment variables for later workflow steps.
#[derive(Debug, Parser)]
#[command(
    name = "json-env-export",
    author,
    version,
    about = "Export JSON key/value pairs as environment variables",
    long_about = "Export JSON key/value pairs as environment variables.\n\n\
                  Reads the action inputs from INPUT_* environment variables,\n\
                  an optional TOML file and command-line flags, filters the keys\n\
                  with include/exclude patterns, renames them and writes them to\n\
                  the file named by GITHUB_ENV.",
    after_help = "INPUTS:\n\n\
                  Every input can come from a TOML file (--config), from the\n\
                  matching INPUT_<NAME> environment variable as set by the\n\
                  GitHub Actions runner, or from a flag. Flags win over the\n\
                  environment, which wins over the file. The key `github_token`\n\
                  is never exported."
)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Action inputs
    #[command(flatten)]
    pub inputs: InputArgs,
}

/// Action inputs given on the command line.
#[derive(Debug, Clone, Default, Args)]
pub struct InputArgs {
    /// JSON object of key/value pairs to export.
    #[arg(long = "json-envs", value_name = "JSON")]
    pub json_envs: Option<String>,

    /// Prefix for every exported name.
    #[arg(long)]
    pub prefix: Option<String>,

    /// Comma separated regular expressions; only matching keys are exported.
    #[arg(long, value_name = "PATTERNS")]
    pub include: Option<String>,

    /// Comma separated regular expressions; matching keys are never exported.
    #[arg(long, value_name = "PATTERNS")]
    pub exclude: Option<String>,

    /// Name casing: lower, upper, camel, constant, pascal or snake.
    #[arg(long, value_name = "CASE")]
    pub convert: Option<String>,

    /// Whether the casing also applies to the prefix ("true" or anything else).
    #[arg(long = "convert-prefix", value_name = "BOOL")]
    pub convert_prefix: Option<String>,

    /// TOML file with input values.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl InputArgs {
    /// Builds the input loader: file, then `INPUT_*` variables, then flags.
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be applied.
    pub fn loader(&self) -> Result<InputLoader> {
        let mut loader = InputLoader::new();
        if let Some(path) = &self.config {
            loader = loader.add_toml_file(path);
        }
        loader
            .with_env_prefix("INPUT")
            .set_opt("json_envs", self.json_envs.as_deref())?
            .set_opt("prefix", self.prefix.as_deref())?
            .set_opt("include", self.include.as_deref())?
            .set_opt("exclude", self.exclude.as_deref())?
            .set_opt("convert", self.convert.as_deref())?
            .set_opt("convert_prefix", self.convert_prefix.as_deref())
    }
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
