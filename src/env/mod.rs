// json-env-export: JSON to environment variable exporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment export targets.
//!
//! # Architecture
//!
//! ```text
//!              EnvSink
//!          read / export
//!           |         |
//!           v         v
//!      GithubEnv    MemoryEnv
//!   GITHUB_ENV file   BTreeMap seed
//!   or ::set-env      + ordered exports
//! ```
//!
//! Reads see values exported earlier in the same run.

pub mod github;
pub mod memory;


pub use github::GithubEnv;
pub use memory::MemoryEnv;

use crate::error::ExportResult;

/// Publishes variables to the steps that run after this one.
pub trait EnvSink {
    /// Current value of `name`, if any.
    fn read_variable(&self, name: &str) -> Option<String>;

    /// Makes `name=value` visible to later steps.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable cannot be written.
    fn export_variable(&mut self, name: &str, value: &str) -> ExportResult<()>;
}
