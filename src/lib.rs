// json-env-export: JSON to environment variable exporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)        cmd::export (driver)
//!                |                     |
//!                v                     v
//!     ,----------------------,   ,-----------,
//!     |        config        |   |    env    |
//!     | TOML + INPUT_* + CLI |   |  EnvSink  |
//!     '----------+-----------'   '-----+-----'
//!                v                     |
//!              rules                workflow
//!        include / exclude       ::commands::
//!          prefix + convert
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod convert;
pub mod env;
pub mod error;
pub mod logging;
pub mod rules;
pub mod workflow;
