// json-env-export: JSON to environment variable exporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> InputLoader --> cmd::export::run_action --> EnvSink
//! ```

pub mod export;
