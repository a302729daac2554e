// json-env-export: JSON to environment variable exporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! GitHub Actions workflow commands.
//!
//! ```text
//! ::command prop=value,prop=value::message
//!
//! message  %  -> %25   \r -> %0D   \n -> %0A
//! property     (as message) plus  : -> %3A   , -> %2C
//! ```

/// Escapes the message part of a workflow command.
#[must_use]
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escapes a property value of a workflow command.
#[must_use]
pub fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

/// Renders a workflow command line (without trailing newline).
#[must_use]
pub fn command(name: &str, properties: &[(&str, &str)], message: &str) -> String {
    let mut line = format!("::{name}");
    if !properties.is_empty() {
        let props = properties
            .iter()
            .map(|(key, value)| format!("{key}={}", escape_property(value)))
            .collect::<Vec<_>>()
            .join(",");
        line.push(' ');
        line.push_str(&props);
    }
    line.push_str("::");
    line.push_str(&escape_data(message));
    line
}

/// Whether the process runs inside a GitHub Actions job.
#[must_use]
pub fn is_github_actions() -> bool {
    std::env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true")
}

#[cfg(test)]
mod tests;
