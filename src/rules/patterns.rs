// json-env-export: JSON to environment variable exporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use regex::Regex;

use crate::error::{ConfigError, ConfigResult};

/// An ordered list of compiled, unanchored key patterns.
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<Regex>,
}

impl PatternSet {
    /// Compiles `sources` in order, keeping duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPattern`] naming the first bad pattern.
    pub fn compile<S: AsRef<str>>(sources: &[S]) -> ConfigResult<Self> {
        let patterns = sources
            .iter()
            .map(|source| {
                let source = source.as_ref();
                Regex::new(source).map_err(|e| ConfigError::InvalidPattern {
                    pattern: source.to_string(),
                    source: Box::new(e),
                })
            })
            .collect::<ConfigResult<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// True if any pattern matches anywhere within `key`.
    #[must_use]
    pub fn matches(&self, key: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(key))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Pattern sources in their original order.
    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(Regex::as_str)
    }
}

impl std::fmt::Display for PatternSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.sources().collect::<Vec<_>>().join(", "))
    }
}
