// json-env-export: JSON to environment variable exporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Export rules: which keys are exported and under which name.
//!
//! ```text
//! key --> include? --> exclude? --> prefix --> converter --> final name
//!         (any match   (any match    |          |
//!          if given)    rejects)     |   convert_prefix=false:
//!                                    |   prefix + conv(with_prefix - prefix)
//!                                    |   convert_prefix=true:
//!                                    |   conv(prefix + key)
//! ```
//!
//! The exclude set always starts with [`TOKEN_EXCLUDE`]; user patterns are
//! appended after it and can never remove it.

mod patterns;

pub use patterns::PatternSet;

use crate::convert::Converter;
use crate::error::ConfigResult;

/// Built-in exclusion for the workflow token, which the runner already exports.
pub const TOKEN_EXCLUDE: &str = "github_token";

/// Immutable filtering and renaming rules for one run.
#[derive(Debug, Clone)]
pub struct Rules {
    prefix: String,
    include: Option<PatternSet>,
    exclude: PatternSet,
    converter: Option<Converter>,
    convert_prefix: bool,
}

#[bon::bon]
impl Rules {
    /// Builds the rules, compiling every pattern up front.
    ///
    /// An empty `include` list is the same as no include list.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ConfigError::InvalidPattern`] for the first
    /// pattern that is not a valid regular expression.
    #[builder]
    pub fn new(
        #[builder(into, default)] prefix: String,
        include: Option<Vec<String>>,
        #[builder(default)] exclude: Vec<String>,
        converter: Option<Converter>,
        #[builder(default = true)] convert_prefix: bool,
    ) -> ConfigResult<Self> {
        let include = match include {
            Some(patterns) if !patterns.is_empty() => Some(PatternSet::compile(&patterns)?),
            _ => None,
        };

        let exclude = std::iter::once(TOKEN_EXCLUDE.to_string())
            .chain(exclude)
            .collect::<Vec<_>>();

        Ok(Self {
            prefix,
            include,
            exclude: PatternSet::compile(&exclude)?,
            converter,
            convert_prefix,
        })
    }
}

impl Rules {
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[must_use]
    pub const fn include(&self) -> Option<&PatternSet> {
        self.include.as_ref()
    }

    /// Exclude patterns, built-in token exclusion first.
    #[must_use]
    pub const fn exclude(&self) -> &PatternSet {
        &self.exclude
    }

    #[must_use]
    pub const fn converter(&self) -> Option<Converter> {
        self.converter
    }

    #[must_use]
    pub const fn convert_prefix(&self) -> bool {
        self.convert_prefix
    }

    /// Whether `key` survives both filter stages. Exclusion wins over inclusion.
    #[must_use]
    pub fn is_eligible(&self, key: &str) -> bool {
        if let Some(include) = &self.include
            && !include.matches(key)
        {
            return false;
        }
        !self.exclude.matches(key)
    }

    /// Computes the exported name of `key`.
    #[must_use]
    pub fn compute_name(&self, key: &str) -> String {
        let with_prefix = format!("{}{key}", self.prefix);

        let Some(converter) = self.converter else {
            return with_prefix;
        };

        if self.convert_prefix {
            converter.apply(&with_prefix)
        } else {
            // Plain first-occurrence removal, not an anchored strip.
            let rest = with_prefix.replacen(&self.prefix, "", 1);
            format!("{}{}", self.prefix, converter.apply(&rest))
        }
    }
}
