// json-env-export: JSON to environment variable exporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Name casing converters.
//!
//! ```text
//! lower     FOO_bar.Baz  --> foo_bar.baz   (whole string)
//! upper     FOO_bar.Baz  --> FOO_BAR.BAZ   (whole string)
//! camel     FOO_bar.Baz  --> fooBarBaz     (word based)
//! pascal    FOO_bar.Baz  --> FooBarBaz
//! constant  FOO_bar.Baz  --> FOO_BAR_BAZ
//! snake     FOO_bar.Baz  --> foo_bar_baz
//! ```
//!
//! # Word splitting
//!
//! ```text
//! aB  -> a|B      lower or digit followed by upper
//! ABc -> A|Bc     upper followed by upper + lower
//! any non [A-Za-z0-9] run is a separator and is dropped
//! ```

use crate::error::ConfigError;

/// The fixed set of casing transforms applied to exported names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Converter {
    Lower,
    Upper,
    Camel,
    Constant,
    Pascal,
    Snake,
}

impl Converter {
    /// Every converter, in the order they are listed to users.
    pub const ALL: [Self; 6] = [
        Self::Lower,
        Self::Upper,
        Self::Camel,
        Self::Constant,
        Self::Pascal,
        Self::Snake,
    ];

    /// Input name of the converter.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lower => "lower",
            Self::Upper => "upper",
            Self::Camel => "camel",
            Self::Constant => "constant",
            Self::Pascal => "pascal",
            Self::Snake => "snake",
        }
    }

    /// Comma separated list of valid converter names.
    #[must_use]
    pub fn available() -> String {
        Self::ALL
            .iter()
            .map(Self::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Parses the raw `convert` input. An empty string means no conversion.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownConverter`] for any other unknown name.
    pub fn from_input(raw: &str) -> Result<Option<Self>, ConfigError> {
        if raw.is_empty() {
            return Ok(None);
        }
        raw.parse().map(Some)
    }

    /// Applies the transform to `input`.
    #[must_use]
    pub fn apply(&self, input: &str) -> String {
        match self {
            Self::Lower => input.to_ascii_lowercase(),
            Self::Upper => input.to_ascii_uppercase(),
            Self::Camel => camel_case(input),
            Self::Constant => constant_case(input),
            Self::Pascal => pascal_case(input),
            Self::Snake => snake_case(input),
        }
    }
}

impl std::fmt::Display for Converter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Converter {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownConverter {
                value: s.to_string(),
            })
    }
}

/// Splits `input` into words at case changes and separator runs.
#[must_use]
pub fn split_words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_ascii_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if !current.is_empty() && is_boundary(chars[i - 1], c, chars.get(i + 1).copied()) {
            words.push(std::mem::take(&mut current));
        }
        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// `prev` is always the alphanumeric char right before `c`.
const fn is_boundary(prev: char, c: char, next: Option<char>) -> bool {
    let lower_to_upper =
        (prev.is_ascii_lowercase() || prev.is_ascii_digit()) && c.is_ascii_uppercase();
    let acronym_end = prev.is_ascii_uppercase()
        && c.is_ascii_uppercase()
        && matches!(next, Some(n) if n.is_ascii_lowercase());
    lower_to_upper || acronym_end
}

fn capitalize(word: &str, index: usize) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let rest = chars.as_str().to_ascii_lowercase();
    // A digit can't carry case, keep words apart with an underscore.
    if index > 0 && first.is_ascii_digit() {
        format!("_{first}{rest}")
    } else {
        format!("{}{rest}", first.to_ascii_uppercase())
    }
}

fn camel_case(input: &str) -> String {
    split_words(input)
        .iter()
        .enumerate()
        .map(|(i, word)| {
            if i == 0 {
                word.to_ascii_lowercase()
            } else {
                capitalize(word, i)
            }
        })
        .collect()
}

fn pascal_case(input: &str) -> String {
    split_words(input)
        .iter()
        .enumerate()
        .map(|(i, word)| capitalize(word, i))
        .collect()
}

fn constant_case(input: &str) -> String {
    split_words(input)
        .iter()
        .map(|word| word.to_ascii_uppercase())
        .collect::<Vec<_>>()
        .join("_")
}

fn snake_case(input: &str) -> String {
    split_words(input)
        .iter()
        .map(|word| word.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}
