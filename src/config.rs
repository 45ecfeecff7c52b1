// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime knobs for the search widget.
//!
//! Defaults reproduce the shipped widget exactly. `load` layers a TOML file and
//! `SITESEARCH_*` environment variables on top with figment; the browser binding
//! deserializes the same struct from a JS object.
//!
//! Scoring weights are deliberately absent: they live in [`crate::scoring`].

use crate::error::ConfigError;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Server-relative path the index is fetched from.
pub const DEFAULT_INDEX_PATH: &str = "/search.json";

/// Trimmed queries with fewer characters than this return nothing.
pub const DEFAULT_MIN_QUERY_CHARS: usize = 2;

/// Result lists are truncated to this many entries.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Input debounce delay in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u32 = 300;

/// Excerpts longer than this many characters are cut and suffixed with `...`.
pub const DEFAULT_EXCERPT_CHARS: usize = 120;

/// Delay before the input receives focus after the modal opens.
pub const DEFAULT_FOCUS_DELAY_MS: u32 = 100;

/// Environment prefix for overrides, e.g. `SITESEARCH_MAX_RESULTS=5`.
pub const ENV_PREFIX: &str = "SITESEARCH_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    pub index_path: String,
    pub min_query_chars: usize,
    pub max_results: usize,
    pub debounce_ms: u32,
    pub excerpt_chars: usize,
    pub focus_delay_ms: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            index_path: DEFAULT_INDEX_PATH.to_string(),
            min_query_chars: DEFAULT_MIN_QUERY_CHARS,
            max_results: DEFAULT_MAX_RESULTS,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            excerpt_chars: DEFAULT_EXCERPT_CHARS,
            focus_delay_ms: DEFAULT_FOCUS_DELAY_MS,
        }
    }
}

impl SearchConfig {
    /// Defaults, then the TOML file (if given), then `SITESEARCH_*` env vars.
    ///
    /// TOML keys use snake_case (`max_results = 5`); the env provider maps
    /// `SITESEARCH_MAX_RESULTS` onto the same key.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(SnakeCase::from(Self::default())));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX));

        let config: Self = figment.extract::<SnakeCase>()?.into();
        config.validate()?;
        tracing::debug!(?config, "loaded search config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let at_least_one = [
            ("min_query_chars", self.min_query_chars),
            ("max_results", self.max_results),
            ("excerpt_chars", self.excerpt_chars),
        ];
        for (field, value) in at_least_one {
            if value == 0 {
                return Err(ConfigError::OutOfRange {
                    field,
                    min: 1,
                    value: 0,
                });
            }
        }
        if !self.index_path.starts_with('/') {
            return Err(ConfigError::RelativeIndexPath(self.index_path.clone()));
        }
        Ok(())
    }
}

/// File/env spelling of [`SearchConfig`]. The public struct is camelCase for JS.
#[derive(Serialize, Deserialize)]
#[serde(default)]
struct SnakeCase {
    index_path: String,
    min_query_chars: usize,
    max_results: usize,
    debounce_ms: u32,
    excerpt_chars: usize,
    focus_delay_ms: u32,
}

impl Default for SnakeCase {
    fn default() -> Self {
        SearchConfig::default().into()
    }
}

impl From<SearchConfig> for SnakeCase {
    fn from(c: SearchConfig) -> Self {
        Self {
            index_path: c.index_path,
            min_query_chars: c.min_query_chars,
            max_results: c.max_results,
            debounce_ms: c.debounce_ms,
            excerpt_chars: c.excerpt_chars,
            focus_delay_ms: c.focus_delay_ms,
        }
    }
}

impl From<SnakeCase> for SearchConfig {
    fn from(c: SnakeCase) -> Self {
        Self {
            index_path: c.index_path,
            min_query_chars: c.min_query_chars,
            max_results: c.max_results,
            debounce_ms: c.debounce_ms,
            excerpt_chars: c.excerpt_chars,
            focus_delay_ms: c.focus_delay_ms,
        }
    }
}
