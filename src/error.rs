// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Only two things can fail: fetching the index and reading configuration.
//! A query never fails. Short queries and zero matches are ordinary empty
//! result sets, not errors.

use std::path::PathBuf;
use thiserror::Error;

/// The index could not be loaded. The search feature stays inert.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The server (or the site directory standing in for it) answered with a
    /// non-success status.
    #[error("HTTP error! status: {status} ({path})")]
    Status { path: String, status: u16 },

    /// The index file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The body is not a JSON array of documents.
    #[error("invalid search index JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The browser fetch itself was rejected (offline, CORS, aborted).
    #[error("fetch failed: {0}")]
    Network(String),
}

impl LoadError {
    /// HTTP status carried by the error, if the failure was a status failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            LoadError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Configuration could not be assembled or failed validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Extract(#[from] Box<figment::Error>),

    #[error("invalid configuration: {field} must be at least {min}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: u64,
        value: u64,
    },

    #[error("invalid configuration: index_path must start with '/', got {0:?}")]
    RelativeIndexPath(String),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::Extract(Box::new(err))
    }
}
