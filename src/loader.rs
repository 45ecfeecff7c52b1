// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Getting the document array off the server.
//!
//! One GET, no retries, no timeout. The browser binding does the actual fetch
//! and hands status + body to [`parse_response`]; native callers read a built
//! site directory, where a missing file answers 404 the way a static server
//! would.

use crate::error::LoadError;
use crate::types::Document;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Turn an HTTP response into documents. Any non-2xx status fails fast.
pub fn parse_response(path: &str, status: u16, body: &[u8]) -> Result<Vec<Document>, LoadError> {
    if !(200..300).contains(&status) {
        return Err(LoadError::Status {
            path: path.to_string(),
            status,
        });
    }
    parse_documents(body)
}

/// Parse a JSON array of documents.
pub fn parse_documents(body: &[u8]) -> Result<Vec<Document>, LoadError> {
    let docs: Vec<Document> = serde_json::from_slice(body)?;
    tracing::debug!(count = docs.len(), bytes = body.len(), "parsed search index");
    Ok(docs)
}

/// Read an index file from disk.
pub fn load_from_file(path: &Path) -> Result<Vec<Document>, LoadError> {
    match fs::read(path) {
        Ok(bytes) => parse_documents(&bytes),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(LoadError::Status {
            path: path.display().to_string(),
            status: 404,
        }),
        Err(source) => Err(LoadError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Read the index from a built site, resolving the server-relative
/// `index_path` (e.g. `/search.json`) under `site_root`.
pub fn load_from_site(site_root: &Path, index_path: &str) -> Result<Vec<Document>, LoadError> {
    let path = resolve_site_path(site_root, index_path);
    load_from_file(&path).map_err(|e| match e {
        LoadError::Status { status, .. } => LoadError::Status {
            path: index_path.to_string(),
            status,
        },
        other => other,
    })
}

/// Load from either an index file or a built site root directory.
pub fn load_path(path: &Path, index_path: &str) -> Result<Vec<Document>, LoadError> {
    if path.is_dir() {
        load_from_site(path, index_path)
    } else {
        load_from_file(path)
    }
}

/// `"/search.json"` under `_site` is `_site/search.json`.
pub fn resolve_site_path(site_root: &Path, index_path: &str) -> PathBuf {
    site_root.join(index_path.trim_start_matches('/'))
}
