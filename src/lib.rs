// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Client-side site search for statically generated sites.
//!
//! A static site emits one JSON array describing its pages. This crate loads
//! that array, builds a lowercase search text per document, answers queries
//! with a fixed title/content keyword score, and drives a keyboard-friendly
//! search modal as a pure state machine.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  loader.rs  │────▶│  index.rs    │────▶│  search.rs  │
//! │ (JSON array,│     │ (build_index,│     │ (search,    │
//! │  LoadError) │     │  search_text)│     │  scoring.rs)│
//! └─────────────┘     └──────────────┘     └─────────────┘
//!        │                                        │
//!        ▼                                        ▼
//! ┌─────────────────────────────────────────────────────┐
//! │  site.rs (SiteSearch: Loading → Ready | Disabled)    │
//! │    └─ modal/ (SearchModal: events in, effects out)   │
//! │         └─ render.rs (View, HTML markup)             │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The browser binding lives in `runtime::wasm` behind the `wasm` feature.
//! The `sitesearch` binary runs the same code against a built site on disk.
//!
//! # Usage
//!
//! ```
//! use sitesearch::{build_index, search, Document};
//!
//! let docs: Vec<Document> = serde_json::from_str(
//!     r#"[{"title": "Rust Basics", "url": "/rust", "type": "post", "excerpt": "ownership"}]"#,
//! ).unwrap();
//! let index = build_index(docs);
//!
//! let results = search(&index, "rust");
//! assert_eq!(results[0].url(), "/rust");
//! assert_eq!(results[0].score, 11);
//! ```

pub mod config;
pub mod error;
mod index;
pub mod loader;
pub mod modal;
pub mod render;
mod scoring;
mod search;
mod site;
mod types;

#[doc(hidden)]
pub mod testing;

#[cfg(feature = "wasm")]
mod runtime;

pub use config::SearchConfig;
pub use error::{ConfigError, LoadError};
pub use index::{build_index, search_text};
pub use loader::{load_from_file, load_from_site, load_path, parse_documents, parse_response};
pub use modal::{Effect, Key, KeyPress, ModalEvent, ModalState, SearchModal};
pub use render::{modal_markup, render, RenderOptions, View, ViewState};
pub use scoring::{score_document, DocScore, CONTENT_MATCH_SCORE, TITLE_MATCH_SCORE};
pub use search::{is_searchable, query_terms, search, search_with};
pub use site::{Readiness, SiteSearch};
pub use types::{Document, IndexedDocument, ScoredResult, SearchIndex};
