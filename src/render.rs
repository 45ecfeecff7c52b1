// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Rendering as a pure function.
//!
//! `render(view_state) -> View` never looks at the DOM, the clock, or the
//! controller. Given the modal's open flag, the last searched query, the
//! results, and the active cursor, it produces a `View`; `View::to_html`
//! turns that into the fragment that goes inside `#site-search-results`.
//!
//! The class names are the widget stylesheet's contract:
//!
//! | Class                    | Element                               |
//! |--------------------------|---------------------------------------|
//! | `search-result`          | one entry (`active` when highlighted) |
//! | `search-result-title`    | `<h4>`, title wrapped in `<mark>` on a title hit |
//! | `search-result-type`     | type label                            |
//! | `search-result-excerpt`  | excerpt, cut at `excerpt_chars`       |
//! | `search-result-date`     | only when the document has a date     |
//! | `no-results`             | the "No results found" notice         |

use crate::config::SearchConfig;
use crate::modal::ModalState;
use crate::search::is_searchable;
use crate::types::ScoredResult;
use serde::Serialize;

/// DOM ids the host page and the stylesheet rely on.
pub const MODAL_ID: &str = "search-modal";
pub const INPUT_ID: &str = "site-search-input";
pub const RESULTS_ID: &str = "site-search-results";

/// Shown when a valid query matches nothing.
pub const NO_RESULTS_TEXT: &str = "No results found";

const ELLIPSIS: &str = "...";

/// Everything rendering depends on.
#[derive(Debug, Clone, Copy)]
pub struct ViewState<'a> {
    pub open: bool,
    /// The query the results were computed for (not the live input).
    pub query: &'a str,
    pub results: &'a [ScoredResult<'a>],
    pub active: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub min_query_chars: usize,
    pub excerpt_chars: usize,
}

impl From<&SearchConfig> for RenderOptions {
    fn from(config: &SearchConfig) -> Self {
        Self {
            min_query_chars: config.min_query_chars,
            excerpt_chars: config.excerpt_chars,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        (&SearchConfig::default()).into()
    }
}

/// One rendered result entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultEntry {
    pub title: String,
    /// Wrap the title in the emphasis marker.
    pub highlight: bool,
    pub excerpt: String,
    pub kind: String,
    pub date: Option<String>,
    pub url: String,
    pub active: bool,
}

/// What the results container should show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", content = "entries", rename_all = "camelCase")]
pub enum View {
    Hidden,
    Empty,
    NoResults,
    Results(Vec<ResultEntry>),
}

impl View {
    pub fn state(&self) -> ModalState {
        match self {
            View::Hidden => ModalState::Closed,
            View::Empty => ModalState::OpenEmpty,
            View::NoResults => ModalState::OpenNoResults,
            View::Results(_) => ModalState::OpenResults,
        }
    }

    /// The fragment for the results container. Hidden and empty views are `""`.
    pub fn to_html(&self) -> String {
        match self {
            View::Hidden | View::Empty => String::new(),
            View::NoResults => format!(r#"<div class="no-results">{}</div>"#, NO_RESULTS_TEXT),
            View::Results(entries) => {
                let mut html = String::new();
                for entry in entries {
                    write_entry(&mut html, entry);
                }
                html
            }
        }
    }
}

/// Which of the four modal states a (open, query, result count) triple is in.
pub fn classify(open: bool, query: &str, result_count: usize, min_query_chars: usize) -> ModalState {
    if !open {
        ModalState::Closed
    } else if !is_searchable(query, min_query_chars) {
        ModalState::OpenEmpty
    } else if result_count == 0 {
        ModalState::OpenNoResults
    } else {
        ModalState::OpenResults
    }
}

pub fn render(view: &ViewState<'_>, options: &RenderOptions) -> View {
    match classify(view.open, view.query, view.results.len(), options.min_query_chars) {
        ModalState::Closed => View::Hidden,
        ModalState::OpenEmpty => View::Empty,
        ModalState::OpenNoResults => View::NoResults,
        ModalState::OpenResults => View::Results(
            view.results
                .iter()
                .enumerate()
                .map(|(i, r)| ResultEntry {
                    title: r.doc.title.clone(),
                    highlight: r.matched_title(),
                    excerpt: truncate_text(&r.doc.excerpt, options.excerpt_chars),
                    kind: r.doc.kind.clone(),
                    date: r.doc.date.clone().filter(|d| !d.is_empty()),
                    url: r.doc.url.clone(),
                    active: view.active == Some(i),
                })
                .collect(),
        ),
    }
}

/// Cut at `max_chars` characters and append `...`. No word-boundary smarts.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((byte_end, _)) => format!("{}{}", &text[..byte_end], ELLIPSIS),
    }
}

fn write_entry(html: &mut String, entry: &ResultEntry) {
    let url = escape_html(&entry.url);
    let title = escape_html(&entry.title);
    let title = if entry.highlight {
        format!("<mark>{}</mark>", title)
    } else {
        title
    };
    let class = if entry.active {
        "search-result active"
    } else {
        "search-result"
    };

    html.push_str(&format!(
        r#"<div class="{class}" data-url="{url}"><a href="{url}"><div class="search-result-header"><h4 class="search-result-title">{title}</h4><span class="search-result-type">{kind}</span></div><p class="search-result-excerpt">{excerpt}</p>"#,
        kind = escape_html(&entry.kind),
        excerpt = escape_html(&entry.excerpt),
    ));
    if let Some(date) = &entry.date {
        html.push_str(&format!(
            r#"<div class="search-result-date">{}</div>"#,
            escape_html(date)
        ));
    }
    html.push_str("</a></div>");
}

/// Escape text for both element content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// The modal shell, for hosts that don't ship their own markup.
///
/// Buttons carry `data-search-action` attributes instead of inline handlers;
/// the host routes clicks on them to `BackdropClick` / `CloseButton`.
pub fn modal_markup() -> String {
    format!(
        r#"<div id="{MODAL_ID}" class="search-modal" style="display: none" role="dialog" aria-modal="true" aria-label="Site search">
  <div class="search-modal-backdrop" data-search-action="backdrop"></div>
  <div class="search-modal-content">
    <div class="search-modal-header">
      <div class="search-input-wrapper">
        <i class="fas fa-search search-icon"></i>
        <input type="text" id="{INPUT_ID}" placeholder="Search posts, projects, publications..." autocomplete="off">
        <span class="search-shortcut">Ctrl+K</span>
      </div>
      <button class="search-close-btn" data-search-action="close" aria-label="Close search">
        <i class="fas fa-times"></i>
      </button>
    </div>
    <div class="search-modal-body">
      <div id="{RESULTS_ID}" class="search-results"></div>
    </div>
    <div class="search-modal-footer">
      <div class="search-tips">
        <span><kbd>↑</kbd><kbd>↓</kbd> to navigate</span>
        <span><kbd>Enter</kbd> to select</span>
        <span><kbd>Esc</kbd> to close</span>
      </div>
    </div>
  </div>
</div>"#
    )
}
