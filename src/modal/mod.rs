// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search modal as an explicit state machine.
//!
//! The controller owns all modal state (open flag, searched query, results,
//! active cursor, pending debounce) and never touches a DOM. Events go in,
//! [`Effect`]s come out, and the host applies them. That makes every
//! transition testable with plain values.
//!
//! # States
//!
//! ```text
//!            open button / Ctrl+K
//!   Closed ─────────────────────────▶ OpenEmpty
//!     ▲                                  │ debounced input
//!     │ Esc / backdrop / close /         ▼
//!     │ select result           ┌─▶ OpenResults ◀─┐
//!     └─────────────────────────┤                  │ debounced input
//!                               └─▶ OpenNoResults ─┘
//! ```
//!
//! A debounced query below the minimum length goes back to `OpenEmpty`.
//!
//! # Cursor
//!
//! Arrow keys clamp at both ends; there is no wraparound. Every new result
//! set starts with the first result active, so Enter right after typing
//! opens the top hit. With no active result, ArrowDown picks the first and
//! ArrowUp the last.

mod debounce;
mod keys;

pub use debounce::Debouncer;
pub use keys::{Key, KeyPress};

use crate::config::SearchConfig;
use crate::render::{classify, render, RenderOptions, View, ViewState};
use crate::search::search_with;
use crate::types::{ScoredResult, SearchIndex};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModalState {
    Closed,
    OpenEmpty,
    OpenResults,
    OpenNoResults,
}

impl ModalState {
    pub fn is_open(self) -> bool {
        !matches!(self, ModalState::Closed)
    }
}

/// Something that happened in the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ModalEvent {
    /// The navbar search button.
    OpenButton,
    /// A keydown anywhere on the page.
    Key(KeyPress),
    /// The input's value changed.
    #[serde(rename_all = "camelCase")]
    Input { value: String, now_ms: u64 },
    /// The timer armed by [`Effect::ArmTimer`] fired.
    #[serde(rename_all = "camelCase")]
    DebounceElapsed { now_ms: u64 },
    /// A click outside the modal content.
    BackdropClick,
    /// The close button in the header.
    CloseButton,
    /// A click on the n-th rendered result.
    ResultClick { index: usize },
}

/// Something the host must do, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Effect {
    /// Suppress the browser's handling of the current key event.
    PreventDefault,
    Show,
    Hide,
    /// `body { overflow: hidden }`.
    LockScroll,
    RestoreScroll,
    #[serde(rename_all = "camelCase")]
    FocusInput { delay_ms: u32 },
    ClearInput,
    /// (Re)arm the debounce timer, replacing any armed one.
    #[serde(rename_all = "camelCase")]
    ArmTimer { delay_ms: u32 },
    CancelTimer,
    /// Re-render the results container from [`SearchModal::view`].
    Render,
    Navigate { url: String },
}

/// A result as the modal keeps it between renders: a position into the
/// index plus the tallies, so no document text is copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Hit {
    index: usize,
    score: u32,
    title_matches: u32,
    content_matches: u32,
}

impl From<&ScoredResult<'_>> for Hit {
    fn from(r: &ScoredResult<'_>) -> Self {
        Self {
            index: r.doc.index,
            score: r.score,
            title_matches: r.title_matches,
            content_matches: r.content_matches,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchModal {
    index: SearchIndex,
    config: SearchConfig,
    open: bool,
    /// Last query actually searched (post-debounce).
    query: String,
    hits: Vec<Hit>,
    active: Option<usize>,
    debounce: Debouncer,
}

impl SearchModal {
    pub fn new(index: SearchIndex, config: SearchConfig) -> Self {
        let debounce = Debouncer::new(config.debounce_ms);
        Self {
            index,
            config,
            open: false,
            query: String::new(),
            hits: Vec::new(),
            active: None,
            debounce,
        }
    }

    pub fn state(&self) -> ModalState {
        classify(
            self.open,
            &self.query,
            self.hits.len(),
            self.config.min_query_chars,
        )
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn has_pending_input(&self) -> bool {
        self.debounce.is_pending()
    }

    /// The current results, borrowed from the index.
    pub fn results(&self) -> Vec<ScoredResult<'_>> {
        self.hits
            .iter()
            .filter_map(|hit| {
                self.index.get(hit.index).map(|doc| ScoredResult {
                    doc,
                    score: hit.score,
                    title_matches: hit.title_matches,
                    content_matches: hit.content_matches,
                })
            })
            .collect()
    }

    pub fn view(&self) -> View {
        let results = self.results();
        render(
            &ViewState {
                open: self.open,
                query: &self.query,
                results: &results,
                active: self.active,
            },
            &RenderOptions::from(&self.config),
        )
    }

    pub fn handle(&mut self, event: ModalEvent) -> Vec<Effect> {
        let before = self.state();
        let effects = match event {
            ModalEvent::OpenButton => self.open(),
            ModalEvent::Key(press) => self.on_key(press),
            ModalEvent::Input { value, now_ms } => self.on_input(value, now_ms),
            ModalEvent::DebounceElapsed { now_ms } => self.on_debounce(now_ms),
            ModalEvent::BackdropClick | ModalEvent::CloseButton => {
                if self.open {
                    self.close()
                } else {
                    Vec::new()
                }
            }
            ModalEvent::ResultClick { index } => {
                if self.open {
                    self.select(index)
                } else {
                    Vec::new()
                }
            }
        };
        let after = self.state();
        if before != after {
            tracing::debug!(?before, ?after, "search modal transition");
        }
        effects
    }

    fn open(&mut self) -> Vec<Effect> {
        let focus = Effect::FocusInput {
            delay_ms: self.config.focus_delay_ms,
        };
        if self.open {
            return vec![focus];
        }
        self.open = true;
        vec![Effect::Show, Effect::LockScroll, focus]
    }

    fn close(&mut self) -> Vec<Effect> {
        self.open = false;
        self.query.clear();
        self.hits.clear();
        self.active = None;
        self.debounce.cancel();
        vec![
            Effect::Hide,
            Effect::RestoreScroll,
            Effect::ClearInput,
            Effect::CancelTimer,
            Effect::Render,
        ]
    }

    /// Close first, then navigate.
    fn select(&mut self, i: usize) -> Vec<Effect> {
        let Some(url) = self
            .hits
            .get(i)
            .and_then(|hit| self.index.get(hit.index))
            .map(|doc| doc.url.clone())
        else {
            return Vec::new();
        };
        let mut effects = self.close();
        effects.push(Effect::Navigate { url });
        effects
    }

    fn on_key(&mut self, press: KeyPress) -> Vec<Effect> {
        if press.is_open_shortcut() {
            let mut effects = vec![Effect::PreventDefault];
            effects.extend(self.open());
            return effects;
        }
        if !self.open {
            return Vec::new();
        }
        match press.key {
            Key::Escape => self.close(),
            Key::ArrowDown => self.move_cursor(Direction::Down),
            Key::ArrowUp => self.move_cursor(Direction::Up),
            Key::Enter => {
                let mut effects = vec![Effect::PreventDefault];
                if let Some(i) = self.active {
                    effects.extend(self.select(i));
                }
                effects
            }
            Key::Char(_) | Key::Other => Vec::new(),
        }
    }

    fn move_cursor(&mut self, direction: Direction) -> Vec<Effect> {
        let mut effects = vec![Effect::PreventDefault];
        let Some(last) = self.hits.len().checked_sub(1) else {
            return effects;
        };
        let next = match (direction, self.active) {
            (Direction::Down, None) => 0,
            (Direction::Down, Some(i)) => (i + 1).min(last),
            (Direction::Up, None) => last,
            (Direction::Up, Some(i)) => i.saturating_sub(1),
        };
        if self.active != Some(next) {
            self.active = Some(next);
            effects.push(Effect::Render);
        }
        effects
    }

    fn on_input(&mut self, value: String, now_ms: u64) -> Vec<Effect> {
        if !self.open {
            return Vec::new();
        }
        let due_at_ms = self.debounce.schedule(value, now_ms);
        vec![arm_timer(due_at_ms, now_ms)]
    }

    fn on_debounce(&mut self, now_ms: u64) -> Vec<Effect> {
        if !self.open {
            return Vec::new();
        }
        match self.debounce.take_due(now_ms) {
            Some(query) => {
                self.run_query(query);
                vec![Effect::Render]
            }
            // Host timers may fire a millisecond early against its wall clock.
            None => match self.debounce.due_at_ms() {
                Some(due_at_ms) => vec![arm_timer(due_at_ms, now_ms)],
                None => Vec::new(),
            },
        }
    }

    fn run_query(&mut self, query: String) {
        self.hits = search_with(&self.index, &query, &self.config)
            .iter()
            .map(Hit::from)
            .collect();
        self.query = query;
        self.active = (!self.hits.is_empty()).then_some(0);
    }
}

fn arm_timer(due_at_ms: u64, now_ms: u64) -> Effect {
    let delay_ms = due_at_ms.saturating_sub(now_ms);
    Effect::ArmTimer {
        delay_ms: u32::try_from(delay_ms).unwrap_or(u32::MAX),
    }
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Up,
    Down,
}
