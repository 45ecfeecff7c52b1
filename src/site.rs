// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The page-level search component.
//!
//! One instance per page. It starts `Loading`, and [`SiteSearch::attach`] is
//! the single setup step that moves it to `Ready` (index built, modal wired)
//! or `Disabled` (load failed, feature inert). Setup cannot run twice: later
//! attaches are ignored, so there is no module-level "initialized" flag to
//! get wrong.
//!
//! Until the component is `Ready`, every event is dropped without effects.
//! Pressing Ctrl+K while the index is still loading does nothing at all,
//! not even `preventDefault`, so the browser keeps its own binding. The open
//! button is a dead control in the same way.

use crate::config::SearchConfig;
use crate::error::LoadError;
use crate::index::build_index;
use crate::modal::{Effect, ModalEvent, ModalState, SearchModal};
use crate::render::View;
use crate::types::Document;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Readiness {
    Loading,
    Ready,
    Disabled,
}

#[derive(Debug)]
enum Phase {
    Loading,
    Ready(Box<SearchModal>),
    Disabled(LoadError),
}

#[derive(Debug)]
pub struct SiteSearch {
    config: SearchConfig,
    phase: Phase,
}

impl SiteSearch {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            phase: Phase::Loading,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn readiness(&self) -> Readiness {
        match self.phase {
            Phase::Loading => Readiness::Loading,
            Phase::Ready(_) => Readiness::Ready,
            Phase::Disabled(_) => Readiness::Disabled,
        }
    }

    /// The load failure, once disabled.
    pub fn load_error(&self) -> Option<&LoadError> {
        match &self.phase {
            Phase::Disabled(e) => Some(e),
            _ => None,
        }
    }

    pub fn modal(&self) -> Option<&SearchModal> {
        match &self.phase {
            Phase::Ready(modal) => Some(modal.as_ref()),
            _ => None,
        }
    }

    /// One-time setup with the outcome of the index load.
    ///
    /// Returns the resulting readiness. Calls after the first are ignored.
    pub fn attach(&mut self, loaded: Result<Vec<Document>, LoadError>) -> Readiness {
        if !matches!(self.phase, Phase::Loading) {
            tracing::warn!(readiness = ?self.readiness(), "search already attached; ignoring");
            return self.readiness();
        }
        self.phase = match loaded {
            Ok(docs) => {
                let index = build_index(docs);
                tracing::debug!(docs = index.len(), "search ready");
                Phase::Ready(Box::new(SearchModal::new(index, self.config.clone())))
            }
            Err(e) => {
                tracing::error!(error = %e, "Search initialization failed");
                Phase::Disabled(e)
            }
        };
        self.readiness()
    }

    /// Route an event to the modal. Inert unless ready.
    pub fn handle(&mut self, event: ModalEvent) -> Vec<Effect> {
        match &mut self.phase {
            Phase::Ready(modal) => modal.handle(event),
            Phase::Loading | Phase::Disabled(_) => Vec::new(),
        }
    }

    pub fn state(&self) -> ModalState {
        self.modal().map_or(ModalState::Closed, SearchModal::state)
    }

    pub fn view(&self) -> View {
        self.modal().map_or(View::Hidden, SearchModal::view)
    }
}
