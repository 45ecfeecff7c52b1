// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the search modal.
//!
//! Drives a ready `SiteSearch` with arbitrary event streams and checks the
//! controller's invariants after every step.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sitesearch::testing::machine_learning_corpus;
use sitesearch::{Effect, Key, KeyPress, ModalEvent, ModalState, SearchConfig, SiteSearch};

#[derive(Debug, Arbitrary)]
enum Step {
    Open,
    Key { key: u8, ctrl: bool, meta: bool },
    Input { value: String, gap: u16 },
    Elapse { gap: u16 },
    Backdrop,
    Close,
    Click { index: u8 },
}

fn key(code: u8) -> Key {
    match code % 7 {
        0 => Key::ArrowUp,
        1 => Key::ArrowDown,
        2 => Key::Enter,
        3 => Key::Escape,
        4 => Key::Char('k'),
        5 => Key::Char(char::from(b'a' + code % 26)),
        _ => Key::Other,
    }
}

fuzz_target!(|steps: Vec<Step>| {
    let mut site = SiteSearch::new(SearchConfig::default());
    site.attach(Ok(machine_learning_corpus()));
    let mut now = 0u64;

    for step in steps.into_iter().take(256) {
        let event = match step {
            Step::Open => ModalEvent::OpenButton,
            Step::Key { key: code, ctrl, meta } => ModalEvent::Key(KeyPress {
                key: key(code),
                ctrl,
                meta,
            }),
            Step::Input { value, gap } => {
                now += u64::from(gap);
                ModalEvent::Input {
                    value: value.chars().take(100).collect(),
                    now_ms: now,
                }
            }
            Step::Elapse { gap } => {
                now += u64::from(gap);
                ModalEvent::DebounceElapsed { now_ms: now }
            }
            Step::Backdrop => ModalEvent::BackdropClick,
            Step::Close => ModalEvent::CloseButton,
            Step::Click { index } => ModalEvent::ResultClick {
                index: usize::from(index),
            },
        };
        let effects = site.handle(event);

        let Some(modal) = site.modal() else {
            panic!("attached site must stay ready");
        };
        let results = modal.results();
        assert!(results.len() <= 2);
        if let Some(active) = modal.active() {
            assert!(active < results.len());
        }
        assert_eq!(modal.view().state(), modal.state());
        if modal.state() == ModalState::Closed {
            assert!(modal.query().is_empty());
        }
        if effects.iter().any(|e| matches!(e, Effect::Navigate { .. })) {
            assert!(!modal.is_open());
        }
    }
});
