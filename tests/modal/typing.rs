//! Input, debouncing, and the empty / no-results states.

use super::{ctrl_k, fixture_modal, type_query};
use sitesearch::render::NO_RESULTS_TEXT;
use sitesearch::{Effect, ModalEvent, ModalState, View};

#[test]
fn test_input_arms_timer_and_defers_search() {
    let mut modal = fixture_modal();
    modal.handle(ctrl_k());

    let effects = modal.handle(ModalEvent::Input {
        value: "rust".to_string(),
        now_ms: 0,
    });
    assert_eq!(effects, vec![Effect::ArmTimer { delay_ms: 300 }]);
    assert!(modal.has_pending_input());
    assert_eq!(modal.state(), ModalState::OpenEmpty);

    let effects = modal.handle(ModalEvent::DebounceElapsed { now_ms: 300 });
    assert_eq!(effects, vec![Effect::Render]);
    assert_eq!(modal.state(), ModalState::OpenResults);
}

#[test]
fn test_burst_searches_only_last_value() {
    let mut modal = fixture_modal();
    modal.handle(ctrl_k());
    for (i, value) in ["r", "ru", "rus", "rust"].iter().enumerate() {
        modal.handle(ModalEvent::Input {
            value: value.to_string(),
            now_ms: i as u64 * 100,
        });
    }
    // The timer armed by the first keystroke fires before the last deadline
    assert_eq!(
        modal.handle(ModalEvent::DebounceElapsed { now_ms: 300 }),
        vec![Effect::ArmTimer { delay_ms: 300 }]
    );
    assert_eq!(modal.query(), "");

    assert_eq!(
        modal.handle(ModalEvent::DebounceElapsed { now_ms: 600 }),
        vec![Effect::Render]
    );
    assert_eq!(modal.query(), "rust");
}

#[test]
fn test_timer_one_millisecond_early_is_rearmed() {
    let mut modal = fixture_modal();
    modal.handle(ctrl_k());
    modal.handle(ModalEvent::Input {
        value: "machine".to_string(),
        now_ms: 1_000,
    });

    assert_eq!(
        modal.handle(ModalEvent::DebounceElapsed { now_ms: 1_299 }),
        vec![Effect::ArmTimer { delay_ms: 1 }]
    );
    assert!(modal.has_pending_input());
    assert_eq!(modal.state(), ModalState::OpenEmpty);

    assert_eq!(
        modal.handle(ModalEvent::DebounceElapsed { now_ms: 1_300 }),
        vec![Effect::Render]
    );
    assert_eq!(modal.query(), "machine");
    assert_eq!(modal.state(), ModalState::OpenResults);
}

#[test]
fn test_no_matches_shows_notice() {
    let mut modal = fixture_modal();
    modal.handle(ctrl_k());
    type_query(&mut modal, "kubernetes", 0);

    assert_eq!(modal.state(), ModalState::OpenNoResults);
    assert_eq!(modal.view(), View::NoResults);
    assert!(modal.view().to_html().contains(NO_RESULTS_TEXT));
}

#[test]
fn test_clearing_input_returns_to_empty() {
    let mut modal = fixture_modal();
    modal.handle(ctrl_k());
    type_query(&mut modal, "rust", 0);
    assert_eq!(modal.state(), ModalState::OpenResults);

    type_query(&mut modal, "", 2_000);
    assert_eq!(modal.state(), ModalState::OpenEmpty);
    assert_eq!(modal.view(), View::Empty);
    assert_eq!(modal.view().to_html(), "");
}

#[test]
fn test_short_query_is_empty_not_no_results() {
    let mut modal = fixture_modal();
    modal.handle(ctrl_k());
    type_query(&mut modal, "r", 0);
    assert_eq!(modal.state(), ModalState::OpenEmpty);
}

#[test]
fn test_closing_cancels_pending_input() {
    let mut modal = fixture_modal();
    modal.handle(ctrl_k());
    modal.handle(ModalEvent::Input {
        value: "rust".to_string(),
        now_ms: 0,
    });
    modal.handle(ModalEvent::BackdropClick);
    assert!(!modal.has_pending_input());

    modal.handle(ctrl_k());
    assert!(modal
        .handle(ModalEvent::DebounceElapsed { now_ms: 1_000 })
        .is_empty());
    assert_eq!(modal.state(), ModalState::OpenEmpty);
}

#[test]
fn test_title_hits_are_highlighted() {
    let mut modal = fixture_modal();
    modal.handle(ctrl_k());
    type_query(&mut modal, "machine", 0);

    let View::Results(entries) = modal.view() else {
        panic!("expected results view");
    };
    assert!(entries[0].highlight);
    assert!(!entries[1].highlight);
    assert!(modal
        .view()
        .to_html()
        .contains("<mark>Machine Learning Basics</mark>"));
}
