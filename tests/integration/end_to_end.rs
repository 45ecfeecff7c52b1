//! A page session from load to navigation.

use super::common::fixture_site;
use sitesearch::render::NO_RESULTS_TEXT;
use sitesearch::{
    load_from_site, Effect, Key, KeyPress, ModalEvent, ModalState, Readiness, SearchConfig,
    SiteSearch, View,
};

fn ctrl_k() -> ModalEvent {
    ModalEvent::Key(KeyPress::ctrl(Key::Char('k')))
}

fn input(value: &str, now_ms: u64) -> ModalEvent {
    ModalEvent::Input {
        value: value.to_string(),
        now_ms,
    }
}

fn ready_site() -> SiteSearch {
    let mut site = SiteSearch::new(SearchConfig::default());
    let loaded = load_from_site(&fixture_site(), &site.config().index_path);
    assert_eq!(site.attach(loaded), Readiness::Ready);
    site
}

#[test]
fn test_full_session() {
    let mut site = ready_site();

    site.handle(ctrl_k());
    assert_eq!(site.state(), ModalState::OpenEmpty);

    assert_eq!(
        site.handle(input("machine", 10)),
        vec![Effect::ArmTimer { delay_ms: 300 }]
    );
    assert_eq!(
        site.handle(ModalEvent::DebounceElapsed { now_ms: 310 }),
        vec![Effect::Render]
    );
    let html = site.view().to_html();
    let first = html.find("/posts/machine-learning-basics/").unwrap();
    let second = html.find("/posts/cooking-tips/").unwrap();
    assert!(first < second);
    assert!(html.contains(
        r#"<div class="search-result active" data-url="/posts/machine-learning-basics/">"#
    ));

    site.handle(ModalEvent::Key(KeyPress::new(Key::ArrowDown)));
    let effects = site.handle(ModalEvent::Key(KeyPress::new(Key::Enter)));
    assert_eq!(
        effects.last(),
        Some(&Effect::Navigate {
            url: "/posts/cooking-tips/".to_string()
        })
    );
    assert_eq!(site.state(), ModalState::Closed);
}

#[test]
fn test_enter_after_typing_opens_top_result() {
    let mut site = ready_site();
    site.handle(ctrl_k());
    site.handle(input("rust", 0));
    // Timer callbacks can land a millisecond before Date.now() reaches the deadline
    assert_eq!(
        site.handle(ModalEvent::DebounceElapsed { now_ms: 299 }),
        vec![Effect::ArmTimer { delay_ms: 1 }]
    );
    site.handle(ModalEvent::DebounceElapsed { now_ms: 300 });

    let modal = site.modal().unwrap();
    let top = modal.results()[0].url().to_string();
    let effects = site.handle(ModalEvent::Key(KeyPress::new(Key::Enter)));
    assert_eq!(effects.last(), Some(&Effect::Navigate { url: top }));
}

#[test]
fn test_no_matching_terms_shows_notice() {
    let mut site = ready_site();
    site.handle(ModalEvent::OpenButton);
    site.handle(input("quantum chromodynamics", 0));
    site.handle(ModalEvent::DebounceElapsed { now_ms: 300 });

    assert_eq!(site.state(), ModalState::OpenNoResults);
    assert!(site.view().to_html().contains(NO_RESULTS_TEXT));
}

#[test]
fn test_shortcut_before_index_arrives() {
    let mut site = SiteSearch::new(SearchConfig::default());

    assert!(site.handle(ctrl_k()).is_empty());
    assert_eq!(site.state(), ModalState::Closed);

    // The index arrives; the same shortcut now works
    let loaded = load_from_site(&fixture_site(), "/search.json");
    site.attach(loaded);
    assert_eq!(site.handle(ctrl_k()).first(), Some(&Effect::PreventDefault));
    assert_eq!(site.state(), ModalState::OpenEmpty);
}

#[test]
fn test_clearing_query_empties_results() {
    let mut site = ready_site();
    site.handle(ctrl_k());
    site.handle(input("rust", 0));
    site.handle(ModalEvent::DebounceElapsed { now_ms: 300 });
    assert_eq!(site.state(), ModalState::OpenResults);

    site.handle(input("", 1_000));
    site.handle(ModalEvent::DebounceElapsed { now_ms: 1_300 });
    assert_eq!(site.state(), ModalState::OpenEmpty);
    assert_eq!(site.view(), View::Empty);
    assert!(site.view().to_html().is_empty());
}

#[test]
fn test_disabled_site_is_inert() {
    let dir = tempfile::tempdir().unwrap();
    let mut site = SiteSearch::new(SearchConfig::default());
    site.attach(load_from_site(dir.path(), "/search.json"));

    assert_eq!(site.readiness(), Readiness::Disabled);
    for event in [ctrl_k(), ModalEvent::OpenButton, input("rust", 0)] {
        assert!(site.handle(event).is_empty());
    }
    assert_eq!(site.view(), View::Hidden);
}

#[test]
fn test_long_excerpts_are_cut() {
    let mut site = ready_site();
    site.handle(ctrl_k());
    site.handle(input("machine", 0));
    site.handle(ModalEvent::DebounceElapsed { now_ms: 300 });

    let View::Results(entries) = site.view() else {
        panic!("expected results");
    };
    // The fixture's first excerpt is longer than 120 characters
    assert_eq!(entries[0].excerpt.chars().count(), 123);
    assert!(entries[0].excerpt.ends_with("..."));
    assert_eq!(entries[0].date.as_deref(), Some("2023-09-14"));
}
