//! Modal invariants under random event streams.

use super::{corpus_strategy, query_strategy};
use proptest::prelude::*;
use sitesearch::{
    build_index, Effect, Key, KeyPress, ModalEvent, ModalState, SearchConfig, SearchModal, View,
};

fn key_strategy() -> impl Strategy<Value = KeyPress> {
    (
        prop_oneof![
            Just(Key::ArrowUp),
            Just(Key::ArrowDown),
            Just(Key::Enter),
            Just(Key::Escape),
            Just(Key::Char('k')),
            Just(Key::Char('a')),
            Just(Key::Other),
        ],
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(key, ctrl, meta)| KeyPress { key, ctrl, meta })
}

/// Events with timestamps as offsets; the driver makes them monotonic.
fn event_strategy() -> impl Strategy<Value = (ModalEvent, u64)> {
    let event = prop_oneof![
        Just(ModalEvent::OpenButton),
        key_strategy().prop_map(ModalEvent::Key),
        query_strategy().prop_map(|value| ModalEvent::Input { value, now_ms: 0 }),
        Just(ModalEvent::DebounceElapsed { now_ms: 0 }),
        Just(ModalEvent::BackdropClick),
        Just(ModalEvent::CloseButton),
        (0usize..12).prop_map(|index| ModalEvent::ResultClick { index }),
    ];
    (event, 0u64..700)
}

fn stamp(event: ModalEvent, now: u64) -> ModalEvent {
    match event {
        ModalEvent::Input { value, .. } => ModalEvent::Input { value, now_ms: now },
        ModalEvent::DebounceElapsed { .. } => ModalEvent::DebounceElapsed { now_ms: now },
        other => other,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_modal_invariants_hold(
        corpus in corpus_strategy(),
        events in prop::collection::vec(event_strategy(), 0..60),
    ) {
        let mut modal = SearchModal::new(build_index(corpus), SearchConfig::default());
        let mut now = 0u64;

        for (event, gap) in events {
            now += gap;
            let was_open = modal.is_open();
            let is_timer = matches!(event, ModalEvent::DebounceElapsed { .. });
            let effects = modal.handle(stamp(event, now));

            let results = modal.results().len();
            prop_assert!(results <= 10);
            if let Some(active) = modal.active() {
                prop_assert!(active < results);
            }
            prop_assert_eq!(modal.view().state(), modal.state());

            if !modal.is_open() {
                prop_assert_eq!(modal.state(), ModalState::Closed);
                prop_assert_eq!(modal.query(), "");
                prop_assert_eq!(results, 0);
                prop_assert_eq!(modal.view(), View::Hidden);
            }

            // A timer that leaves input pending always re-arms, so no query is stranded
            if is_timer && modal.has_pending_input() {
                let rearmed = effects
                    .iter()
                    .any(|e| matches!(e, Effect::ArmTimer { delay_ms } if *delay_ms > 0));
                prop_assert!(rearmed);
            }

            // Navigation only ever follows a close
            if let Some(nav) = effects.iter().position(|e| matches!(e, Effect::Navigate { .. })) {
                prop_assert!(was_open);
                prop_assert!(!modal.is_open());
                prop_assert!(effects[..nav].contains(&Effect::Hide));
            }

            // Opening and closing come in matched scroll pairs
            if effects.contains(&Effect::Show) {
                prop_assert!(!was_open);
                prop_assert!(effects.contains(&Effect::LockScroll));
            }
            if effects.contains(&Effect::Hide) {
                prop_assert!(was_open);
                prop_assert!(effects.contains(&Effect::RestoreScroll));
            }
        }
    }
}
