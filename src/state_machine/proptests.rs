//! Property-based tests for the state machine
//!
//! These tests verify key invariants hold across arbitrary message sequences.

use super::messages;
use super::*;
use crate::core::registry;
use crate::domain::model::ReplyMarkup;
use proptest::prelude::*;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_sign_label() -> impl Strategy<Value = String> {
    (0usize..12).prop_map(|idx| registry::all()[idx].label().to_string())
}

fn arb_menu_label() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(messages::HOROSCOPE_TODAY),
        Just(messages::HOROSCOPE_WEEK),
        Just(messages::HOROSCOPE_MONTH),
        Just(messages::CHANGE_SIGN),
        Just(messages::SIGN_INFO),
        Just(messages::COMPATIBILITY),
    ]
    .prop_map(String::from)
}

fn arb_garbage() -> impl Strategy<Value = String> {
    "[a-zA-Zа-я ]{0,20}"
}

fn arb_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        1 => Just(Event::Start),
        1 => Just(Event::Cancel),
        4 => arb_sign_label().prop_map(Event::Text),
        4 => arb_menu_label().prop_map(Event::Text),
        2 => arb_garbage().prop_map(Event::Text),
    ]
}

fn arb_active_state() -> impl Strategy<Value = ConvState> {
    prop_oneof![
        Just(ConvState::SelectSign),
        Just(ConvState::SelectOption),
        Just(ConvState::SelectCompatibilityMale),
        Just(ConvState::SelectCompatibilityFemale),
    ]
}

/// Sessions reachable by playing `events` from a fresh start.
fn play(events: Vec<Event>) -> Vec<(Session, Event, Result<TransitionResult, TransitionError>)> {
    let mut session = Session::new();
    let mut trace = Vec::new();
    for event in std::iter::once(Event::Start).chain(events) {
        let result = transition(&session, event.clone());
        if let Ok(ok) = &result {
            session = ok.session;
            if session.state == ConvState::Cancelled {
                // runtime discards cancelled sessions
                session = Session::new();
            }
        }
        trace.push((session, event, result));
    }
    trace
}

proptest! {
    /// Past sign selection a sign is always stored, and during the female
    /// step a male sign is always stored.
    #[test]
    fn prop_selected_signs_present(events in proptest::collection::vec(arb_event(), 0..40)) {
        for (session, _, _) in play(events) {
            match session.state {
                ConvState::SelectOption
                | ConvState::SelectCompatibilityMale => prop_assert!(session.selected_sign.is_some()),
                ConvState::SelectCompatibilityFemale => {
                    prop_assert!(session.selected_sign.is_some());
                    prop_assert!(session.selected_male_sign.is_some());
                }
                _ => {}
            }
        }
    }

    /// Every accepted text message produces at least one outbound message.
    #[test]
    fn prop_text_always_answered(events in proptest::collection::vec(arb_event(), 0..40)) {
        for (_, event, result) in play(events) {
            if let (Event::Text(_), Ok(result)) = (event, result) {
                prop_assert!(result.outbound_count() >= 1);
            }
        }
    }

    #[test]
    fn prop_cancel_from_active_state(state in arb_active_state(), label in arb_sign_label()) {
        let session = Session {
            state,
            selected_sign: registry::lookup(&label).ok(),
            selected_male_sign: registry::lookup(&label).ok(),
        };
        let result = transition(&session, Event::Cancel).unwrap();
        prop_assert_eq!(result.session.state, ConvState::Cancelled);
        prop_assert_eq!(result.outbound_count(), 1);
        prop_assert_eq!(
            &result.effects[0],
            &Effect::reply_with(messages::FAREWELL, ReplyMarkup::Remove)
        );
    }

    /// Unregistered input never changes the stored signs.
    #[test]
    fn prop_garbage_keeps_signs(state in arb_active_state(), input in arb_garbage()) {
        let session = Session {
            state,
            selected_sign: registry::by_ordinal(3).ok(),
            selected_male_sign: registry::by_ordinal(7).ok(),
        };
        let result = transition(&session, Event::Text(input)).unwrap();
        prop_assert_eq!(result.session.selected_sign, session.selected_sign);
        prop_assert_eq!(result.session.selected_male_sign, session.selected_male_sign);
    }
}
