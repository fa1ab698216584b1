//! Pure state transition function

use super::messages::{self, MenuAction};
use super::{ConvState, Effect, Event, Session};
use crate::core::{combination, registry};
use crate::domain::model::{HoroscopeQuery, ReplyMarkup};
use thiserror::Error;

/// Result of a state transition
#[derive(Debug)]
pub struct TransitionResult {
    pub session: Session,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            effects: vec![],
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Number of messages the effects will send.
    pub fn outbound_count(&self) -> usize {
        self.effects.iter().filter(|e| e.is_outbound()).count()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("No conversation in progress (send /start first)")]
    NoConversation,
}

/// Pure transition function: given the same session and event it always
/// produces the same result, with no I/O.
pub fn transition(session: &Session, event: Event) -> Result<TransitionResult, TransitionError> {
    let session = *session;

    match (session.state, event) {
        // Start resets from anywhere
        (_, Event::Start) => Ok(prompt_for_sign(session)),

        (ConvState::Idle | ConvState::Cancelled, _) => Err(TransitionError::NoConversation),

        (_, Event::Cancel) => Ok(TransitionResult::new(session.with_state(ConvState::Cancelled))
            .with_effect(Effect::reply_with(messages::FAREWELL, ReplyMarkup::Remove))
            .with_effect(Effect::EndSession)),

        (ConvState::SelectSign, Event::Text(input)) => Ok(select_sign(session, &input)),

        (ConvState::SelectOption, Event::Text(input)) => Ok(select_option(session, &input)),

        (ConvState::SelectCompatibilityMale, Event::Text(input)) => match registry::lookup(&input) {
            Ok(male) => Ok(TransitionResult::new(Session {
                state: ConvState::SelectCompatibilityFemale,
                selected_male_sign: Some(male),
                ..session
            })
            .with_effect(Effect::reply_with(
                messages::male_chosen(male.label()),
                messages::sign_keyboard(),
            ))),
            Err(_) => Ok(
                TransitionResult::new(session).with_effect(Effect::reply(messages::PAIR_SIGN_RETRY))
            ),
        },

        (ConvState::SelectCompatibilityFemale, Event::Text(input)) => {
            Ok(select_compatibility_female(session, &input))
        }
    }
}

fn prompt_for_sign(session: Session) -> TransitionResult {
    TransitionResult::new(session.with_state(ConvState::SelectSign))
        .with_effect(Effect::reply_with(messages::GREETING, messages::sign_keyboard()))
}

fn prompt_for_male(session: Session) -> TransitionResult {
    TransitionResult::new(session.with_state(ConvState::SelectCompatibilityMale))
        .with_effect(Effect::reply_with(messages::MALE_PROMPT, messages::sign_keyboard()))
}

fn select_sign(session: Session, input: &str) -> TransitionResult {
    match registry::lookup(input) {
        Ok(sign) => TransitionResult::new(Session {
            state: ConvState::SelectOption,
            selected_sign: Some(sign),
            ..session
        })
        .with_effect(Effect::reply_with(
            messages::sign_chosen(sign.label()),
            messages::menu_keyboard(),
        )),
        // the wait notice doubles as the re-prompt
        Err(_) => TransitionResult::new(session).with_effect(Effect::reply(messages::SIGN_RETRY)),
    }
}

fn select_option(session: Session, input: &str) -> TransitionResult {
    match MenuAction::parse(input) {
        Some(MenuAction::Horoscope(period)) => match session.selected_sign {
            Some(sign) => TransitionResult::new(session)
                .with_effect(Effect::FetchHoroscope(HoroscopeQuery::new(sign, period))),
            None => prompt_for_sign(session),
        },
        Some(MenuAction::ChangeSign) => prompt_for_sign(session),
        Some(MenuAction::SignInfo) => {
            let text = session
                .selected_sign
                .map_or(messages::SIGN_INFO_UNAVAILABLE, |sign| sign.description());
            TransitionResult::new(session).with_effect(Effect::reply(text))
        }
        Some(MenuAction::Compatibility) => prompt_for_male(session),
        None => TransitionResult::new(session).with_effect(Effect::reply(messages::OPTION_RETRY)),
    }
}

fn select_compatibility_female(session: Session, input: &str) -> TransitionResult {
    let Ok(female) = registry::lookup(input) else {
        // invalid female sign sends the user back to the male prompt state
        return TransitionResult::new(session.with_state(ConvState::SelectCompatibilityMale))
            .with_effect(Effect::reply(messages::PAIR_SIGN_RETRY));
    };
    let Some(male) = session.selected_male_sign else {
        return prompt_for_male(session);
    };

    TransitionResult::new(session.with_state(ConvState::SelectOption))
        .with_effect(Effect::FetchCompatibility(combination::combine(male, female)))
        .with_effect(Effect::reply_with(messages::MENU_PROMPT, messages::menu_keyboard()))
}
