//! Effects produced by state transitions

use crate::domain::model::{CombinationId, HoroscopeQuery, ReplyMarkup};

/// Effects to be executed, in order, after a state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send a message to the user
    Reply { text: String, markup: ReplyMarkup },

    /// Fetch a horoscope and send it to the user
    FetchHoroscope(HoroscopeQuery),

    /// Fetch a compatibility reading and send it to the user
    FetchCompatibility(CombinationId),

    /// Forget the session
    EndSession,
}

impl Effect {
    pub fn reply(text: impl Into<String>) -> Self {
        Effect::Reply {
            text: text.into(),
            markup: ReplyMarkup::Keep,
        }
    }

    pub fn reply_with(text: impl Into<String>, markup: ReplyMarkup) -> Self {
        Effect::Reply {
            text: text.into(),
            markup,
        }
    }

    /// Whether executing this effect sends exactly one message.
    pub fn is_outbound(&self) -> bool {
        !matches!(self, Effect::EndSession)
    }
}
